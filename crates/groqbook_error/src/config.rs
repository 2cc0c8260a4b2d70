//! Settings that cannot be loaded or are incomplete.

/// A missing API key, an unreadable config file, or malformed TOML.
///
/// # Examples
///
/// ```
/// use groqbook_error::ConfigError;
///
/// let err = ConfigError::new("GROQ_API_KEY environment variable not set");
/// assert_eq!(err.message, "GROQ_API_KEY environment variable not set");
/// assert!(err.to_string().starts_with("Config Error: GROQ_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Which setting is wrong and why
    pub message: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Records a configuration problem at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
