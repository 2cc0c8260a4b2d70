//! Transport failures talking to the completion API.

/// The completion API could not be reached, or the connection broke.
///
/// Non-2xx responses are not transport failures; they are reported as
/// [`GroqErrorKind::HttpStatus`](crate::GroqErrorKind::HttpStatus).
///
/// # Examples
///
/// ```
/// use groqbook_error::HttpError;
///
/// let err = HttpError::new("connection refused (api.groq.com:443)");
/// assert!(err.to_string().starts_with("Transport Error: connection refused"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// What the HTTP client reported
    pub message: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl HttpError {
    /// Records a transport failure at the caller's location.
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
