//! Groq API error types.

/// Groq-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroqErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// HTTP error with status code and message
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be parsed
    ResponseParsing(String),
    /// Response contained no choices
    EmptyResponse,
    /// Streaming response broke off or carried an undecodable event
    StreamInterrupted(String),
}

impl std::fmt::Display for GroqErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroqErrorKind::MissingApiKey => {
                write!(f, "GROQ_API_KEY environment variable not set")
            }
            GroqErrorKind::HttpStatus {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GroqErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse Groq response: {}", msg)
            }
            GroqErrorKind::EmptyResponse => write!(f, "Groq response contained no choices"),
            GroqErrorKind::StreamInterrupted(msg) => {
                write!(f, "Stream interrupted: {}", msg)
            }
        }
    }
}

/// Groq error with source location tracking.
///
/// # Examples
///
/// ```
/// use groqbook_error::{GroqError, GroqErrorKind};
///
/// let err = GroqError::new(GroqErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GROQ_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct GroqError {
    /// The kind of error that occurred
    pub kind: GroqErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GroqError {
    /// Create a new GroqError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GroqErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GroqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Groq Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GroqError {}
