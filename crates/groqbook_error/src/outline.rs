//! Outline decoding error types.

/// Ways an outline response can fail to decode into a book structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutlineErrorKind {
    /// Response text is not valid JSON
    #[display("Invalid JSON: {}", _0)]
    InvalidJson(String),
    /// Top-level JSON value is not an object
    #[display("Outline must be a JSON object, got {}", _0)]
    NotAnObject(String),
    /// A section value is neither a description string nor a nested object
    #[display("Section '{}' has unsupported value type {}", title, found)]
    InvalidNode {
        /// Section title
        title: String,
        /// JSON type that was found
        found: String,
    },
    /// The same title appears more than once in the outline
    #[display("Section title '{}' appears more than once", _0)]
    DuplicateTitle(String),
    /// Outline contains no sections
    #[display("Outline contains no sections")]
    Empty,
}

/// Outline decode error with location tracking.
///
/// # Examples
///
/// ```
/// use groqbook_error::{OutlineError, OutlineErrorKind};
///
/// let err = OutlineError::new(OutlineErrorKind::DuplicateTitle("Intro".to_string()));
/// assert!(format!("{}", err).contains("more than once"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Outline Error: {} at line {} in {}", kind, line, file)]
pub struct OutlineError {
    /// The kind of error that occurred
    pub kind: OutlineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OutlineError {
    /// Create a new outline error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OutlineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
