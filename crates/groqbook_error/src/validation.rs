//! Input validation error types.

/// Reasons a user request is rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Topic has fewer characters than required
    TopicTooShort {
        /// Number of characters supplied
        length: usize,
        /// Minimum number of characters accepted
        minimum: usize,
    },
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationErrorKind::TopicTooShort { minimum, .. } => {
                write!(f, "Book topic must be at least {} characters long", minimum)
            }
        }
    }
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use groqbook_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::TopicTooShort { length: 3, minimum: 10 });
/// assert_eq!(err.kind.to_string(), "Book topic must be at least 10 characters long");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ValidationError {}
