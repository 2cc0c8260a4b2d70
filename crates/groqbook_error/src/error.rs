//! Crate-level error aggregation.

use crate::{
    BuilderError, ConfigError, DocumentError, ExportError, GroqError, HttpError, OutlineError,
    ValidationError,
};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum GroqbookErrorKind {
    /// HTTP error
    Http(HttpError),
    /// Configuration error
    Config(ConfigError),
    /// Builder misuse
    Builder(BuilderError),
    /// User input rejected
    Validation(ValidationError),
    /// Outline response could not be decoded
    Outline(OutlineError),
    /// Document model misuse
    Document(DocumentError),
    /// Groq API error
    Groq(GroqError),
    /// Export error
    Export(ExportError),
}

impl std::fmt::Display for GroqbookErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroqbookErrorKind::Http(e) => write!(f, "{}", e),
            GroqbookErrorKind::Config(e) => write!(f, "{}", e),
            GroqbookErrorKind::Builder(e) => write!(f, "{}", e),
            GroqbookErrorKind::Validation(e) => write!(f, "{}", e),
            GroqbookErrorKind::Outline(e) => write!(f, "{}", e),
            GroqbookErrorKind::Document(e) => write!(f, "{}", e),
            GroqbookErrorKind::Groq(e) => write!(f, "{}", e),
            GroqbookErrorKind::Export(e) => write!(f, "{}", e),
        }
    }
}

/// Groqbook error with kind discrimination.
#[derive(Debug)]
pub struct GroqbookError(Box<GroqbookErrorKind>);

impl GroqbookError {
    /// Create a new error from a kind.
    pub fn new(kind: GroqbookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GroqbookErrorKind {
        &self.0
    }

    /// Whether this error is reported to the user and recovered from.
    ///
    /// Only topic validation and outline decoding qualify; everything else
    /// halts the run.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            *self.0,
            GroqbookErrorKind::Validation(_) | GroqbookErrorKind::Outline(_)
        )
    }
}

impl std::fmt::Display for GroqbookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Groqbook Error: {}", self.0)
    }
}

impl std::error::Error for GroqbookError {}

// Generic From implementation for any type that converts to GroqbookErrorKind
impl<T> From<T> for GroqbookError
where
    T: Into<GroqbookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Groqbook operations.
pub type GroqbookResult<T> = std::result::Result<T, GroqbookError>;
