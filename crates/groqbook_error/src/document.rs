//! Document model error types.

/// Document model error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DocumentErrorKind {
    /// Title is not part of the document outline
    #[display("Unknown section title: {}", _0)]
    UnknownTitle(String),
}

/// Document error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: {} at line {} in {}", kind, line, file)]
pub struct DocumentError {
    /// The kind of error that occurred
    pub kind: DocumentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DocumentError {
    /// Create a new document error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocumentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
