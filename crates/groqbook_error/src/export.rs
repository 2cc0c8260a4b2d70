//! Export error types.

/// Kinds of export errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// External HTML to PDF converter failed
    #[display("PDF rendering failed: {}", _0)]
    PdfRender(String),
    /// Converter produced no output
    #[display("PDF renderer produced no output")]
    EmptyPdf,
    /// I/O error while writing an export file
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Export error with location tracking.
///
/// # Examples
///
/// ```
/// use groqbook_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::Io("disk full".to_string()));
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
