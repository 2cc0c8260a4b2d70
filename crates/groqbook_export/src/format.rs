//! Export formats and their download metadata.

/// A downloadable export of the generated book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// UTF-8 markdown
    Text,
    /// Rendered PDF
    Pdf,
}

impl ExportFormat {
    /// File name offered for download.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "generated_book.txt",
            ExportFormat::Pdf => "generated_book.pdf",
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}
