//! Plain text and PDF export for Groqbook.
//!
//! Both encoders take the flattened markdown of a book. PDF goes through an
//! HTML intermediate handed to a [`PdfRenderer`](groqbook_interface::PdfRenderer).

mod format;
mod html;
mod pdf;
mod text;
mod writer;

pub use format::ExportFormat;
pub use html::{PDF_STYLESHEET, markdown_to_html, wrap_html_document};
pub use pdf::{CommandPdfRenderer, DEFAULT_PDF_COMMAND, to_pdf};
pub use text::to_plain_text;
pub use writer::{ExportArtifact, write_export, write_exports};
