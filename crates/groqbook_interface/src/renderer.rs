//! HTML to PDF rendering trait.

use async_trait::async_trait;
use groqbook_error::GroqbookResult;

/// Renders a complete HTML document into PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Renders `html` and returns the PDF byte stream.
    async fn render(&self, html: &str) -> GroqbookResult<Vec<u8>>;

    /// Renderer name for logging.
    fn name(&self) -> &str;
}
