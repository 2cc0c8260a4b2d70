//! Writing export files to disk.

use crate::{ExportFormat, to_pdf, to_plain_text};
use groqbook_error::{ExportError, ExportErrorKind, GroqbookResult};
use groqbook_interface::PdfRenderer;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// A file written by [`write_exports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Format of the file
    pub format: ExportFormat,
    /// Where it was written
    pub path: PathBuf,
    /// Size in bytes
    pub size: usize,
}

/// Writes the text export and, when a renderer is given, the PDF export.
///
/// The text file is written first, so it survives a PDF rendering failure.
#[instrument(skip(markdown, renderer), fields(output_dir = %output_dir.display()))]
pub async fn write_exports(
    markdown: &str,
    output_dir: &Path,
    renderer: Option<&dyn PdfRenderer>,
) -> GroqbookResult<Vec<ExportArtifact>> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| io_error(output_dir, e))?;

    let mut artifacts = vec![write_export(output_dir, ExportFormat::Text, to_plain_text(markdown)).await?];

    if let Some(renderer) = renderer {
        let pdf = to_pdf(markdown, renderer).await?;
        artifacts.push(write_export(output_dir, ExportFormat::Pdf, pdf).await?);
    }

    Ok(artifacts)
}

/// Writes one export file named after `format` into `output_dir`.
pub async fn write_export(
    output_dir: &Path,
    format: ExportFormat,
    bytes: Vec<u8>,
) -> GroqbookResult<ExportArtifact> {
    let path = output_dir.join(format.file_name());
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| io_error(&path, e))?;

    info!(format = %format, path = %path.display(), size = bytes.len(), "Wrote export");
    Ok(ExportArtifact {
        format,
        path,
        size: bytes.len(),
    })
}

fn io_error(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::new(ExportErrorKind::Io(format!("{}: {}", path.display(), e)))
}
