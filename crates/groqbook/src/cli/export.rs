//! Export command handler.

use super::PdfArgs;
use crate::FileConfig;
use anyhow::Context;
use groqbook_export::{CommandPdfRenderer, DEFAULT_PDF_COMMAND, write_exports};
use groqbook_interface::PdfRenderer;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Handles the export command.
///
/// Needs no API key: only the output directory and PDF command are read
/// from the configuration file.
#[tracing::instrument(skip(file, pdf), fields(markdown_file = %markdown_file.display()))]
pub async fn handle_export_command(
    file: &FileConfig,
    markdown_file: &Path,
    output_dir: Option<PathBuf>,
    pdf: &PdfArgs,
) -> anyhow::Result<ExitCode> {
    let markdown = tokio::fs::read_to_string(markdown_file)
        .await
        .with_context(|| format!("Failed to read {}", markdown_file.display()))?;

    let output_dir = output_dir
        .or_else(|| file.output_dir().clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let renderer = if pdf.no_pdf {
        None
    } else {
        let command = pdf
            .pdf_command
            .as_deref()
            .or(file.pdf_command().as_deref())
            .unwrap_or(DEFAULT_PDF_COMMAND);
        Some(CommandPdfRenderer::from_command_line(command)?)
    };

    let artifacts = write_exports(
        &markdown,
        &output_dir,
        renderer.as_ref().map(|r| r as &dyn PdfRenderer),
    )
    .await?;
    for artifact in &artifacts {
        println!("{}\t{}", artifact.format.mime_type(), artifact.path.display());
    }
    Ok(ExitCode::SUCCESS)
}
