//! Generate command handler.

use super::EXIT_REJECTED;
use crate::{BookConfig, TerminalProgress};
use groqbook_error::GroqbookResult;
use groqbook_export::{
    CommandPdfRenderer, ExportArtifact, ExportFormat, to_pdf, write_export, write_exports,
};
use groqbook_generation::{BookExecutor, BookSession, GenerationOutcome};
use groqbook_models::GroqClient;
use std::process::ExitCode;
use tracing::{error, info, instrument};

/// Handles the generate command.
///
/// Export files are written whenever a document exists, so a run that
/// fails partway still leaves the sections generated so far on disk.
#[instrument(skip_all, fields(output_dir = %config.output_dir().display()))]
pub async fn handle_generate_command(
    config: &BookConfig,
    topic: &str,
    no_pdf: bool,
) -> anyhow::Result<ExitCode> {
    let client = GroqClient::with_base_url(config.api_key().as_str(), config.base_url().as_str());
    let executor = BookExecutor::with_settings(client, config.generation_settings());
    let mut session = BookSession::new();
    let mut progress = TerminalProgress::stdio();

    let outcome = executor.generate(&mut session, topic, &mut progress).await;

    if session.exports_ready() {
        let markdown = session.markdown().unwrap_or_default();
        let written = export_book(&markdown, config, no_pdf).await;

        match written {
            Ok(artifacts) => {
                for artifact in &artifacts {
                    eprintln!("Wrote {} ({} bytes)", artifact.path.display(), artifact.size);
                }
            }
            Err(e) if outcome.is_ok() => return Err(e.into()),
            Err(e) => error!(error = %e, "Export of partial book failed"),
        }
    }

    match outcome? {
        GenerationOutcome::Completed => {
            info!(state = %session.state(), "Generate command finished");
            Ok(ExitCode::SUCCESS)
        }
        GenerationOutcome::Rejected { .. } => Ok(ExitCode::from(EXIT_REJECTED)),
    }
}

/// Writes the text export, then the PDF export unless disabled.
///
/// A PDF command that cannot be parsed fails only the PDF step.
async fn export_book(
    markdown: &str,
    config: &BookConfig,
    no_pdf: bool,
) -> GroqbookResult<Vec<ExportArtifact>> {
    let mut artifacts = write_exports(markdown, config.output_dir(), None).await?;
    if no_pdf {
        return Ok(artifacts);
    }
    let renderer = CommandPdfRenderer::from_command_line(config.pdf_command())?;
    let pdf = to_pdf(markdown, &renderer).await?;
    artifacts.push(write_export(config.output_dir(), ExportFormat::Pdf, pdf).await?);
    Ok(artifacts)
}
