//! PDF export through an external HTML to PDF converter.

use crate::html::{markdown_to_html, wrap_html_document};
use async_trait::async_trait;
use groqbook_error::{ExportError, ExportErrorKind, GroqbookResult};
use groqbook_interface::PdfRenderer;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// Converter invoked when none is configured: HTML on stdin, PDF on stdout.
pub const DEFAULT_PDF_COMMAND: &str = "wkhtmltopdf --quiet - -";

/// Converts markdown to PDF bytes via `renderer`.
#[instrument(skip_all, fields(renderer = renderer.name(), len = markdown.len()))]
pub async fn to_pdf(markdown: &str, renderer: &dyn PdfRenderer) -> GroqbookResult<Vec<u8>> {
    let document = wrap_html_document(&markdown_to_html(markdown));
    renderer.render(&document).await
}

/// Renders PDF by piping HTML through an external command.
///
/// The command reads HTML on stdin and writes PDF to stdout. Any converter
/// with that contract works, e.g. `wkhtmltopdf - -` or `weasyprint - -`.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct CommandPdfRenderer {
    /// Executable to run
    program: String,
    /// Arguments passed to the executable
    args: Vec<String>,
}

impl CommandPdfRenderer {
    /// Creates a renderer for `program` with `args`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parses a whitespace-separated command line such as `weasyprint - -`.
    pub fn from_command_line(command_line: &str) -> Result<Self, ExportError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| {
            ExportError::new(ExportErrorKind::PdfRender("empty PDF command".to_string()))
        })?;
        Ok(Self::new(program, parts.collect()))
    }
}

impl Default for CommandPdfRenderer {
    fn default() -> Self {
        Self::new(
            "wkhtmltopdf",
            vec!["--quiet".to_string(), "-".to_string(), "-".to_string()],
        )
    }
}

#[async_trait]
impl PdfRenderer for CommandPdfRenderer {
    async fn render(&self, html: &str) -> GroqbookResult<Vec<u8>> {
        debug!(program = %self.program, args = ?self.args, "Spawning PDF converter");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ExportError::new(ExportErrorKind::PdfRender(format!(
                    "failed to start '{}': {}",
                    self.program, e
                )))
            })?;

        // Feed stdin concurrently so a converter that streams output cannot
        // block on a full stdout pipe.
        let mut stdin = child.stdin.take().ok_or_else(|| {
            ExportError::new(ExportErrorKind::PdfRender("stdin unavailable".to_string()))
        })?;
        let input = html.as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            let result = stdin.write_all(&input).await;
            drop(stdin);
            result
        });

        let output = child.wait_with_output().await.map_err(|e| {
            ExportError::new(ExportErrorKind::PdfRender(format!(
                "'{}' did not finish: {}",
                self.program, e
            )))
        })?;

        match writer.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, "Converter closed stdin early"),
            Err(e) => warn!(error = %e, "Stdin writer task failed"),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::new(ExportErrorKind::PdfRender(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )))
            .into());
        }
        if output.stdout.is_empty() {
            return Err(ExportError::new(ExportErrorKind::EmptyPdf).into());
        }

        debug!(bytes = output.stdout.len(), "PDF rendered");
        Ok(output.stdout)
    }

    fn name(&self) -> &str {
        &self.program
    }
}
