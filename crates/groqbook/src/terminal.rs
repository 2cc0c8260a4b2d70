//! Progress reporting on a terminal.

use groqbook_core::Document;
use groqbook_interface::ProgressSink;
use std::io::Write;
use tracing::warn;

/// Streams book text to `out` and status lines to `err`.
///
/// Book text is written in the same markdown layout as the export: each
/// leaf section gets a heading with one `#` per nesting level, followed by
/// its text as it arrives. Group titles have no content and are skipped.
pub struct TerminalProgress<O: Write, E: Write> {
    out: O,
    err: E,
    current_title: Option<String>,
}

impl TerminalProgress<std::io::Stdout, std::io::Stderr> {
    /// Book text on stdout, status on stderr.
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> TerminalProgress<O, E> {
    /// Creates a reporter over arbitrary writers.
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            current_title: None,
        }
    }

    /// Returns the writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn status(&mut self, text: &str) {
        if let Err(e) = writeln!(self.err, "{}", text) {
            warn!(error = %e, "Failed to write status");
        }
    }
}

impl<O: Write, E: Write> ProgressSink for TerminalProgress<O, E> {
    fn phase(&mut self, label: &str) {
        self.status(label);
    }

    fn statistics(&mut self, panel: &str) {
        self.status(panel.trim_end());
    }

    fn section_updated(&mut self, title: &str, increment: &str, document: &Document) {
        let result = if self.current_title.as_deref() == Some(title) {
            write!(self.out, "{}", increment)
        } else {
            let separator = if self.current_title.is_some() { "\n\n" } else { "" };
            let level = document.outline().depth(title).unwrap_or(1);
            self.current_title = Some(title.to_string());
            write!(
                self.out,
                "{}{} {}\n{}",
                separator,
                "#".repeat(level),
                title,
                increment
            )
        };
        if let Err(e) = result.and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write section text");
        }
    }

    fn error(&mut self, message: &str) {
        self.status(&format!("Error: {}", message));
    }

    fn completed(&mut self, message: &str) {
        if self.current_title.is_some() {
            if let Err(e) = write!(self.out, "\n\n") {
                warn!(error = %e, "Failed to write section text");
            }
        }
        self.status(message);
    }
}
