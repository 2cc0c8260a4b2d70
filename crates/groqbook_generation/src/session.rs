//! Caller-owned generation session.

use crate::GenerationState;
use groqbook_core::{Document, GenerationStatistics};

/// The current book and its generation progress.
///
/// A session outlives individual runs: the caller keeps it between runs and
/// reads the document for display or export. Starting a new run that passes
/// topic validation discards the previous document.
#[derive(Debug, Clone, Default)]
pub struct BookSession {
    pub(crate) state: GenerationState,
    pub(crate) document: Option<Document>,
    pub(crate) outline_statistics: Option<GenerationStatistics>,
    pub(crate) total_statistics: Option<GenerationStatistics>,
}

impl BookSession {
    /// Creates an idle session with no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// The document of the latest run, possibly partial.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Statistics of the latest outline request.
    pub fn outline_statistics(&self) -> Option<&GenerationStatistics> {
        self.outline_statistics.as_ref()
    }

    /// Running total over the latest run's section requests.
    pub fn total_statistics(&self) -> Option<&GenerationStatistics> {
        self.total_statistics.as_ref()
    }

    /// Whether there is a document to export.
    pub fn exports_ready(&self) -> bool {
        self.document.is_some()
    }

    /// Markdown of the current document, if any.
    pub fn markdown(&self) -> Option<String> {
        self.document.as_ref().map(Document::flatten_to_markdown)
    }

    /// Clears the previous run and enters `OutlineRequested`.
    pub(crate) fn begin(&mut self) {
        *self = Self {
            state: GenerationState::OutlineRequested,
            ..Self::default()
        };
    }

    pub(crate) fn fail(&mut self, reason: impl Into<String>) {
        self.state = GenerationState::Failed {
            reason: reason.into(),
        };
    }
}
