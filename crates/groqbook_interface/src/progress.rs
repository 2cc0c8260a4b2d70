//! Progress reporting to a user interface.

use groqbook_core::Document;

/// Receives progress from a generation run.
///
/// A user interface implements this to show phases, the statistics panel
/// and the live book content. Every method has a no-op default.
pub trait ProgressSink {
    /// A phase started, e.g. `Generating book structure...`.
    fn phase(&mut self, _label: &str) {}

    /// The statistics panel changed.
    fn statistics(&mut self, _panel: &str) {}

    /// `increment` was appended to `title`; `document` has the new state.
    fn section_updated(&mut self, _title: &str, _increment: &str, _document: &Document) {}

    /// A recoverable problem to show the user.
    fn error(&mut self, _message: &str) {}

    /// The run finished with every section generated.
    fn completed(&mut self, _message: &str) {}
}

/// Sink that discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {}
