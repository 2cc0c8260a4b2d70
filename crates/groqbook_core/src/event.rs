//! Items yielded by a section generation stream.

use crate::GenerationStatistics;

/// One item of a section stream.
///
/// Text increments are never empty; at most one `Statistics` item appears
/// per stream, normally last.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionEvent {
    /// A non-empty increment of chapter prose
    Text(String),
    /// Cumulative usage for the section's generation
    Statistics(GenerationStatistics),
}
