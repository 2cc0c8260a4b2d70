//! Generation state machine.

/// Where a generation run currently stands.
///
/// ```text
/// Idle -> OutlineRequested -> OutlineParsed -> SectionsGenerating* -> Completed
///              |                                     |
///              +---------------> Failed <------------+
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_more::Display)]
pub enum GenerationState {
    /// No run has started
    #[default]
    #[display("idle")]
    Idle,
    /// Waiting on the outline reply
    #[display("outline requested")]
    OutlineRequested,
    /// Outline decoded, document created
    #[display("outline parsed")]
    OutlineParsed,
    /// Streaming the chapter of one leaf section
    #[display("generating '{}'", title)]
    SectionsGenerating {
        /// Leaf section being generated
        title: String,
    },
    /// Every leaf section was generated
    #[display("completed")]
    Completed,
    /// The run stopped early
    #[display("failed: {}", reason)]
    Failed {
        /// What stopped the run
        reason: String,
    },
}
