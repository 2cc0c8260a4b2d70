//! Book generation orchestrator for Groqbook.
//!
//! A run asks the language model for a JSON outline, decodes it into a
//! [`Document`](groqbook_core::Document), then streams one chapter per leaf
//! section in pre-order. Progress is pushed to a
//! [`ProgressSink`](groqbook_interface::ProgressSink) and the resulting
//! document lives in a caller-owned [`BookSession`].

mod executor;
mod outline;
pub mod prompts;
mod section;
mod session;
mod settings;
mod state;
mod validation;

pub use executor::{
    BookExecutor, COMBINED_LABEL, COMPLETION_MESSAGE, DECODE_FAILURE_MESSAGE, GenerationOutcome,
    OUTLINE_PHASE,
};
pub use outline::generate_book_structure;
pub use section::{SectionStream, generate_section};
pub use session::BookSession;
pub use settings::{
    DEFAULT_MAX_TOKENS, DEFAULT_OUTLINE_MODEL, DEFAULT_SECTION_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_P, GenerationSettings, GenerationSettingsBuilder,
};
pub use state::GenerationState;
pub use validation::{MIN_TOPIC_LENGTH, validate_topic};
