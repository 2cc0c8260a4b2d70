//! Trait definitions for the Groqbook book generator.
//!
//! These are the seams to collaborators the generator does not implement
//! itself: the language-model vendor, the user interface and the HTML to
//! PDF converter.

mod driver;
mod progress;
mod renderer;

pub use driver::{BookDriver, CompletionStream};
pub use progress::{NullProgress, ProgressSink};
pub use renderer::PdfRenderer;
