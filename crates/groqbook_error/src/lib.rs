//! Error types for the Groqbook book generator.
//!
//! Every error carries the source location where it was created, captured
//! with `#[track_caller]`, and converts into [`GroqbookError`].

mod builder;
mod config;
mod document;
mod error;
mod export;
mod groq;
mod http;
mod outline;
mod validation;

pub use builder::BuilderError;
pub use config::ConfigError;
pub use document::{DocumentError, DocumentErrorKind};
pub use error::{GroqbookError, GroqbookErrorKind, GroqbookResult};
pub use export::{ExportError, ExportErrorKind};
pub use groq::{GroqError, GroqErrorKind};
pub use http::HttpError;
pub use outline::{OutlineError, OutlineErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
