//! Groqbook generates long-form books from a topic.
//!
//! One language-model call produces a JSON outline, then each leaf section
//! of that outline is written by a streaming call. The result can be
//! exported as markdown text or PDF.
//!
//! This crate ties the workspace together: it re-exports the public API of
//! the member crates, loads [`BookConfig`], and hosts the command-line
//! interface.
//!
//! # Example
//!
//! ```rust,no_run
//! use groqbook::{BookExecutor, BookSession, GroqClient, NullProgress};
//!
//! # async fn run() -> groqbook::GroqbookResult<()> {
//! let executor = BookExecutor::new(GroqClient::from_env()?);
//! let mut session = BookSession::new();
//! executor
//!     .generate(&mut session, "The history of typesetting", &mut NullProgress)
//!     .await?;
//! println!("{}", session.markdown().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod config;
mod terminal;

pub use config::{BookConfig, CONFIG_FILE_NAME, FileConfig};
pub use terminal::TerminalProgress;

pub use groqbook_core::{
    Completion, CompletionChunk, DEFAULT_MODEL_NAME, Document, GenerateRequest,
    GenerateRequestBuilder, GenerationStatistics, GenerationStatisticsBuilder, Message, Outline,
    OutlineNode, OutlineSection, ResponseFormat, Role, SectionEvent, UsageReport,
};
pub use groqbook_error::{
    BuilderError, ConfigError, DocumentError, DocumentErrorKind, ExportError, ExportErrorKind,
    GroqError, GroqErrorKind, GroqbookError, GroqbookErrorKind, GroqbookResult, HttpError,
    OutlineError, OutlineErrorKind, ValidationError, ValidationErrorKind,
};
pub use groqbook_export::{
    CommandPdfRenderer, DEFAULT_PDF_COMMAND, ExportArtifact, ExportFormat, markdown_to_html,
    to_pdf, to_plain_text, wrap_html_document, write_export, write_exports,
};
pub use groqbook_generation::{
    BookExecutor, BookSession, GenerationOutcome, GenerationSettings, GenerationState,
    MIN_TOPIC_LENGTH, generate_book_structure, generate_section, validate_topic,
};
pub use groqbook_interface::{BookDriver, CompletionStream, NullProgress, PdfRenderer, ProgressSink};
pub use groqbook_models::{DEFAULT_GROQ_URL, GroqClient};
