//! Core data types for the Groqbook book generator.
//!
//! This crate holds the UI-agnostic data layer: generation statistics, the
//! recursive book outline, the document model that accumulates generated
//! prose, and the request/response types exchanged with a language model.

mod document;
mod event;
mod message;
mod outline;
mod request;
mod role;
mod statistics;
mod usage;

pub use document::Document;
pub use event::SectionEvent;
pub use message::Message;
pub use outline::{Outline, OutlineNode, OutlineSection};
pub use request::{
    Completion, CompletionChunk, GenerateRequest, GenerateRequestBuilder, ResponseFormat,
};
pub use role::Role;
pub use statistics::{DEFAULT_MODEL_NAME, GenerationStatistics, GenerationStatisticsBuilder};
pub use usage::UsageReport;
