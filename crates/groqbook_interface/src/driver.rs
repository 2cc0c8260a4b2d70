//! Language-model driver trait.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use groqbook_core::{Completion, CompletionChunk, GenerateRequest};
use groqbook_error::GroqbookResult;

/// Lazy, finite sequence of streamed completion chunks.
///
/// The stream ends after the provider's terminal event; an `Err` item ends
/// it early.
pub type CompletionStream = BoxStream<'static, GroqbookResult<CompletionChunk>>;

/// A language-model backend able to answer chat requests.
///
/// Implemented by provider clients and by test doubles.
#[async_trait]
pub trait BookDriver: Send + Sync {
    /// Sends a non-streaming request and waits for the full reply.
    async fn complete(&self, request: &GenerateRequest) -> GroqbookResult<Completion>;

    /// Sends a streaming request and returns the chunk stream.
    ///
    /// Errors that occur before the first byte arrives (connection, HTTP
    /// status) are returned directly; later failures surface as stream items.
    async fn stream(&self, request: &GenerateRequest) -> GroqbookResult<CompletionStream>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
