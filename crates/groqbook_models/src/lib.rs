//! Language-model provider integrations for Groqbook.
//!
//! Only Groq is supported. It speaks the OpenAI chat completions format and
//! reports timing information in its usage blocks, which the statistics
//! panel depends on.

mod groq;

pub use groq::{
    ChatChunk, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, DEFAULT_GROQ_URL,
    GroqClient, GroqUsage,
};
