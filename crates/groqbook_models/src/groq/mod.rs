//! Groq chat completions client.
//!
//! Uses the OpenAI-compatible endpoint. Streaming responses are server-sent
//! events whose final chunk carries usage in a vendor `x_groq` block.

mod client;
mod conversions;
mod dto;
mod sse;

pub use client::{DEFAULT_GROQ_URL, GroqClient};
pub use dto::{
    ChatChoice, ChatChunk, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse,
    ChunkChoice, ChunkDelta, GroqUsage, JsonResponseFormat, XGroq,
};
