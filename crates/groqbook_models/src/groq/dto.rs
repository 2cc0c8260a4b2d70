//! Data transfer objects for the Groq chat completions API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// `response_format` request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonResponseFormat {
    /// Format type, e.g. "json_object"
    #[serde(rename = "type")]
    pub format_type: String,
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Enable streaming
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
    /// Response format constraint
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<JsonResponseFormat>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// Message body of a non-streamed choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    /// Role of the author
    #[serde(default)]
    pub role: Option<String>,
    /// Message content
    #[serde(default)]
    pub content: Option<String>,
}

/// A choice in a non-streamed response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message content
    pub message: ChatResponseMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage and timing statistics.
///
/// Groq reports times in seconds alongside the token counts.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GroqUsage {
    /// Seconds the request waited in queue
    #[serde(default)]
    pub queue_time: f64,
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u64,
    /// Seconds spent on the prompt
    #[serde(default)]
    pub prompt_time: f64,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u64,
    /// Seconds spent on the completion
    #[serde(default)]
    pub completion_time: f64,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: u64,
    /// Total seconds
    #[serde(default)]
    pub total_time: f64,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices
    pub choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}

/// Content delta of a streamed choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkDelta {
    /// Role, sent on the first chunk only
    #[serde(default)]
    pub role: Option<String>,
    /// Content increment
    #[serde(default)]
    pub content: Option<String>,
}

/// A choice in a streamed chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkChoice {
    /// Content delta
    #[serde(default)]
    pub delta: ChunkDelta,
    /// Reason for finishing, on the last content chunk
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Groq vendor block attached to streamed chunks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct XGroq {
    /// Request identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Usage, present on the final chunk
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}

/// One server-sent `chat.completion.chunk` event.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChunk {
    /// Streamed choices
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
    /// Groq vendor block
    #[serde(default)]
    pub x_groq: Option<XGroq>,
    /// OpenAI-style usage block
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}
