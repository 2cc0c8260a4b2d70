//! Request and response types for language-model calls.

use crate::{Message, UsageReport};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Requested shape of the model's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text
    Text,
    /// A single JSON object
    JsonObject,
}

/// Provider-independent chat completion request.
///
/// # Examples
///
/// ```
/// use groqbook_core::{GenerateRequest, Message, ResponseFormat};
///
/// let request = GenerateRequest::builder()
///     .model("llama3-70b-8192")
///     .messages(vec![Message::user("Outline a book")])
///     .temperature(0.3)
///     .response_format(ResponseFormat::JsonObject)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "llama3-70b-8192");
/// assert!(!request.stream());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
pub struct GenerateRequest {
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Conversation messages, system instruction first
    messages: Vec<Message>,
    /// Maximum tokens to generate
    #[builder(default, setter(strip_option))]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[builder(default, setter(strip_option))]
    top_p: Option<f32>,
    /// Response format constraint
    #[builder(default, setter(strip_option))]
    response_format: Option<ResponseFormat>,
    /// Whether the response is streamed
    #[builder(default)]
    #[getter(skip)]
    stream: bool,
}

impl GenerateRequest {
    /// Creates a builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Whether the response is streamed.
    pub fn stream(&self) -> bool {
        self.stream
    }
}

/// A complete, non-streamed model reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Text of the first choice
    pub content: String,
    /// Usage reported by the provider, when present
    pub usage: Option<UsageReport>,
}

/// One increment of a streamed model reply.
///
/// A chunk may carry a content delta, a usage block, both, or neither.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompletionChunk {
    /// Content delta
    pub delta: Option<String>,
    /// Usage block, normally only on the final chunk
    pub usage: Option<UsageReport>,
}
