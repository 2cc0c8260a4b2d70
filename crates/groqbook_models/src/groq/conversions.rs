//! Type conversions between Groqbook and Groq wire formats.

use crate::groq::{
    ChatChunk, ChatMessage, ChatRequest, ChatResponse, GroqUsage, JsonResponseFormat,
};
use groqbook_core::{Completion, CompletionChunk, GenerateRequest, ResponseFormat, UsageReport};
use groqbook_error::{BuilderError, GroqError, GroqErrorKind, GroqbookResult};

/// Converts a GenerateRequest to the Groq chat format.
pub fn to_chat_request(req: &GenerateRequest) -> GroqbookResult<ChatRequest> {
    let messages: Vec<ChatMessage> = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().to_string(),
            content: msg.content().clone(),
        })
        .collect();

    let response_format = match req.response_format() {
        Some(ResponseFormat::JsonObject) => Some(JsonResponseFormat {
            format_type: "json_object".to_string(),
        }),
        Some(ResponseFormat::Text) | None => None,
    };

    ChatRequest::builder()
        .model(req.model().clone())
        .messages(messages)
        .max_tokens(*req.max_tokens())
        .temperature(*req.temperature())
        .top_p(*req.top_p())
        .stream(req.stream().then_some(true))
        .response_format(response_format)
        .build()
        .map_err(|e| BuilderError::new(format!("Failed to build chat request: {}", e)).into())
}

/// Converts a Groq usage block to a vendor-neutral report.
pub fn to_usage_report(usage: &GroqUsage) -> UsageReport {
    UsageReport {
        prompt_time: usage.prompt_time,
        completion_time: usage.completion_time,
        prompt_tokens: usage.prompt_tokens,
        completion_tokens: usage.completion_tokens,
        total_time: usage.total_time,
    }
}

/// Converts a non-streamed chat response to a Completion.
pub fn from_chat_response(response: &ChatResponse) -> Result<Completion, GroqError> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| GroqError::new(GroqErrorKind::EmptyResponse))?;

    Ok(Completion {
        content: choice.message.content.clone().unwrap_or_default(),
        usage: response.usage.as_ref().map(to_usage_report),
    })
}

/// Parses the JSON payload of one SSE `data:` line.
///
/// Usage is taken from the `x_groq` block, falling back to a top-level
/// `usage` block.
pub fn parse_chunk(data: &str) -> Result<CompletionChunk, GroqError> {
    let chunk: ChatChunk = serde_json::from_str(data).map_err(|e| {
        GroqError::new(GroqErrorKind::StreamInterrupted(format!(
            "Undecodable stream event: {}",
            e
        )))
    })?;

    let delta = chunk
        .choices
        .first()
        .and_then(|choice| choice.delta.content.clone());
    let usage = chunk
        .x_groq
        .as_ref()
        .and_then(|x_groq| x_groq.usage.as_ref())
        .or(chunk.usage.as_ref())
        .map(to_usage_report);

    Ok(CompletionChunk { delta, usage })
}
