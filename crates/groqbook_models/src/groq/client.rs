//! HTTP client for the Groq chat completions endpoint.

use crate::groq::ChatResponse;
use crate::groq::conversions;
use crate::groq::sse::{SseDecoder, SseEvent};
use async_trait::async_trait;
use futures_util::StreamExt;
use groqbook_core::{Completion, GenerateRequest};
use groqbook_error::{GroqError, GroqErrorKind, GroqbookError, GroqbookResult, HttpError};
use groqbook_interface::{BookDriver, CompletionStream};
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

/// Groq's OpenAI-compatible chat completions URL.
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Client for Groq chat completions.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    /// Creates a client for the public Groq endpoint.
    #[instrument(skip(api_key))]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_GROQ_URL)
    }

    /// Creates a client for a custom endpoint URL.
    #[instrument(skip(api_key, base_url))]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(url = %base_url, "Created Groq client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url,
        }
    }

    /// Creates a client from the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, GroqError> {
        match std::env::var("GROQ_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(GroqError::new(GroqErrorKind::MissingApiKey)),
        }
    }

    /// Endpoint URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, req: &GenerateRequest) -> GroqbookResult<reqwest::Response> {
        let chat_request = conversions::to_chat_request(req)?;

        debug!(
            model = %chat_request.model(),
            message_count = chat_request.messages().len(),
            stream = req.stream(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(GroqError::new(GroqErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        Ok(response)
    }
}

#[async_trait]
impl BookDriver for GroqClient {
    #[instrument(skip(self, req), fields(model = %req.model()))]
    async fn complete(&self, req: &GenerateRequest) -> GroqbookResult<Completion> {
        let response = self.send(req).await?;

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GroqError::new(GroqErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        Ok(conversions::from_chat_response(&chat_response)?)
    }

    #[instrument(skip(self, req), fields(model = %req.model()))]
    async fn stream(&self, req: &GenerateRequest) -> GroqbookResult<CompletionStream> {
        let response = self.send(req).await?;

        let chunks = async_stream::stream! {
            let mut bytes = response.bytes_stream();
            let mut decoder = SseDecoder::default();
            let mut done = false;
            let mut eof = false;

            while !done && !eof {
                let events = match bytes.next().await {
                    Some(Ok(chunk)) => decoder.push(&chunk),
                    Some(Err(e)) => {
                        error!(error = ?e, "Stream read failed");
                        yield Err(GroqbookError::from(GroqError::new(
                            GroqErrorKind::StreamInterrupted(e.to_string()),
                        )));
                        break;
                    }
                    None => {
                        eof = true;
                        decoder.finish()
                    }
                };

                for event in events {
                    match event {
                        SseEvent::Done => {
                            done = true;
                            break;
                        }
                        SseEvent::Data(data) => match conversions::parse_chunk(&data) {
                            Ok(chunk) => yield Ok(chunk),
                            Err(e) => {
                                warn!(error = %e, "Undecodable stream event");
                                yield Err(GroqbookError::from(e));
                                done = true;
                                break;
                            }
                        },
                    }
                }

                if eof && !done {
                    warn!("Stream ended without [DONE]");
                    yield Err(GroqbookError::from(GroqError::new(
                        GroqErrorKind::StreamInterrupted(
                            "stream ended before [DONE]".to_string(),
                        ),
                    )));
                }
            }
        };

        Ok(Box::pin(chunks))
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }
}
