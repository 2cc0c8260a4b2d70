//! Outline request.

use crate::GenerationSettings;
use crate::prompts::{OUTLINE_SYSTEM_PROMPT, outline_user_prompt};
use groqbook_core::{GenerateRequest, GenerationStatistics, Message, ResponseFormat};
use groqbook_error::{BuilderError, GroqbookResult};
use groqbook_interface::BookDriver;
use tracing::{debug, instrument};

/// Requests the outline for `topic` in one non-streaming JSON-mode call.
///
/// Returns the call's statistics and the raw reply text. The text is not
/// parsed here; see [`Outline::from_json_str`](groqbook_core::Outline::from_json_str).
#[instrument(
    skip(driver, settings),
    fields(provider = driver.provider_name(), model = %settings.outline_model())
)]
pub async fn generate_book_structure<D: BookDriver + ?Sized>(
    driver: &D,
    settings: &GenerationSettings,
    topic: &str,
) -> GroqbookResult<(GenerationStatistics, String)> {
    let request = GenerateRequest::builder()
        .model(settings.outline_model())
        .messages(vec![
            Message::system(OUTLINE_SYSTEM_PROMPT),
            Message::user(outline_user_prompt(topic)),
        ])
        .temperature(*settings.temperature())
        .max_tokens(*settings.max_tokens())
        .top_p(*settings.top_p())
        .response_format(ResponseFormat::JsonObject)
        .build()
        .map_err(|e| BuilderError::new(e.to_string()))?;

    let completion = driver.complete(&request).await?;

    let statistics = match &completion.usage {
        Some(usage) => GenerationStatistics::from_usage(usage, settings.outline_model()),
        None => GenerationStatistics::new(settings.outline_model()),
    };
    debug!(
        output_tokens = statistics.output_tokens(),
        len = completion.content.len(),
        "Received outline"
    );

    Ok((statistics, completion.content))
}
