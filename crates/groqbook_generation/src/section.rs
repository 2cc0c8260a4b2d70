//! Streaming section request.

use crate::GenerationSettings;
use crate::prompts::{SECTION_SYSTEM_PROMPT, section_user_prompt};
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use groqbook_core::{GenerateRequest, GenerationStatistics, Message, SectionEvent};
use groqbook_error::{BuilderError, GroqbookResult};
use groqbook_interface::BookDriver;
use tracing::{debug, instrument};

/// Lazy stream of section events. An `Err` item ends it.
pub type SectionStream = BoxStream<'static, GroqbookResult<SectionEvent>>;

/// Starts the streaming chapter request for one leaf section.
///
/// Empty content deltas are dropped. The first usage block becomes the
/// stream's only [`SectionEvent::Statistics`] item, labelled with the
/// section model.
#[instrument(
    skip(driver, settings, description),
    fields(provider = driver.provider_name(), model = %settings.section_model())
)]
pub async fn generate_section<D: BookDriver + ?Sized>(
    driver: &D,
    settings: &GenerationSettings,
    title: &str,
    description: &str,
) -> GroqbookResult<SectionStream> {
    let request = GenerateRequest::builder()
        .model(settings.section_model())
        .messages(vec![
            Message::system(SECTION_SYSTEM_PROMPT),
            Message::user(section_user_prompt(title, description)),
        ])
        .temperature(*settings.temperature())
        .max_tokens(*settings.max_tokens())
        .top_p(*settings.top_p())
        .stream(true)
        .build()
        .map_err(|e| BuilderError::new(e.to_string()))?;

    let mut chunks = driver.stream(&request).await?;
    let model = settings.section_model().clone();

    let events = async_stream::stream! {
        let mut reported = false;
        while let Some(item) = chunks.next().await {
            let chunk = match item {
                Ok(chunk) => chunk,
                Err(e) => {
                    yield Err(e);
                    break;
                }
            };

            if let Some(delta) = chunk.delta.filter(|delta| !delta.is_empty()) {
                yield Ok(SectionEvent::Text(delta));
            }
            if let Some(usage) = chunk.usage {
                if reported {
                    debug!("Ignoring repeated usage block");
                    continue;
                }
                reported = true;
                yield Ok(SectionEvent::Statistics(GenerationStatistics::from_usage(
                    &usage, &model,
                )));
            }
        }
    };

    Ok(Box::pin(events))
}
