//! Runs a full book generation.

use crate::{
    BookSession, GenerationSettings, GenerationState, generate_book_structure, generate_section,
    validate_topic,
};
use futures_util::StreamExt;
use groqbook_core::{Document, GenerationStatistics, Outline, SectionEvent};
use groqbook_error::GroqbookResult;
use groqbook_interface::{BookDriver, ProgressSink};
use tracing::{debug, error, info, instrument, warn};

/// Phase label shown while the outline is requested.
pub const OUTLINE_PHASE: &str = "Generating book structure...";
/// Shown when the outline reply cannot be decoded.
pub const DECODE_FAILURE_MESSAGE: &str = "Failed to decode the book structure. Please try again.";
/// Shown when every section has been generated.
pub const COMPLETION_MESSAGE: &str = "Book generation completed!";
/// Model label of the running section total.
pub const COMBINED_LABEL: &str = "Combined";

/// How a run that did not hit an unrecoverable error ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Every leaf section was generated
    Completed,
    /// The topic or the outline reply was rejected; `message` was shown to the user
    Rejected {
        /// User-visible explanation
        message: String,
    },
}

/// Generates books with a language-model driver.
///
/// # Example
///
/// ```rust,ignore
/// use groqbook_generation::{BookExecutor, BookSession};
/// use groqbook_interface::NullProgress;
///
/// let executor = BookExecutor::new(GroqClient::from_env()?);
/// let mut session = BookSession::new();
/// executor.generate(&mut session, "The history of typesetting", &mut NullProgress).await?;
/// println!("{}", session.markdown().unwrap_or_default());
/// ```
#[derive(Debug)]
pub struct BookExecutor<D: BookDriver> {
    driver: D,
    settings: GenerationSettings,
}

impl<D: BookDriver> BookExecutor<D> {
    /// Creates an executor with default settings.
    pub fn new(driver: D) -> Self {
        Self::with_settings(driver, GenerationSettings::default())
    }

    /// Creates an executor with explicit settings.
    pub fn with_settings(driver: D, settings: GenerationSettings) -> Self {
        Self { driver, settings }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Model parameters used for every request.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Generates a book on `topic` into `session`.
    ///
    /// A topic that is too short is rejected before any request and leaves
    /// the session untouched. Otherwise the previous document is discarded.
    /// An undecodable outline is rejected and leaves no document.
    ///
    /// # Errors
    ///
    /// Request and stream failures are not recovered. The session is left
    /// `Failed` with whatever content had been generated.
    #[instrument(skip(self, session, sink), fields(provider = self.driver.provider_name()))]
    pub async fn generate(
        &self,
        session: &mut BookSession,
        topic: &str,
        sink: &mut dyn ProgressSink,
    ) -> GroqbookResult<GenerationOutcome> {
        if let Err(e) = validate_topic(topic) {
            let message = e.kind.to_string();
            warn!(error = %e, "Topic rejected");
            sink.error(&message);
            return Ok(GenerationOutcome::Rejected { message });
        }

        session.begin();
        sink.phase(OUTLINE_PHASE);

        let (statistics, json) =
            match generate_book_structure(&self.driver, &self.settings, topic).await {
                Ok(reply) => reply,
                Err(e) => {
                    error!(error = %e, "Outline request failed");
                    session.fail(e.to_string());
                    return Err(e);
                }
            };
        sink.statistics(&statistics.render());
        session.outline_statistics = Some(statistics);

        let outline = match Outline::from_json_str(&json) {
            Ok(outline) => outline,
            Err(e) => {
                warn!(error = %e, "Outline reply rejected");
                session.fail(DECODE_FAILURE_MESSAGE);
                sink.error(DECODE_FAILURE_MESSAGE);
                return Ok(GenerationOutcome::Rejected {
                    message: DECODE_FAILURE_MESSAGE.to_string(),
                });
            }
        };

        let leaves: Vec<(String, String)> = outline
            .leaves()
            .into_iter()
            .map(|(title, description)| (title.to_string(), description.to_string()))
            .collect();
        session.state = GenerationState::OutlineParsed;
        info!(
            titles = outline.flatten().len(),
            leaves = leaves.len(),
            "Outline parsed"
        );

        let BookSession {
            state,
            document,
            total_statistics,
            ..
        } = session;
        let document = document.insert(Document::new(outline));
        let total = total_statistics.insert(GenerationStatistics::new(COMBINED_LABEL));

        for (title, description) in &leaves {
            *state = GenerationState::SectionsGenerating {
                title: title.clone(),
            };
            if let Err(e) = self
                .generate_leaf(title, description, document, total, sink)
                .await
            {
                error!(title = %title, error = %e, "Section generation failed");
                *state = GenerationState::Failed {
                    reason: e.to_string(),
                };
                return Err(e);
            }
        }

        *state = GenerationState::Completed;
        info!(
            output_tokens = total.output_tokens(),
            total_time = total.total_time(),
            "Book generation completed"
        );
        sink.completed(COMPLETION_MESSAGE);
        Ok(GenerationOutcome::Completed)
    }

    /// Requests and parses the outline for `topic` without generating sections.
    ///
    /// # Errors
    ///
    /// Validation and decode failures are returned as errors here, since
    /// there is no session to report them through.
    #[instrument(skip(self))]
    pub async fn generate_outline(
        &self,
        topic: &str,
    ) -> GroqbookResult<(GenerationStatistics, Outline)> {
        validate_topic(topic)?;
        let (statistics, json) = generate_book_structure(&self.driver, &self.settings, topic).await?;
        let outline = Outline::from_json_str(&json)?;
        Ok((statistics, outline))
    }

    async fn generate_leaf(
        &self,
        title: &str,
        description: &str,
        document: &mut Document,
        total: &mut GenerationStatistics,
        sink: &mut dyn ProgressSink,
    ) -> GroqbookResult<()> {
        sink.phase(&format!("Generating content for: {}", title));

        let mut events = generate_section(&self.driver, &self.settings, title, description).await?;
        while let Some(event) = events.next().await {
            match event? {
                SectionEvent::Text(text) => {
                    document.append(title, &text)?;
                    sink.section_updated(title, &text, document);
                }
                SectionEvent::Statistics(statistics) => {
                    *total += &statistics;
                    sink.statistics(&total.render());
                }
            }
        }

        debug!(
            title,
            len = document.content(title).map_or(0, str::len),
            "Section finished"
        );
        Ok(())
    }
}
