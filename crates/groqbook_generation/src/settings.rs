//! Model parameters for a generation run.

use serde::{Deserialize, Serialize};

/// Model used for the outline request.
pub const DEFAULT_OUTLINE_MODEL: &str = "llama3-70b-8192";
/// Model used for section requests.
pub const DEFAULT_SECTION_MODEL: &str = "llama3-8b-8192";
/// Sampling temperature for every request.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
/// Output token cap for every request.
pub const DEFAULT_MAX_TOKENS: u32 = 8000;
/// Nucleus sampling threshold for every request.
pub const DEFAULT_TOP_P: f32 = 1.0;

/// Model parameters shared by the outline and section requests.
///
/// # Examples
///
/// ```
/// use groqbook_generation::GenerationSettings;
///
/// let settings = GenerationSettings::builder()
///     .section_model("llama-3.1-8b-instant")
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.outline_model(), "llama3-70b-8192");
/// assert_eq!(settings.section_model(), "llama-3.1-8b-instant");
/// assert_eq!(*settings.max_tokens(), 8000);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct GenerationSettings {
    /// Model for the outline request
    #[builder(default = "DEFAULT_OUTLINE_MODEL.to_string()", setter(into))]
    outline_model: String,
    /// Model for section requests
    #[builder(default = "DEFAULT_SECTION_MODEL.to_string()", setter(into))]
    section_model: String,
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Output token cap
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Nucleus sampling threshold
    #[builder(default = "DEFAULT_TOP_P")]
    top_p: f32,
}

impl GenerationSettings {
    /// Creates settings with every parameter given.
    pub fn new(
        outline_model: impl Into<String>,
        section_model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
        top_p: f32,
    ) -> Self {
        Self {
            outline_model: outline_model.into(),
            section_model: section_model.into(),
            temperature,
            max_tokens,
            top_p,
        }
    }

    /// Creates a builder for GenerationSettings.
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::default()
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            outline_model: DEFAULT_OUTLINE_MODEL.to_string(),
            section_model: DEFAULT_SECTION_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
        }
    }
}
