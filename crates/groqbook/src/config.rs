//! Layered configuration.
//!
//! Values come from, highest precedence first: command-line flags,
//! environment variables (including a `.env` file), an optional TOML file,
//! and built-in defaults. The API key is only ever taken from the
//! environment or the command line.

use derive_getters::Getters;
use groqbook_error::{ConfigError, GroqbookResult};
use groqbook_export::DEFAULT_PDF_COMMAND;
use groqbook_generation::{
    DEFAULT_MAX_TOKENS, DEFAULT_OUTLINE_MODEL, DEFAULT_SECTION_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_P, GenerationSettings,
};
use groqbook_models::DEFAULT_GROQ_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File name looked up under the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from the TOML file. Every field is optional.
///
/// ```toml
/// outline_model = "llama3-70b-8192"
/// section_model = "llama3-8b-8192"
/// temperature = 0.3
/// output_dir = "books"
/// pdf_command = "weasyprint - -"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct FileConfig {
    /// Chat completions endpoint
    base_url: Option<String>,
    /// Model for the outline request
    outline_model: Option<String>,
    /// Model for section requests
    section_model: Option<String>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Output token cap
    max_tokens: Option<u32>,
    /// Nucleus sampling threshold
    top_p: Option<f32>,
    /// Directory export files are written to
    output_dir: Option<PathBuf>,
    /// HTML to PDF converter command line
    pdf_command: Option<String>,
}

impl FileConfig {
    /// Parses TOML text.
    pub fn from_toml_str(content: &str) -> GroqbookResult<Self> {
        toml::from_str(content).map_err(|e| {
            groqbook_error::GroqbookError::from(ConfigError::new(format!(
                "Failed to parse config: {}",
                e
            )))
        })
    }

    /// Loads a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> GroqbookResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            groqbook_error::GroqbookError::from(ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path`, or the default path when a file exists there.
    ///
    /// An explicit path must exist. With no file at all, every field is unset.
    pub fn load(path: Option<&Path>) -> GroqbookResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path().filter(|path| path.is_file()) {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// `groqbook/config.toml` under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("groqbook").join(CONFIG_FILE_NAME))
    }
}

/// Resolved configuration for a run.
#[derive(Clone, PartialEq, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct BookConfig {
    /// Groq API key
    #[setters(into)]
    api_key: String,
    /// Chat completions endpoint
    #[setters(into)]
    base_url: String,
    /// Model for the outline request
    #[setters(into)]
    outline_model: String,
    /// Model for section requests
    #[setters(into)]
    section_model: String,
    /// Sampling temperature
    temperature: f32,
    /// Output token cap
    max_tokens: u32,
    /// Nucleus sampling threshold
    top_p: f32,
    /// Directory export files are written to
    #[setters(into)]
    output_dir: PathBuf,
    /// HTML to PDF converter command line
    #[setters(into)]
    pdf_command: String,
}

impl BookConfig {
    /// Applies `file` over the defaults.
    ///
    /// # Errors
    ///
    /// Fails when `api_key` is missing or blank.
    pub fn layered(file: FileConfig, api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new("GROQ_API_KEY environment variable not set"))?;

        Ok(Self {
            api_key,
            base_url: file.base_url.unwrap_or_else(|| DEFAULT_GROQ_URL.to_string()),
            outline_model: file
                .outline_model
                .unwrap_or_else(|| DEFAULT_OUTLINE_MODEL.to_string()),
            section_model: file
                .section_model
                .unwrap_or_else(|| DEFAULT_SECTION_MODEL.to_string()),
            temperature: file.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: file.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            top_p: file.top_p.unwrap_or(DEFAULT_TOP_P),
            output_dir: file.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            pdf_command: file
                .pdf_command
                .unwrap_or_else(|| DEFAULT_PDF_COMMAND.to_string()),
        })
    }

    /// Loads the TOML layer (see [`FileConfig::load`]) and combines it with `api_key`.
    #[instrument(skip(api_key))]
    pub fn load(config_path: Option<&Path>, api_key: Option<String>) -> GroqbookResult<Self> {
        let file = FileConfig::load(config_path)?;
        debug!(?file, "Loaded file configuration");

        Ok(Self::layered(file, api_key)?)
    }

    /// Model parameters for the orchestrator.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::new(
            self.outline_model.as_str(),
            self.section_model.as_str(),
            self.temperature,
            self.max_tokens,
            self.top_p,
        )
    }
}

impl std::fmt::Debug for BookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("outline_model", &self.outline_model)
            .field("section_model", &self.section_model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("top_p", &self.top_p)
            .field("output_dir", &self.output_dir)
            .field("pdf_command", &self.pdf_command)
            .finish()
    }
}
