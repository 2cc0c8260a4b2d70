//! Command-line argument definitions.

use crate::BookConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate long-form books from a topic with Groq-hosted models.
#[derive(Parser, Debug)]
#[command(name = "groqbook", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file [default: <config dir>/groqbook/config.toml]
    #[arg(long, global = true, env = "GROQBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Groq API key
    #[arg(long, global = true, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a book, streaming it to stdout, then write the export files
    Generate {
        /// Subject of the book (at least 10 characters)
        topic: String,

        /// Directory for generated_book.txt and generated_book.pdf
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        models: ModelArgs,

        #[command(flatten)]
        pdf: PdfArgs,
    },

    /// Request and print the book outline only
    Outline {
        /// Subject of the book (at least 10 characters)
        topic: String,

        #[command(flatten)]
        models: ModelArgs,

        /// Print the outline as JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },

    /// Re-encode an existing markdown file as text and PDF
    Export {
        /// Markdown file to export
        markdown_file: PathBuf,

        /// Directory for generated_book.txt and generated_book.pdf
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        pdf: PdfArgs,
    },
}

/// Model overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Model for the outline request
    #[arg(long, env = "GROQBOOK_OUTLINE_MODEL")]
    pub outline_model: Option<String>,

    /// Model for section requests
    #[arg(long, env = "GROQBOOK_SECTION_MODEL")]
    pub section_model: Option<String>,

    /// Chat completions endpoint
    #[arg(long, env = "GROQBOOK_BASE_URL")]
    pub base_url: Option<String>,
}

impl ModelArgs {
    /// Overrides the matching fields of `config`.
    pub fn apply(&self, mut config: BookConfig) -> BookConfig {
        if let Some(model) = &self.outline_model {
            config = config.with_outline_model(model);
        }
        if let Some(model) = &self.section_model {
            config = config.with_section_model(model);
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        config
    }
}

/// PDF export options.
#[derive(Args, Debug, Clone, Default)]
pub struct PdfArgs {
    /// Skip the PDF export
    #[arg(long)]
    pub no_pdf: bool,

    /// HTML to PDF converter reading stdin and writing stdout
    #[arg(long, env = "GROQBOOK_PDF_COMMAND")]
    pub pdf_command: Option<String>,
}

impl PdfArgs {
    /// Overrides the PDF command of `config`.
    pub fn apply(&self, config: BookConfig) -> BookConfig {
        match &self.pdf_command {
            Some(command) => config.with_pdf_command(command),
            None => config,
        }
    }
}
