//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the groqbook binary.

mod commands;
mod export;
mod generate;
mod outline;

pub use commands::{Cli, Commands, ModelArgs, PdfArgs};
pub use export::handle_export_command;
pub use generate::handle_generate_command;
pub use outline::handle_outline_command;

use crate::{BookConfig, FileConfig};
use groqbook_error::{GroqbookError, GroqbookErrorKind};
use groqbook_generation::DECODE_FAILURE_MESSAGE;
use std::process::ExitCode;

/// Exit code for a rejected topic or outline.
pub const EXIT_REJECTED: u8 = 2;

/// Dispatches a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Generate {
            topic,
            output_dir,
            models,
            pdf,
        } => {
            let config = models.apply(BookConfig::load(cli.config.as_deref(), cli.api_key)?);
            let config = match output_dir {
                Some(dir) => config.with_output_dir(dir),
                None => config,
            };
            let config = pdf.apply(config);
            handle_generate_command(&config, &topic, pdf.no_pdf).await
        }
        Commands::Outline {
            topic,
            models,
            json,
        } => {
            let config = models.apply(BookConfig::load(cli.config.as_deref(), cli.api_key)?);
            handle_outline_command(&config, &topic, json).await
        }
        Commands::Export {
            markdown_file,
            output_dir,
            pdf,
        } => {
            let file = FileConfig::load(cli.config.as_deref())?;
            handle_export_command(&file, &markdown_file, output_dir, &pdf).await
        }
    }
}

/// Message to show for an error the user can fix by trying again.
pub fn user_message(error: &GroqbookError) -> Option<String> {
    if !error.is_user_facing() {
        return None;
    }
    match error.kind() {
        GroqbookErrorKind::Validation(e) => Some(e.kind.to_string()),
        _ => Some(DECODE_FAILURE_MESSAGE.to_string()),
    }
}
