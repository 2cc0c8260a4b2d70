//! Outline command handler.

use super::{EXIT_REJECTED, user_message};
use crate::BookConfig;
use groqbook_core::{Outline, OutlineNode};
use groqbook_generation::BookExecutor;
use groqbook_models::GroqClient;
use std::process::ExitCode;

/// Handles the outline command.
#[tracing::instrument(skip(config))]
pub async fn handle_outline_command(
    config: &BookConfig,
    topic: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let client = GroqClient::with_base_url(config.api_key().as_str(), config.base_url().as_str());
    let executor = BookExecutor::with_settings(client, config.generation_settings());

    let (statistics, outline) = match executor.generate_outline(topic).await {
        Ok(reply) => reply,
        Err(e) => match user_message(&e) {
            Some(message) => {
                tracing::warn!(error = %e, "Outline rejected");
                eprintln!("{}", message);
                return Ok(ExitCode::from(EXIT_REJECTED));
            }
            None => return Err(e.into()),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outline.to_value())?);
    } else {
        print!("{}", render_tree(&outline));
    }
    eprint!("{}", statistics.render());
    Ok(ExitCode::SUCCESS)
}

/// Indented tree, two spaces per nesting level.
pub fn render_tree(outline: &Outline) -> String {
    let mut tree = String::new();
    push_tree(outline, 0, &mut tree);
    tree
}

fn push_tree(outline: &Outline, depth: usize, tree: &mut String) {
    let indent = "  ".repeat(depth);
    for section in outline.sections() {
        match &section.node {
            OutlineNode::Leaf(description) => {
                tree.push_str(&format!("{}{}: {}\n", indent, section.title, description));
            }
            OutlineNode::Branch(children) => {
                tree.push_str(&format!("{}{}\n", indent, section.title));
                push_tree(children, depth + 1, tree);
            }
        }
    }
}
