//! Document model holding generated book content.

use crate::{Outline, OutlineNode};
use groqbook_error::{DocumentError, DocumentErrorKind};
use std::collections::HashMap;

/// A book under generation: its outline plus accumulated text per title.
///
/// The set of titles with a content entry is fixed at construction and
/// equals [`Outline::flatten`]. Content only ever grows by appending.
///
/// # Examples
///
/// ```
/// use groqbook_core::{Document, Outline};
///
/// let outline = Outline::from_json_str(r#"{"Intro": "x intro", "Part": {"Ch1": "x1"}}"#).unwrap();
/// let mut document = Document::new(outline);
/// document.append("Intro", "Hello").unwrap();
/// document.append("Ch1", "World").unwrap();
///
/// assert_eq!(document.flatten_to_markdown(), "# Intro\nHello\n\n## Ch1\nWorld\n\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    outline: Outline,
    contents: HashMap<String, String>,
}

impl Document {
    /// Creates a document with one empty content entry per outline title.
    pub fn new(outline: Outline) -> Self {
        let contents = outline
            .flatten()
            .into_iter()
            .map(|title| (title.to_string(), String::new()))
            .collect();
        Self { outline, contents }
    }

    /// The outline this document was built from.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Accumulated content for `title`, if it is part of the outline.
    pub fn content(&self, title: &str) -> Option<&str> {
        self.contents.get(title).map(String::as_str)
    }

    /// Titles in outline order.
    pub fn titles(&self) -> Vec<&str> {
        self.outline.flatten()
    }

    /// Appends an increment to the content for `title`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentErrorKind::UnknownTitle`] when `title` is not in the
    /// outline. The document is left unchanged.
    pub fn append(&mut self, title: &str, text: &str) -> Result<(), DocumentError> {
        let content = self.contents.get_mut(title).ok_or_else(|| {
            DocumentError::new(DocumentErrorKind::UnknownTitle(title.to_string()))
        })?;
        content.push_str(text);
        Ok(())
    }

    /// Whether `title` has no content beyond whitespace.
    pub fn is_blank(&self, title: &str) -> bool {
        self.content(title).is_none_or(|content| content.trim().is_empty())
    }

    /// Display fragment for one section, or `None` while it is blank.
    pub fn render_incremental(&self, title: &str) -> Option<String> {
        if self.is_blank(title) {
            return None;
        }
        let content = self.content(title)?;
        Some(format!(
            "<div class='book-section'><h3>{}</h3><div>{}</div></div>",
            title, content
        ))
    }

    /// Display markup for the whole book, skipping blank sections.
    ///
    /// Top-level titles use `<h2>`; each nesting level adds one.
    pub fn render_structure(&self) -> String {
        let mut html = String::new();
        self.render_level(&self.outline, 2, &mut html);
        html
    }

    /// Flat markdown for export, skipping blank sections.
    ///
    /// Top-level titles get one `#`; each nesting level adds one.
    pub fn flatten_to_markdown(&self) -> String {
        let mut markdown = String::new();
        self.markdown_level(&self.outline, 1, &mut markdown);
        markdown
    }

    fn render_level(&self, outline: &Outline, level: usize, html: &mut String) {
        for section in outline.sections() {
            if let Some(fragment) = self.render_incremental(&section.title) {
                html.push_str(&format!(
                    "<h{level} style='color: var(--text-color);'>{}</h{level}>",
                    section.title
                ));
                html.push_str(&fragment);
            }
            if let OutlineNode::Branch(children) = &section.node {
                self.render_level(children, level + 1, html);
            }
        }
    }

    fn markdown_level(&self, outline: &Outline, level: usize, markdown: &mut String) {
        for section in outline.sections() {
            if !self.is_blank(&section.title) {
                let content = self.content(&section.title).unwrap_or_default();
                markdown.push_str(&format!(
                    "{} {}\n{}\n\n",
                    "#".repeat(level),
                    section.title,
                    content
                ));
            }
            if let OutlineNode::Branch(children) = &section.node {
                self.markdown_level(children, level + 1, markdown);
            }
        }
    }
}
