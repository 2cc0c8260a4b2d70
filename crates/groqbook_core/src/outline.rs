//! Recursive book outline.

use groqbook_error::{OutlineError, OutlineErrorKind};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Value attached to an outline title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineNode {
    /// Leaf section with a one-line description; content is generated for it
    Leaf(String),
    /// Group of subsections with no generated content of its own
    Branch(Outline),
}

/// A titled entry of an outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSection {
    /// Section title, unique across the whole outline
    pub title: String,
    /// Description or nested subsections
    pub node: OutlineNode,
}

impl OutlineSection {
    /// Creates a leaf section.
    pub fn leaf(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            node: OutlineNode::Leaf(description.into()),
        }
    }

    /// Creates a subsection group.
    pub fn branch(title: impl Into<String>, outline: Outline) -> Self {
        Self {
            title: title.into(),
            node: OutlineNode::Branch(outline),
        }
    }
}

/// Ordered list of titled sections, possibly nested.
///
/// Sibling order is the order sections were written in the source JSON.
/// Titles are unique across every nesting level: they key the generated
/// content in a [`Document`](crate::Document).
///
/// # Examples
///
/// ```
/// use groqbook_core::Outline;
///
/// let outline = Outline::from_json_str(r#"{"Intro": "x intro", "Part": {"Ch1": "x1"}}"#).unwrap();
/// assert_eq!(outline.flatten(), vec!["Intro", "Part", "Ch1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outline {
    sections: Vec<OutlineSection>,
}

impl Outline {
    /// Creates an outline from sections, rejecting repeated titles.
    pub fn new(sections: Vec<OutlineSection>) -> Result<Self, OutlineError> {
        let outline = Self { sections };
        outline.check_unique_titles()?;
        Ok(outline)
    }

    /// Parses the JSON text returned by the outline request.
    ///
    /// The top level must be a non-empty object. Every value must be a string
    /// (leaf description) or an object (subsection group).
    #[tracing::instrument(skip(json), fields(len = json.len()))]
    pub fn from_json_str(json: &str) -> Result<Self, OutlineError> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "Outline response is not valid JSON");
            OutlineError::new(OutlineErrorKind::InvalidJson(e.to_string()))
        })?;
        Self::from_value(&value)
    }

    /// Builds an outline from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, OutlineError> {
        let map = value.as_object().ok_or_else(|| {
            OutlineError::new(OutlineErrorKind::NotAnObject(json_type(value).to_string()))
        })?;
        if map.is_empty() {
            return Err(OutlineError::new(OutlineErrorKind::Empty));
        }

        let outline = Self {
            sections: sections_from_map(map)?,
        };
        outline.check_unique_titles()?;

        tracing::debug!(
            top_level = outline.sections.len(),
            total = outline.flatten().len(),
            "Parsed outline"
        );
        Ok(outline)
    }

    /// Top-level sections in order.
    pub fn sections(&self) -> &[OutlineSection] {
        &self.sections
    }

    /// Number of top-level sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the outline has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every title in pre-order: a title comes before its subsections, and
    /// siblings keep their order.
    pub fn flatten(&self) -> Vec<&str> {
        let mut titles = Vec::new();
        self.collect_titles(&mut titles);
        titles
    }

    /// Leaf sections in pre-order, as `(title, description)` pairs.
    pub fn leaves(&self) -> Vec<(&str, &str)> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    /// Nesting depth of `title`, counting top-level sections as 1.
    pub fn depth(&self, title: &str) -> Option<usize> {
        self.sections.iter().find_map(|section| {
            if section.title == title {
                return Some(1);
            }
            match &section.node {
                OutlineNode::Branch(outline) => outline.depth(title).map(|depth| depth + 1),
                OutlineNode::Leaf(_) => None,
            }
        })
    }

    /// Converts back to a JSON object with the same ordering.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for section in &self.sections {
            let value = match &section.node {
                OutlineNode::Leaf(description) => Value::String(description.clone()),
                OutlineNode::Branch(outline) => outline.to_value(),
            };
            map.insert(section.title.clone(), value);
        }
        Value::Object(map)
    }

    fn collect_titles<'a>(&'a self, titles: &mut Vec<&'a str>) {
        for section in &self.sections {
            titles.push(section.title.as_str());
            if let OutlineNode::Branch(outline) = &section.node {
                outline.collect_titles(titles);
            }
        }
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<(&'a str, &'a str)>) {
        for section in &self.sections {
            match &section.node {
                OutlineNode::Leaf(description) => {
                    leaves.push((section.title.as_str(), description.as_str()))
                }
                OutlineNode::Branch(outline) => outline.collect_leaves(leaves),
            }
        }
    }

    fn check_unique_titles(&self) -> Result<(), OutlineError> {
        let mut seen = HashSet::new();
        for title in self.flatten() {
            if !seen.insert(title) {
                return Err(OutlineError::new(OutlineErrorKind::DuplicateTitle(
                    title.to_string(),
                )));
            }
        }
        Ok(())
    }
}

fn sections_from_map(map: &Map<String, Value>) -> Result<Vec<OutlineSection>, OutlineError> {
    map.iter()
        .map(|(title, value)| match value {
            Value::String(description) => Ok(OutlineSection::leaf(title, description)),
            Value::Object(children) => Ok(OutlineSection::branch(
                title,
                Outline {
                    sections: sections_from_map(children)?,
                },
            )),
            other => Err(OutlineError::new(OutlineErrorKind::InvalidNode {
                title: title.clone(),
                found: json_type(other).to_string(),
            })),
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
