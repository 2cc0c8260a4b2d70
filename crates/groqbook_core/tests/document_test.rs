//! Tests for the document model.

use groqbook_core::{Document, Outline};
use groqbook_error::DocumentErrorKind;
use std::collections::HashSet;

fn sample_document() -> Document {
    let outline = Outline::from_json_str(r#"{"Intro": "x intro", "Part": {"Ch1": "x1"}}"#)
        .expect("Valid outline");
    Document::new(outline)
}

#[test]
fn test_content_keys_match_flattened_titles() {
    let outline = Outline::from_json_str(
        r#"{"A": "a", "B": {"B1": "b1", "B2": {"B2a": "x"}}, "C": "c"}"#,
    )
    .expect("Valid outline");
    let expected: HashSet<String> = outline.flatten().iter().map(|t| t.to_string()).collect();
    let document = Document::new(outline);

    let actual: HashSet<String> = document
        .titles()
        .iter()
        .filter(|title| document.content(title) == Some(""))
        .map(|t| t.to_string())
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(document.content("Nope"), None);
}

#[test]
fn test_append_to_unknown_title_fails() {
    let mut document = sample_document();
    let err = document.append("Epilogue", "text").unwrap_err();
    assert_eq!(err.kind, DocumentErrorKind::UnknownTitle("Epilogue".to_string()));
    assert_eq!(document.flatten_to_markdown(), "");
}

#[test]
fn test_append_preserves_order() {
    let mut split = sample_document();
    split.append("Intro", "A").expect("Known title");
    split.append("Intro", "B").expect("Known title");

    let mut whole = sample_document();
    whole.append("Intro", "AB").expect("Known title");

    assert_eq!(split.content("Intro"), Some("AB"));
    assert_eq!(split, whole);
}

#[test]
fn test_flatten_to_markdown_pins_expected_output() {
    let mut document = sample_document();
    document.append("Intro", "Hello").expect("Known title");
    document.append("Ch1", "World").expect("Known title");

    assert_eq!(
        document.flatten_to_markdown(),
        "# Intro\nHello\n\n## Ch1\nWorld\n\n"
    );
}

#[test]
fn test_markdown_includes_group_with_content() {
    let mut document = sample_document();
    document.append("Part", "Overview").expect("Known title");
    document.append("Ch1", "World").expect("Known title");

    assert_eq!(
        document.flatten_to_markdown(),
        "# Part\nOverview\n\n## Ch1\nWorld\n\n"
    );
}

#[test]
fn test_whitespace_only_content_is_blank() {
    let mut document = sample_document();
    document.append("Intro", "  \n\t").expect("Known title");

    assert!(document.is_blank("Intro"));
    assert_eq!(document.render_incremental("Intro"), None);
    assert_eq!(document.flatten_to_markdown(), "");
}

#[test]
fn test_render_incremental_fragment() {
    let mut document = sample_document();
    assert_eq!(document.render_incremental("Intro"), None);

    document.append("Intro", "Hello").expect("Known title");
    assert_eq!(
        document.render_incremental("Intro").as_deref(),
        Some("<div class='book-section'><h3>Intro</h3><div>Hello</div></div>")
    );
}

#[test]
fn test_render_structure_levels() {
    let mut document = sample_document();
    document.append("Intro", "Hello").expect("Known title");
    document.append("Ch1", "World").expect("Known title");

    assert_eq!(
        document.render_structure(),
        "<h2 style='color: var(--text-color);'>Intro</h2>\
         <div class='book-section'><h3>Intro</h3><div>Hello</div></div>\
         <h3 style='color: var(--text-color);'>Ch1</h3>\
         <div class='book-section'><h3>Ch1</h3><div>World</div></div>"
    );
}
