//! Fixed prompts sent to the language model.

/// System instruction for the outline request.
pub const OUTLINE_SYSTEM_PROMPT: &str = concat!(
    "Write in JSON format:\n\n",
    r#"{"Title of section goes here":"Description of section goes here","#,
    "\n",
    r#""Title of section goes here":{"Title of section goes here":"Description of section goes here","Title of section goes here":"Description of section goes here","Title of section goes here":"Description of section goes here"}}"#,
);

/// System instruction for each section request.
pub const SECTION_SYSTEM_PROMPT: &str =
    "You are an expert writer. Generate a long, comprehensive, structured chapter for the section provided.";

/// User prompt asking for the outline of a book on `topic`.
pub fn outline_user_prompt(topic: &str) -> String {
    format!(
        "Write a comprehensive structure, omiting introduction and conclusion sections (forward, author's note, summary), for a long (>300 page) book on the following subject:\n\n<subject>{}</subject>",
        topic
    )
}

/// User prompt asking for the chapter of one leaf section.
pub fn section_user_prompt(title: &str, description: &str) -> String {
    format!(
        "Generate a long, comprehensive, structured chapter for the following section:\n\n<section_title>{}: {}</section_title>",
        title, description
    )
}
