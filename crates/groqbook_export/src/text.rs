//! Plain text export.

/// Encodes markdown as UTF-8 bytes, unchanged.
///
/// # Examples
///
/// ```
/// use groqbook_export::to_plain_text;
///
/// assert_eq!(to_plain_text("# Ünïcode\n"), "# Ünïcode\n".as_bytes());
/// ```
pub fn to_plain_text(markdown: &str) -> Vec<u8> {
    markdown.as_bytes().to_vec()
}
