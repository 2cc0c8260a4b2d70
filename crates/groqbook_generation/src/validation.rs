//! Topic validation.

use groqbook_error::{ValidationError, ValidationErrorKind};

/// Fewest characters a topic may have.
pub const MIN_TOPIC_LENGTH: usize = 10;

/// Rejects topics shorter than [`MIN_TOPIC_LENGTH`] characters.
///
/// Length is counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use groqbook_generation::validate_topic;
///
/// assert!(validate_topic("Rust async").is_ok());
/// assert!(validate_topic("Rust").is_err());
/// ```
pub fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    let length = topic.chars().count();
    if length < MIN_TOPIC_LENGTH {
        return Err(ValidationError::new(ValidationErrorKind::TopicTooShort {
            length,
            minimum: MIN_TOPIC_LENGTH,
        }));
    }
    Ok(())
}
