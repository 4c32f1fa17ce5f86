use crate::domain::model::{ContactMessage, ValidationFailure};
use regex::Regex;
use std::sync::OnceLock;

/// Deliberately loose: one `@`, at least one dot after it, no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Trims the message and checks it. Completeness is checked before email shape.
pub fn validate_message(
    message: &ContactMessage,
) -> std::result::Result<ContactMessage, ValidationFailure> {
    let trimmed = message.trimmed();

    if trimmed.name.is_empty() || trimmed.email.is_empty() || trimmed.message.is_empty() {
        return Err(ValidationFailure::IncompleteFields);
    }

    if !is_valid_email(&trimmed.email) {
        return Err(ValidationFailure::InvalidEmail);
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_field_is_incomplete() {
        let msg = ContactMessage::new("   ", "ada@example.com", "Hello");
        assert_eq!(
            validate_message(&msg),
            Err(ValidationFailure::IncompleteFields)
        );

        let msg = ContactMessage::new("Ada", "ada@example.com", "\n\t");
        assert_eq!(
            validate_message(&msg),
            Err(ValidationFailure::IncompleteFields)
        );
    }

    #[test]
    fn test_completeness_wins_over_email_shape() {
        let msg = ContactMessage::new("", "not-an-email", "Hello");
        assert_eq!(
            validate_message(&msg),
            Err(ValidationFailure::IncompleteFields)
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        // loose on purpose
        assert!(is_valid_email("a@b..com"));

        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_valid_message_is_returned_trimmed() {
        let msg = ContactMessage::new("  Ada ", " ada@example.com ", " Hello\n");
        let cleaned = validate_message(&msg).unwrap();
        assert_eq!(cleaned, ContactMessage::new("Ada", "ada@example.com", "Hello"));
    }
}
