//! Synchronous field validation rules.
//!
//! Each field has one independent rule. Per-field checks run on blur; the
//! full-form pass runs on submit and never short-circuits, so every failing
//! field surfaces its error at once.

use std::sync::OnceLock;

use regex::Regex;

use super::field::{Field, FieldValues};

/// Error messages, verbatim from the site copy
pub mod messages {
    pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
    pub const EMAIL_INVALID: &str = "Please enter a valid email address";
    pub const SUBJECT_TOO_SHORT: &str = "Subject must be at least 5 characters long";
    pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Loose shape check: something, an @, something, a dot, something,
/// with no whitespace anywhere.
fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Run a single field's rule against its value. The value is trimmed first.
pub fn validate_field(field: Field, value: &str) -> Result<(), &'static str> {
    let value = value.trim();

    match field {
        Field::Name if value.chars().count() < 2 => Err(messages::NAME_TOO_SHORT),
        Field::Email if !email_pattern().is_match(value) => Err(messages::EMAIL_INVALID),
        Field::Subject if value.chars().count() < 5 => Err(messages::SUBJECT_TOO_SHORT),
        Field::Message if value.chars().count() < 10 => Err(messages::MESSAGE_TOO_SHORT),
        _ => Ok(()),
    }
}

/// Run every rule and collect all failures, in form order
pub fn validate_all(values: &FieldValues) -> Vec<(Field, &'static str)> {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, values.get(field))
                .err()
                .map(|message| (field, message))
        })
        .collect()
}
