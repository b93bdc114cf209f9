use crate::answer::Value;
use crate::error::ValidationFailure;
use crate::form::{FieldDefinition, FieldType};
use regex::Regex;
use std::sync::LazyLock;

/// Conventional `local@domain.tld` shape; anything stricter rejects
/// addresses that real mail systems accept.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hard-coded pattern compiles")
});

/// Validates one field against its own definition and nothing else.
///
/// A field is invalid only if it is required and its value is empty
/// (the same emptiness rule the `is_empty` operator uses), or if a
/// non-empty email value does not look like an address. Statements can
/// never be invalid.
pub fn validate_field(
    field: &FieldDefinition,
    value: Option<&Value>,
) -> Option<ValidationFailure> {
    if !field.field_type.carries_answer() {
        return None;
    }

    if value.is_none_or(Value::is_empty) {
        return field.required.then_some(ValidationFailure::Required);
    }

    if field.field_type == FieldType::Email {
        let candidate = value.map(Value::to_string).unwrap_or_default();
        if !EMAIL_PATTERN.is_match(&candidate) {
            return Some(ValidationFailure::InvalidEmail);
        }
    }

    None
}
