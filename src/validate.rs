//! Field validation rules
//!
//! Rules are evaluated in a fixed order per field (required, then
//! kind-specific format, then minimum length) and stop at the first
//! failure, so callers always surface a single message per field.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::state::{Field, FieldKind};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

// Leading-digit international shape, applied after stripping separators
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone pattern"));

/// A failed validation rule, recoverable and surfaced inline next to the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Please select at least one option")]
    GroupEmpty,
}

/// Check an email address for `localpart@domain.tld` shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a phone number after stripping spaces, hyphens and parentheses
pub fn is_valid_phone(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_PATTERN.is_match(&stripped)
}

/// Evaluate a single field against its declared constraints.
///
/// Returns the first failing rule's error. Unchecked checkable fields
/// without a required constraint pass without further checks.
pub fn validate_field(field: &Field) -> Result<(), ValidationError> {
    if field.kind.is_checkable() {
        if field.constraints.required && !field.is_checked() {
            return Err(ValidationError::Required);
        }
        return Ok(());
    }

    let value = field.as_text().trim();

    if field.constraints.required && value.is_empty() {
        return Err(ValidationError::Required);
    }

    if field.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail);
    }

    if field.kind == FieldKind::Tel && !value.is_empty() && !is_valid_phone(value) {
        return Err(ValidationError::InvalidPhone);
    }

    if let Some(min) = field.constraints.min_length {
        if value.chars().count() < min {
            return Err(ValidationError::TooShort { min });
        }
    }

    Ok(())
}
