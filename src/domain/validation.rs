//! Field validation rules.
//!
//! Validation is pure: [`validate`] maps a field and its raw value to at most one
//! [`ValidationError`], and [`validate_all`] folds the three fields into
//! [`FormErrors`]. Emptiness and minimum-length checks look at the trimmed value;
//! the email shape check looks at the value as typed.

use super::form::{Field, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum trimmed length of the `name` field, in characters.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum trimmed length of the `message` field, in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// `local@domain.tld` shape: no whitespace and no extra `@` in any segment.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// A single failed rule for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: &'static str,
}

impl ValidationError {
    const fn new(field: Field, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("built-in email pattern should always compile"))
}

/// Validates one field value, returning the first rule it fails.
///
/// # Examples
///
/// ```
/// use zcontact::domain::{validate, Field};
///
/// let error = validate(Field::Name, " J ").unwrap();
/// assert_eq!(error.reason, "Name must be at least 2 characters");
/// assert!(validate(Field::Email, "ada@example.com").is_none());
/// ```
#[must_use]
pub fn validate(field: Field, value: &str) -> Option<ValidationError> {
    let trimmed = value.trim();
    let reason = match field {
        Field::Name => {
            if trimmed.is_empty() {
                Some("Name is required")
            } else if trimmed.chars().count() < NAME_MIN_CHARS {
                Some("Name must be at least 2 characters")
            } else {
                None
            }
        }
        Field::Email => {
            if trimmed.is_empty() {
                Some("Email is required")
            } else if !email_regex().is_match(value) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Message => {
            if trimmed.is_empty() {
                Some("Message is required")
            } else if trimmed.chars().count() < MESSAGE_MIN_CHARS {
                Some("Message must be at least 10 characters")
            } else {
                None
            }
        }
    };

    reason.map(|reason| ValidationError::new(field, reason))
}

/// Runs every field rule and collects the failures.
#[must_use]
pub fn validate_all(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in Field::ALL {
        if let Some(error) = validate(field, values.get(field)) {
            errors.insert(error);
        }
    }
    errors
}

/// Per-field validation errors. A field absent from the map is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, ValidationError>);

impl FormErrors {
    /// Message for `field`, if it currently has an error.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|error| error.reason)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Stores an error under its own field, replacing any previous one.
    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field, error);
    }

    /// Removes the error for `field`, returning whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in field display order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.values()
    }
}
