//! Contact form state.
//!
//! [`FormState`] holds the field values, the per-field error map, and the
//! in-flight submission flag. Every operation is a synchronous in-memory mutation.

use crate::domain::{validate, validate_all, Field, FormErrors, FormValues};

/// Values, inline errors, and submission gate of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FormErrors,
    is_submitting: bool,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` from successful validation until the submission resolves.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Sets `field` to `value` and drops its error without re-validating.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        if self.errors.clear(field) {
            tracing::trace!(field = %field, "cleared error on edit");
        }
    }

    /// Appends one character to `field`.
    pub fn push_char(&mut self, field: Field, c: char) {
        let mut value = self.values.get(field).to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Removes the last character of `field`. Returns `false` if it was empty.
    pub fn pop_char(&mut self, field: Field) -> bool {
        let mut value = self.values.get(field).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.update_field(field, value);
        true
    }

    /// Validates the current value of `field`, setting or clearing its error.
    pub fn blur_field(&mut self, field: Field) {
        match validate(field, self.values.get(field)) {
            Some(error) => {
                tracing::debug!(field = %field, reason = error.reason, "field invalid on blur");
                self.errors.insert(error);
            }
            None => {
                self.errors.clear(field);
            }
        }
    }

    /// Re-validates every field, replacing the whole error map.
    ///
    /// Returns whether the form is valid.
    pub fn validate_all(&mut self) -> bool {
        self.errors = validate_all(&self.values);
        self.errors.is_empty()
    }

    /// Clears all values and errors.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors = FormErrors::default();
    }

    /// Closes the submission gate. Returns `false` if a submission is already in flight.
    pub fn begin_submission(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        true
    }

    /// Reopens the submission gate.
    pub fn end_submission(&mut self) {
        self.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_everywhere() -> FormState {
        let mut form = FormState::new();
        assert!(!form.validate_all());
        form
    }

    #[test]
    fn edit_clears_only_that_fields_error() {
        let mut form = invalid_everywhere();
        form.update_field(Field::Email, "still-bad".to_string());

        assert!(!form.errors.contains(Field::Email));
        assert!(form.errors.contains(Field::Name));
        assert!(form.errors.contains(Field::Message));
        assert_eq!(form.values.email, "still-bad");
    }

    #[test]
    fn character_edits_also_clear_the_error() {
        let mut form = invalid_everywhere();
        form.push_char(Field::Name, 'J');
        assert!(!form.errors.contains(Field::Name));

        form.blur_field(Field::Name);
        assert_eq!(form.errors.get(Field::Name), Some("Name must be at least 2 characters"));

        assert!(form.pop_char(Field::Name));
        assert!(!form.errors.contains(Field::Name));
        assert!(!form.pop_char(Field::Name));
    }

    #[test]
    fn blur_sets_and_clears_only_its_field() {
        let mut form = FormState::new();
        form.blur_field(Field::Email);
        assert_eq!(form.errors.get(Field::Email), Some("Email is required"));
        assert_eq!(form.errors.len(), 1);

        form.values.email = "a@b.com".to_string();
        form.blur_field(Field::Email);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn validate_all_replaces_stale_errors() {
        let mut form = invalid_everywhere();
        form.values = FormValues::new("Jo", "not-an-email", "short");
        assert!(!form.validate_all());
        assert!(!form.errors.contains(Field::Name));
        assert_eq!(form.errors.len(), 2);

        form.values = FormValues::new("Jo", "jo@example.com", "long enough message");
        assert!(form.validate_all());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = invalid_everywhere();
        form.values = FormValues::new("Jo", "x", "y");
        form.reset();
        assert_eq!(form.values, FormValues::default());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn submission_gate_admits_one_at_a_time() {
        let mut form = FormState::new();
        assert!(form.begin_submission());
        assert!(form.is_submitting());
        assert!(!form.begin_submission());
        form.end_submission();
        assert!(!form.is_submitting());
        assert!(form.begin_submission());
    }
}
