//! Contact form field model.
//!
//! The form has exactly three fields. [`Field`] names them and gives them a
//! stable order (used for focus cycling and error maps); [`FormValues`] holds the
//! raw text the visitor typed. Values are stored exactly as entered: trimming is a
//! validation concern only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Lowercase identifier used in logs and relay payload keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Human-readable label rendered above the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Placeholder text shown while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your.email@example.com",
            Self::Message => "Your message...",
        }
    }

    /// The field after this one, wrapping from `Message` back to `Name`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// The field before this one, wrapping from `Name` back to `Message`.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    /// Builds a value set from borrowed strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcontact::domain::{Field, FormValues};
    ///
    /// let values = FormValues::new("Ada", "ada@example.com", "Hello there, Ada here");
    /// assert_eq!(values.get(Field::Email), "ada@example.com");
    /// ```
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.slot_mut(field) = value;
    }

    /// Mutable access to a field's text, used by character-level editing.
    pub fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Returns `true` when every field is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycle_visits_every_field() {
        let mut field = Field::Name;
        let mut visited = vec![field];
        for _ in 0..2 {
            field = field.next();
            visited.push(field);
        }
        assert_eq!(visited, Field::ALL.to_vec());
        assert_eq!(field.next(), Field::Name);
        assert_eq!(Field::Name.previous(), Field::Message);
    }

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut values = FormValues::default();
        values.set(Field::Message, "  keep my spaces  ".to_string());
        assert_eq!(values.get(Field::Message), "  keep my spaces  ");
        assert_eq!(values.get(Field::Name), "");
        assert!(!values.is_empty());
    }
}
