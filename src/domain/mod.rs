//! Domain layer for the zcontact plugin.
//!
//! Core contact form types and rules, independent of Zellij APIs and of the
//! relay transport.
//!
//! # Organization
//!
//! - [`contact`]: Site owner contact details
//! - [`error`]: Crate error type and result alias
//! - [`form`]: Field identifiers and raw form values
//! - [`validation`]: Per-field validation rules and the error map
//!
//! # Examples
//!
//! ```
//! use zcontact::domain::{validate_all, Field, FormValues};
//!
//! let errors = validate_all(&FormValues::new("", "a@b.com", "1234567890"));
//! assert_eq!(errors.get(Field::Name), Some("Name is required"));
//! ```

pub mod contact;
pub mod error;
pub mod form;
pub mod validation;

pub use contact::ContactDetails;
pub use error::{ContactError, Result};
pub use form::{Field, FormValues};
pub use validation::{validate, validate_all, FormErrors, ValidationError};
