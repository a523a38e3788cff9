//! Error types for the zcontact plugin.
//!
//! This module defines the crate-wide error type [`ContactError`] and a type alias
//! [`Result`] for plugin plumbing: configuration parsing, theme loading, and
//! serialization of relay payloads. Field validation and submission failures have
//! their own typed errors ([`ValidationError`](crate::domain::ValidationError) and
//! [`SubmissionError`](crate::relay::SubmissionError)) because they are surfaced to
//! the user rather than logged.

use thiserror::Error;

/// The main error type for zcontact plugin operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use zcontact::ContactError;
///
/// fn check_endpoint(endpoint: &str) -> Result<(), ContactError> {
///     if endpoint.is_empty() {
///         return Err(ContactError::Config("relay endpoint is empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_endpoint("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ContactError {
    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A relay payload could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for zcontact operations.
pub type Result<T> = std::result::Result<T, ContactError>;
