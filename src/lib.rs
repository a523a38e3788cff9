//! zcontact: a contact form as a Zellij plugin.
//!
//! A terminal pane with three inputs (name, email, message), per-field
//! validation, and submission through an EmailJS-compatible HTTP relay, with
//! transient toast notifications for progress and outcome.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  keys / web replies / timers → Event                │
//! │  Action → web_request / set_timeout / hide_self     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Form state and submission gate                   │
//! │  - Toast manager with dismiss tokens                │
//! │  - Event handling, view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Relay Layer   │   │ Domain Layer  │
//! │ (ui/)         │   │ (relay/)      │   │ (domain/)     │
//! │ - Rendering   │   │ - Payload     │   │ - Fields      │
//! │ - Theming     │   │ - Classify    │   │ - Validation  │
//! │ - Components  │   │ - Async submit│   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/, infrastructure/)    │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Fields, validation rules, errors
//! - [`relay`]: Relay request building and outcome classification
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zcontact.wasm" {
//!         service_id "service_abc"
//!         template_id "template_xyz"
//!         public_key "pk_123"
//!         contact_email "me@example.com"
//!         location "Lisbon, Portugal"
//!         availability "Available for opportunities"
//!         github "https://github.com/me"
//!         theme "dark"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Without all three relay identifiers the form still validates, but every
//! submission ends with a "not configured" error toast.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use zcontact::{handle_event, initialize, Action, Config, Event};
//!
//! let map = BTreeMap::from([
//!     ("service_id".to_string(), "service_abc".to_string()),
//!     ("template_id".to_string(), "template_xyz".to_string()),
//!     ("public_key".to_string(), "pk_123".to_string()),
//! ]);
//! let mut state = initialize(&Config::from_zellij(&map));
//!
//! for (field, value) in [
//!     (zcontact::domain::Field::Name, "Ada"),
//!     (zcontact::domain::Field::Email, "ada@example.com"),
//!     (zcontact::domain::Field::Message, "Hello from the terminal"),
//! ] {
//!     handle_event(&mut state, &Event::UpdateField { field, value: value.to_string() })?;
//! }
//!
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(actions.iter().any(|a| matches!(a, Action::SendRelayRequest(_))));
//! # Ok::<(), zcontact::ContactError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod relay;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ThemeMode};
pub use domain::{ContactDetails, ContactError, Result};
pub use relay::{RelayConfig, SubmissionService};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Relay identifiers (`service_id`, `template_id`, `public_key`).
    pub relay: RelayConfig,

    /// Details listed in the info panel: `contact_email`, `phone`,
    /// `location`, `availability`, `github`, `linkedin`.
    pub contact: ContactDetails,

    /// Palette name: `dark` (default) or `light`.
    pub theme: Option<String>,

    /// Tracing filter. Options: `trace`, `debug`, `info`, `warn`, `error`.
    /// Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zcontact::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("service_id".to_string(), "service_abc".to_string()),
    ///     ("public_key".to_string(), "   ".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.relay.service_id.as_deref(), Some("service_abc"));
    /// assert_eq!(config.relay.public_key, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            relay: RelayConfig {
                service_id: value("service_id"),
                template_id: value("template_id"),
                public_key: value("public_key"),
            },
            contact: ContactDetails {
                email: value("contact_email"),
                phone: value("phone"),
                location: value("location"),
                availability: value("availability"),
                github: value("github"),
                linkedin: value("linkedin"),
            },
            theme: value("theme"),
            trace_level: value("trace_level"),
        }
    }

    /// Resolves the configured palette.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Config`] for a theme name other than `dark` or
    /// `light`.
    pub fn theme_mode(&self) -> Result<ThemeMode> {
        match &self.theme {
            None => Ok(ThemeMode::default()),
            Some(name) => ThemeMode::from_name(name)
                .ok_or_else(|| ContactError::Config(format!("unknown theme '{name}', expected 'dark' or 'light'"))),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// An unknown theme falls back to the default palette. Missing relay
/// identifiers are logged here and reported to the user on submit.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zcontact plugin");

    let theme_mode = config.theme_mode().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to resolve theme, using default");
        ThemeMode::default()
    });

    let missing = config.relay.missing();
    if !missing.is_empty() {
        tracing::warn!(missing = ?missing, "relay identifiers not configured");
    }

    AppState::new(
        SubmissionService::new(config.relay.clone()),
        theme_mode,
        config.contact.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("service_id", "service_abc"),
            ("template_id", " template_xyz "),
            ("public_key", "pk_123"),
            ("contact_email", "me@example.com"),
            ("phone", "+1 555 0100"),
            ("location", "Lisbon"),
            ("availability", "Available for opportunities"),
            ("github", "https://github.com/me"),
            ("linkedin", "https://www.linkedin.com/in/me"),
            ("theme", "light"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.relay.template_id.as_deref(), Some("template_xyz"));
        assert!(config.relay.missing().is_empty());
        assert_eq!(config.contact.email.as_deref(), Some("me@example.com"));
        assert_eq!(config.contact.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(config.contact.location.as_deref(), Some("Lisbon"));
        assert_eq!(config.contact.availability.as_deref(), Some("Available for opportunities"));
        assert_eq!(config.contact.github.as_deref(), Some("https://github.com/me"));
        assert_eq!(config.contact.linkedin.as_deref(), Some("https://www.linkedin.com/in/me"));
        assert_eq!(config.theme_mode().unwrap(), ThemeMode::Light);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_and_missing_values_are_absent() {
        let config = Config::from_zellij(&map(&[("service_id", ""), ("contact_email", "  "), ("github", "")]));
        assert_eq!(config, Config::default());
        assert_eq!(config.theme_mode().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_is_a_config_error_and_falls_back() {
        let config = Config::from_zellij(&map(&[("theme", "solarized")]));
        assert!(matches!(config.theme_mode(), Err(ContactError::Config(_))));

        let state = initialize(&config);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(state.theme.name, "dark");
    }

    #[test]
    fn initialize_carries_relay_and_contact() {
        let config = Config::from_zellij(&map(&[
            ("service_id", "service_abc"),
            ("contact_email", "me@example.com"),
            ("location", "Lisbon"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.relay.config().service_id.as_deref(), Some("service_abc"));
        assert_eq!(state.contact.email.as_deref(), Some("me@example.com"));
        assert_eq!(state.contact.location.as_deref(), Some("Lisbon"));
        assert!(state.form.values.is_empty());
    }
}
