//! Presentation flags owned by the application state.
//!
//! The plugin has two pieces of purely presentational state: the colour scheme
//! and whether the contact info panel is open. Both are plain two-valued enums
//! stored on [`AppState`](crate::app::AppState) and flipped by events, so the
//! renderer reads them from state rather than from any global.
//!
//! # Example
//!
//! ```rust
//! use zcontact::app::{MenuState, ThemeMode};
//!
//! assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
//! assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
//! ```

/// Colour scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Dark palette (default).
    #[default]
    Dark,

    /// Light palette.
    Light,
}

impl ThemeMode {
    /// Parses a configuration value. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Visibility of the contact info / help panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Only the form is shown.
    #[default]
    Closed,

    /// The info panel is drawn in place of the inputs.
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}
