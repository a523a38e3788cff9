//! Theme palettes and ANSI escape sequence generation.
//!
//! Two built-in palettes ship with the plugin, `dark` (default) and `light`,
//! stored as TOML under `themes/` and embedded at compile time. The active
//! palette follows [`ThemeMode`] on the application state.
//!
//! # TOML Format
//!
//! ```toml
//! name = "dark"
//!
//! [colors]
//! header_fg = "#e9d5ff"
//! header_bg = "#2e1065"      # optional
//! text_normal = "#f3f4f6"
//! text_dim = "#9ca3af"
//! placeholder = "#6b7280"
//! border = "#4c1d95"
//! focus_border = "#a855f7"
//! label = "#d1d5db"
//! error = "#f87171"
//! button_fg = "#ffffff"
//! button_bg = "#7c3aed"
//! button_disabled_bg = "#4b5563"
//! toast_loading = "#60a5fa"
//! toast_success = "#34d399"
//! toast_error = "#f87171"
//! panel_fg = "#c4b5fd"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcontact::app::ThemeMode;
//! use zcontact::ui::Theme;
//!
//! let theme = Theme::for_mode(ThemeMode::Light);
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "light");
//! ```

use crate::app::modes::ThemeMode;
use crate::app::toast::ToastKind;
use crate::domain::{ContactError, Result};
use serde::{Deserialize, Serialize};

const DARK_TOML: &str = include_str!("../../themes/dark.toml");
const LIGHT_TOML: &str = include_str!("../../themes/light.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Palette name, matching the TOML file stem.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Secondary text (footer, hints).
    pub text_dim: String,
    /// Placeholder text inside empty inputs.
    pub placeholder: String,

    /// Input frame and separator color.
    pub border: String,
    /// Frame color of the focused input.
    pub focus_border: String,
    /// Field label color.
    pub label: String,
    /// Inline validation error color.
    pub error: String,

    pub button_fg: String,
    pub button_bg: String,
    /// Button background while a submission is in flight.
    pub button_disabled_bg: String,

    pub toast_loading: String,
    pub toast_success: String,
    pub toast_error: String,

    /// Info panel text color.
    pub panel_fg: String,
}

impl Theme {
    /// Parses a palette from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Theme`] when the TOML is malformed or a color is
    /// missing.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ContactError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Returns the built-in palette for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if a built-in palette fails to parse, which the unit tests rule out.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        let contents = match mode {
            ThemeMode::Dark => DARK_TOML,
            ThemeMode::Light => LIGHT_TOML,
        };
        Self::from_toml(contents).expect("built-in themes should always parse")
    }

    /// Accent color for a toast of `kind`.
    #[must_use]
    pub fn toast_color(&self, kind: ToastKind) -> &str {
        match kind {
            ToastKind::Loading => &self.colors.toast_loading,
            ToastKind::Success => &self.colors.toast_success,
            ToastKind::Error => &self.colors.toast_error,
        }
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_palettes_parse() {
        assert_eq!(Theme::from_toml(DARK_TOML).unwrap().name, "dark");
        let light = Theme::from_toml(LIGHT_TOML).unwrap();
        assert_eq!(light.name, "light");
        assert!(light.colors.header_bg.is_none());
    }

    #[test]
    fn malformed_palette_is_a_theme_error() {
        let error = Theme::from_toml("name = \"broken\"").unwrap_err();
        assert!(matches!(error, ContactError::Theme(_)));
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("102030"), "\u{1b}[48;2;16;32;48m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }
}
