//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data: input
//! lines are already split and truncated to the pane width, and the submit
//! button already reflects the submission gate.
//!
//! # Example
//!
//! ```rust
//! use zcontact::app::AppState;
//!
//! let vm = AppState::default().compute_viewmodel(24, 80);
//! assert_eq!(vm.fields.len(), 3);
//! assert!(vm.submit.enabled);
//! assert!(vm.toast.is_none());
//! ```

use crate::app::toast::ToastKind;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct FormViewModel {
    /// Title block at the top of the pane.
    pub header: HeaderInfo,

    /// Inputs in display order (name, email, message).
    pub fields: Vec<FieldView>,

    pub submit: SubmitButton,

    /// Toast line, when a toast is showing.
    pub toast: Option<ToastView>,

    /// Contact info panel, when open.
    pub info_panel: Option<InfoPanel>,

    pub footer: FooterInfo,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Display information for a single input.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub label: &'static str,

    /// Visible text lines, already truncated to the input width.
    ///
    /// Holds the placeholder when the field is empty.
    pub lines: Vec<String>,

    /// Height of the input body in rows.
    pub rows: usize,

    /// Whether `lines` holds the placeholder rather than user text.
    pub is_placeholder: bool,

    pub is_focused: bool,

    /// Inline validation error shown under the input.
    pub error: Option<String>,
}

/// Submit button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,

    /// False while a submission is in flight.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub kind: ToastKind,
}

/// Contact info panel lines.
#[derive(Debug, Clone)]
pub struct InfoPanel {
    pub lines: Vec<String>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "Tab/Shift+Tab: field  Enter: send").
    pub keybindings: String,
}
