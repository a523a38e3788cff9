//! Toast component renderer.

use crate::app::toast::ToastKind;
use crate::ui::helpers::{clear_row, render_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastView;

/// Renders the toast line at `row`, or a blank row when there is no toast.
///
/// The message is prefixed with a glyph for its kind and colored with the
/// matching toast accent.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_toast(row: usize, toast: Option<&ToastView>, theme: &Theme, cols: usize) -> usize {
    let Some(toast) = toast else {
        clear_row(row, cols);
        return row + 1;
    };

    let glyph = match toast.kind {
        ToastKind::Loading => "…",
        ToastKind::Success => "✓",
        ToastKind::Error => "✗",
    };
    let text = format!("{glyph} {}", toast.message);
    render_centered(row, &text, theme.toast_color(toast.kind), cols);
    row + 1
}
