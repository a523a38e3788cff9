//! Submit button component renderer.

use crate::ui::helpers::{center_padding, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SubmitButton;

/// Renders the centered submit button at `row`.
///
/// A disabled button (submission in flight) uses `button_disabled_bg` and is
/// dimmed.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_button(row: usize, button: &SubmitButton, theme: &Theme, cols: usize) -> usize {
    let text = format!("  {}  ", button.label);
    let len = text_width(&text);
    let padding = center_padding(len, cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    if button.enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::bg(&theme.colors.button_bg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::bg(&theme.colors.button_disabled_bg));
    }
    print!("{}{text}{}", Theme::fg(&theme.colors.button_fg), Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    row + 1
}
