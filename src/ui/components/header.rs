//! Header component renderer.
//!
//! Renders the form title bar with centered text, theme-aware colors, and
//! optional background styling, followed by a dimmed subtitle line.

use crate::ui::helpers::{center_padding, position_cursor, render_centered, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and subtitle starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
/// [left padding] Get In Touch [right padding]
/// [left padding] subtitle     [right padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = text_width(&header.title);
    let padding = center_padding(title_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    render_centered(row + 1, &header.subtitle, &theme.colors.text_dim, cols);
    row + 2
}
