//! Contact info panel renderer.

use crate::ui::helpers::{clear_row, clip, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InfoPanel;

/// Left indent of panel text.
const PANEL_INDENT: usize = 3;

/// Renders the info panel lines from `row`, filling up to `height` rows.
///
/// Lines beyond `height` are dropped; remaining rows are blanked so the panel
/// fully covers the inputs it replaces.
///
/// # Returns
///
/// The next available row position (row + height)
pub fn render_info_panel(row: usize, panel: &InfoPanel, theme: &Theme, cols: usize, height: usize) -> usize {
    let width = cols.saturating_sub(PANEL_INDENT);

    for offset in 0..height {
        let current = row + offset;
        match panel.lines.get(offset) {
            Some(line) => {
                let text = clip(line, width);
                position_cursor(current, 1);
                print!("{}", " ".repeat(PANEL_INDENT));
                if offset == 0 {
                    print!("{}", Theme::bold());
                }
                print!("{}{text}{}", Theme::fg(&theme.colors.panel_fg), Theme::reset());
                print!("{}", " ".repeat(width.saturating_sub(text_width(&text))));
            }
            None => clear_row(current, cols),
        }
    }

    row + height
}
