//! Footer component renderer.

use crate::ui::helpers::render_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed at `row`.
///
/// Text wider than the pane is clipped so narrow panes keep their layout.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    render_centered(row, &footer.keybindings, &theme.colors.text_dim, cols);
    row + 1
}
