//! Composable UI component renderers.
//!
//! Each component renders one part of the pane starting at a given row and
//! returns the next free row, so the layout reads top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`field`]: Bordered input with label and inline error
//! - [`button`]: Submit button
//! - [`toast`]: Single toast line
//! - [`panel`]: Contact info panel
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Subtitle]
//! [Name input + error]      ┐
//! [Email input + error]     ├ replaced by the info panel when open
//! [Message input + error]   ┘
//! [Submit button]
//! [Toast]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod button;
mod field;
mod footer;
mod header;
mod panel;
mod toast;

use crate::ui::helpers::{clear_row, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormViewModel;

use button::render_button;
use field::render_field;
use footer::render_footer;
use header::render_header;
use panel::render_info_panel;
use toast::render_toast;

/// Rows an input occupies besides its body: top edge, bottom edge, error line.
const FIELD_CHROME_ROWS: usize = 3;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full form layout.
///
/// The footer and its border are pinned to the last two rows; rows between the
/// toast and the border are blanked.
pub fn render_form(vm: &FormViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_header(1, &vm.header, theme, cols);

    if let Some(panel) = &vm.info_panel {
        let height = vm
            .fields
            .iter()
            .map(|field| field.rows + FIELD_CHROME_ROWS)
            .sum();
        current_row = render_info_panel(current_row, panel, theme, cols, height);
    } else {
        for field in &vm.fields {
            current_row = render_field(current_row, field, theme, cols);
        }
    }

    current_row = render_button(current_row, &vm.submit, theme, cols);
    current_row = render_toast(current_row, vm.toast.as_ref(), theme, cols);

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);

    while current_row < border_row {
        clear_row(current_row, cols);
        current_row += 1;
    }

    if border_row >= current_row {
        render_border(border_row, &theme.colors.border, cols);
        render_footer(footer_row, &vm.footer, theme, cols);
    }
}
