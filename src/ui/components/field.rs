//! Input field component renderer.
//!
//! Each input is a bordered box with the label set into its top edge and the
//! inline validation error on the row below it.

use crate::ui::helpers::{clip, field_text_width, position_cursor, text_width, FIELD_MARGIN};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FieldView;

/// Renders one input starting at `row`.
///
/// # Returns
///
/// The next available row position (row + body rows + 3)
///
/// # Layout
///
/// ```text
/// ┌ Name ────────────────┐
/// │ Your name            │
/// └──────────────────────┘
///   Name is required
/// ```
///
/// The frame uses `focus_border` for the focused input, `error` for an input
/// with a validation error, and `border` otherwise. The label is bold when
/// focused.
pub fn render_field(row: usize, field: &FieldView, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FIELD_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame_color = if field.is_focused {
        &theme.colors.focus_border
    } else if field.error.is_some() {
        &theme.colors.error
    } else {
        &theme.colors.border
    };

    let label = clip(&format!(" {} ", field.label), inner_width);
    let label_len = text_width(&label);

    position_cursor(row, 1);
    print!("{}", " ".repeat(FIELD_MARGIN));
    print!("{}┌", Theme::fg(frame_color));
    print!("{}", Theme::fg(&theme.colors.label));
    if field.is_focused {
        print!("{}", Theme::bold());
    }
    print!("{label}{}", Theme::reset());
    print!("{}", Theme::fg(frame_color));
    print!("{}┐", "─".repeat(inner_width.saturating_sub(label_len)));
    print!("{}", Theme::reset());

    let text_color = if field.is_placeholder {
        &theme.colors.placeholder
    } else {
        &theme.colors.text_normal
    };

    for offset in 0..field.rows {
        let line = field.lines.get(offset).map_or("", String::as_str);
        let text = clip(line, field_text_width(cols));
        let padding = inner_width.saturating_sub(text_width(&text) + 1);

        position_cursor(row + 1 + offset, 1);
        print!("{}", " ".repeat(FIELD_MARGIN));
        print!("{}│{}", Theme::fg(frame_color), Theme::reset());
        print!(" {}{text}{}", Theme::fg(text_color), Theme::reset());
        print!("{}", " ".repeat(padding));
        print!("{}│{}", Theme::fg(frame_color), Theme::reset());
    }

    let bottom = row + 1 + field.rows;
    position_cursor(bottom, 1);
    print!("{}", " ".repeat(FIELD_MARGIN));
    print!("{}", Theme::fg(frame_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let error_row = bottom + 1;
    position_cursor(error_row, 1);
    match &field.error {
        Some(error) => {
            let text = clip(error, cols.saturating_sub(FIELD_MARGIN + 2));
            let padding = cols.saturating_sub(FIELD_MARGIN + 2 + text_width(&text));
            print!("{}", " ".repeat(FIELD_MARGIN + 2));
            print!("{}{text}{}", Theme::fg(&theme.colors.error), Theme::reset());
            print!("{}", " ".repeat(padding));
        }
        None => print!("{}", " ".repeat(cols)),
    }

    error_row + 1
}
