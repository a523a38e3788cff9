//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: cursor positioning and
//! width-aware padding. Widths are counted in characters, not bytes, so
//! non-ASCII input keeps the frame aligned.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Horizontal margin on each side of an input box.
pub const FIELD_MARGIN: usize = 1;

/// Columns available for text inside an input box on a `cols`-wide pane.
///
/// The box loses the margins, two border columns and one space of padding on
/// each side.
#[must_use]
pub fn field_text_width(cols: usize) -> usize {
    cols.saturating_sub(FIELD_MARGIN * 2 + 4)
}

/// Character width of `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Left padding that centers `len` characters in `cols`.
///
/// When the width cannot divide evenly, the right side gets the extra column.
#[must_use]
pub fn center_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

/// Cuts `text` to at most `max` characters, keeping the start.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Prints `text` centered on `row` in `color`, filling the full width.
pub fn render_centered(row: usize, text: &str, color: &str, cols: usize) {
    let text = clip(text, cols);
    let len = text_width(&text);
    let padding = center_padding(len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

/// Blanks `row` across the full width.
pub fn clear_row(row: usize, cols: usize) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(cols));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_centers_with_extra_column_on_the_right() {
        assert_eq!(center_padding(4, 10), 3);
        assert_eq!(center_padding(5, 10), 2);
        assert_eq!(center_padding(20, 10), 0);
    }

    #[test]
    fn field_text_width_leaves_room_for_frame() {
        assert_eq!(field_text_width(40), 34);
        assert_eq!(field_text_width(3), 0);
    }

    #[test]
    fn width_and_clip_count_characters() {
        assert_eq!(text_width("héllo"), 5);
        assert_eq!(clip("héllo", 2), "hé");
        assert_eq!(clip("ab", 10), "ab");
    }
}
