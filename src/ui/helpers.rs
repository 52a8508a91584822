//! Shared rendering utilities and helpers.
//!
//! Low-level rendering utilities used across multiple UI components: cursor
//! positioning and search match highlighting with ANSI escape sequence
//! management.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted byte ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// ranges. Highlighting is suppressed for selected rows, where the selection
/// background takes precedence.
///
/// Ranges are byte indices `(start, end)` with exclusive end, as produced by
/// the filter engine's match scanner. Ranges that do not fall on character
/// boundaries are ignored and the text prints unstyled.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let mut current = 0;
    for &(start, end) in ranges {
        let end = end.min(text.len());
        let (Some(before), Some(matched)) = (text.get(current..start), text.get(start..end))
        else {
            // Range off a char boundary; bail out to plain text.
            print!("{}", &text[current.min(text.len())..]);
            return;
        };

        print!("{before}");
        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        print!("{matched}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current = end;
    }

    if let Some(rest) = text.get(current..) {
        print!("{rest}");
    }
}
