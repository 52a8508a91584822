//! Home screen component renderer.
//!
//! Renders the landing screen: section headings with category tiles, quick
//! links, and favorite recipes beneath them.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HomeRow;

/// Renders the home screen rows starting at the specified row.
///
/// Heading rows print in the accent color; entries indent below them with a
/// right-aligned detail column. Rows beyond the available height are dropped.
/// Returns the next available row position.
pub fn render_home_rows(
    row: usize,
    items: &[HomeRow],
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    let mut current_row = row;
    for item in items.iter().take(max_rows) {
        current_row = render_home_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_home_row(row: usize, item: &HomeRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_heading {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("{}", item.label);
        print!("{}", Theme::reset());
        return row + 1;
    }

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let marker = if item.is_favorite { "♥ " } else { "  " };
    if !item.is_selected && item.is_favorite {
        print!("{}", Theme::fg(&theme.colors.favorite_fg));
        print!("{marker}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{marker}");
    }

    print!("{}", item.label);

    let used = 2 + item.label.chars().count();
    let detail_len = item.detail.chars().count();
    let padding = cols.saturating_sub(used + detail_len + 1);
    print!("{}", " ".repeat(padding));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{} ", item.detail);

    print!("{}", Theme::reset());
    row + 1
}
