//! Recipe list component renderer.
//!
//! Renders the index screen's recipe list: a marker column (user favorite,
//! curated pick), the recipe name with search match highlighting, and a
//! right-hand meta column.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListRow;

/// Renders all recipe rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_list_rows(row: usize, items: &[ListRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single recipe row.
///
/// Layout: two-character marker column, name, then the meta text
/// right-aligned against the terminal edge. Selected rows get the full-width
/// selection background; markers keep their own colors on unselected rows.
fn render_list_row(row: usize, item: &ListRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let marker = if item.is_favorite {
        "♥ "
    } else if item.is_curated {
        "★ "
    } else {
        "  "
    };
    if !item.is_selected && item.is_favorite {
        print!("{}", Theme::fg(&theme.colors.favorite_fg));
        print!("{marker}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else if !item.is_selected && item.is_curated {
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("{marker}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{marker}");
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    }

    let name_len = 2 + item.name.chars().count();
    let meta_len = item.meta.chars().count();
    let padding = cols.saturating_sub(name_len + meta_len + 1);
    print!("{}", " ".repeat(padding));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{} ", item.meta);

    print!("{}", Theme::reset());
    row + 1
}
