//! Filter panel component renderer.
//!
//! Renders the filter panel: grouped toggle rows with checkbox markers and an
//! active-selection count in the panel title.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterPanelView;

/// Renders the filter panel starting at the specified row.
///
/// Returns the next available row position.
pub fn render_filter_panel(
    row: usize,
    panel: &FilterPanelView,
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if panel.active_count > 0 {
        print!("Filters ({} active)", panel.active_count);
    } else {
        print!("Filters");
    }
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for item in panel.rows.iter().take(max_rows.saturating_sub(1)) {
        position_cursor(current_row, 1);

        if item.is_heading {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.accent));
            print!("{}", item.label);
            print!("{}", Theme::reset());
            current_row += 1;
            continue;
        }

        if item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        let mark = if item.is_active { "[x]" } else { "[ ]" };
        print!("  {mark} {}", item.label);

        let used = 6 + item.label.chars().count();
        print!("{}", " ".repeat(cols.saturating_sub(used)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
