//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different
//! regions of the interface, plus the frame-level layout function that
//! arranges them.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`home`]: Home screen sections (categories, quick links, favorites)
//! - [`list`]: Recipe list rows with markers and meta columns
//! - [`filters`]: Filter panel with checkbox rows
//! - [`detail`]: Scrollable recipe page
//! - [`empty`]: Empty state message for no matches

mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod home;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use filters::render_filter_panel;
use footer::render_footer;
use header::render_header;
use home::render_home_rows;
use list::render_list_rows;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer). Returns the next
/// available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one full frame from a view model.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, when present]
/// [Body: home / list / filters / detail / empty]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Skip the blank line at row 1.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let body_rows = border_row.saturating_sub(current_row).max(1);

    match &vm.body {
        BodyView::Home(items) => {
            render_home_rows(current_row, items, theme, cols, body_rows);
        }
        BodyView::List(items) => {
            render_list_rows(current_row, items, theme, cols);
        }
        BodyView::Filters(panel) => {
            render_filter_panel(current_row, panel, theme, cols, body_rows);
        }
        BodyView::Detail(detail) => {
            render_detail(current_row, detail, theme, cols, body_rows);
        }
        BodyView::Empty(empty) => {
            render_empty_state(empty, theme, cols);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
