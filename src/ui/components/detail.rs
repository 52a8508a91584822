//! Recipe detail component renderer.
//!
//! Renders the open recipe as a scrollable page: title with favorite and
//! keep-awake indicators, a meta line, then the windowed body lines
//! (ingredients, instructions, notes).

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailLine, DetailView};

/// Renders the recipe detail view starting at the specified row.
///
/// `max_rows` bounds the body window; `detail.scroll` picks the first visible
/// line (clamped so the last page stays full). Returns the next available
/// row position.
pub fn render_detail(
    row: usize,
    detail: &DetailView,
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", detail.title);
    print!("{}", Theme::reset());
    if detail.is_favorite {
        print!(" {}♥{}", Theme::fg(&theme.colors.favorite_fg), Theme::reset());
    }
    if detail.keep_awake {
        print!(
            " {}[awake]{}",
            Theme::fg(&theme.colors.accent),
            Theme::reset()
        );
    }

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&detail.meta, cols));
    print!("{}", Theme::reset());

    let body_rows = max_rows.saturating_sub(3);
    let scroll = detail
        .scroll
        .min(detail.lines.len().saturating_sub(body_rows));

    let mut current_row = row + 3;
    for line in detail.lines.iter().skip(scroll).take(body_rows) {
        position_cursor(current_row, 1);
        match line {
            DetailLine::Section(text) => {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.accent));
                print!("{}", truncate(text, cols));
                print!("{}", Theme::reset());
            }
            DetailLine::Text(text) => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("{}", truncate(text, cols));
                print!("{}", Theme::reset());
            }
            DetailLine::Ingredient(text) => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("  • {}", truncate(text, cols.saturating_sub(4)));
                print!("{}", Theme::reset());
            }
            DetailLine::Step(n, text) => {
                print!("{}", Theme::fg(&theme.colors.accent));
                print!("  {n}. ");
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("{}", truncate(text, cols.saturating_sub(6)));
                print!("{}", Theme::reset());
            }
            DetailLine::Blank => {}
        }
        current_row += 1;
    }

    current_row
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
