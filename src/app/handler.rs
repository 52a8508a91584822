//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! translating it into state changes and action sequences. It is the primary
//! control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal key loop
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. A render flag and actions are returned for execution
//!
//! # Navigation rules
//!
//! - Home moves to Index by activating a category tile or quick link, or by
//!   submitting a search; the query / selection carries over.
//! - Index returns to Home on explicit navigate-home, which clears the
//!   query, category, and every filter set.
//! - The recipe modal opens from a selection on either screen, overlays it,
//!   and always clears the open recipe on close. At most one is open.
//! - Wake-lock actions are emitted only when the keep-awake toggle is on.

use super::modes::{InputMode, Screen, SearchFocus};
use super::state::HomeEntry;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Recipe;

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the active cursor down (or scrolls the open recipe).
    MoveDown,
    /// Moves the active cursor up (or scrolls the open recipe).
    MoveUp,
    /// Activates the item under the cursor.
    Select,
    /// Returns to the home screen, resetting all index state.
    NavigateHome,
    /// Enters search mode with typing focus and a fresh query.
    SearchMode,
    /// Moves focus from the search input to the results.
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Context-dependent dismiss: modal, filter panel, search, or screen.
    Escape,
    /// Opens the filter panel on the index screen.
    OpenFilters,
    /// Clears the category selection and every filter set.
    ClearFilters,
    /// Toggles the favorite state of the open or selected recipe.
    ToggleFavorite,
    /// Switches to the next built-in theme and persists the choice.
    CycleTheme,
    /// Flips the keep-screen-awake toggle.
    ToggleKeepAwake,
    /// Quits the application.
    Quit,
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns a render flag (whether the UI changed) and the actions to execute
/// in sequence. The vector is empty for events with no side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods. Today every transition is
/// infallible; the `Result` keeps the signature stable as effects grow.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::MoveDown => {
            state.move_down();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_up();
            Ok((true, vec![]))
        }
        Event::Select => handle_select(state),
        Event::NavigateHome => {
            let actions = release_if_held(state);
            state.reset_to_home();
            Ok((true, actions))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.filters.query = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.filters.query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_filters();
                return Ok((true, vec![]));
            }

            // Submitting a home-screen search lands on the index with the
            // query carried over.
            if state.screen == Screen::Home {
                state.screen = Screen::Index;
                state.selected_index = 0;
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filters.query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.filters.query = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.filters.query.push(*c);
            tracing::trace!(query = %state.filters.query, "search query updated");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.filters.query.pop();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Escape => handle_escape(state),
        Event::OpenFilters => {
            if state.screen != Screen::Index || state.is_modal_open() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Filters;
            state.filter_index = 0;
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            let query = std::mem::take(&mut state.filters.query);
            state.filters.clear();
            state.filters.query = query;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => {
            let Some(id) = favorite_target(state) else {
                return Ok((false, vec![]));
            };
            state.favorites.toggle(&id);
            Ok((true, vec![]))
        }
        Event::CycleTheme => {
            state.cycle_theme();
            Ok((true, vec![]))
        }
        Event::ToggleKeepAwake => {
            state.keep_awake = !state.keep_awake;
            tracing::debug!(keep_awake = state.keep_awake, "keep-awake toggled");

            // With a recipe already open the lock follows the toggle.
            let actions = if state.is_modal_open() {
                if state.keep_awake {
                    vec![Action::AcquireWakeLock]
                } else {
                    vec![Action::ReleaseWakeLock]
                }
            } else {
                vec![]
            };
            Ok((true, actions))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

fn handle_select(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.is_modal_open() {
        return Ok((false, vec![]));
    }

    if state.input_mode == InputMode::Filters {
        let rows = state.filter_rows();
        let Some(row) = rows.get(state.filter_index).cloned() else {
            return Ok((false, vec![]));
        };
        state.toggle_filter_row(&row);
        state.apply_filters();
        return Ok((true, vec![]));
    }

    match state.screen {
        Screen::Home => {
            let entries = state.home_entries();
            let Some(entry) = entries.get(state.home_index).cloned() else {
                return Ok((false, vec![]));
            };
            match entry {
                HomeEntry::Category(category) => {
                    tracing::debug!(category = %category, "category tile activated");
                    state.filters.clear();
                    state.filters.category = Some(category);
                    state.screen = Screen::Index;
                    state.selected_index = 0;
                    state.apply_filters();
                    Ok((true, vec![]))
                }
                HomeEntry::Quick(link) => {
                    tracing::debug!(link = ?link, "quick link activated");
                    state.filters = link.filters();
                    state.screen = Screen::Index;
                    state.selected_index = 0;
                    state.apply_filters();
                    Ok((true, vec![]))
                }
                HomeEntry::Recipe(id) => match state.catalog.get(&id).cloned() {
                    Some(recipe) => Ok((true, open_recipe(state, recipe))),
                    None => Ok((false, vec![])),
                },
            }
        }
        Screen::Index => {
            let Some(recipe) = state.selected_recipe().cloned() else {
                tracing::debug!("no recipe selected");
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Normal;
            Ok((true, open_recipe(state, recipe)))
        }
    }
}

/// Dismiss priority: modal, then filter panel, then search, then the index
/// screen itself. Escape on the home screen is a no-op.
fn handle_escape(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.is_modal_open() {
        let actions = release_if_held(state);
        state.close_modal();
        return Ok((true, actions));
    }

    match state.input_mode {
        InputMode::Filters => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        InputMode::Search(_) => {
            state.input_mode = InputMode::Normal;
            state.filters.query = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        InputMode::Normal => match state.screen {
            Screen::Index => {
                state.reset_to_home();
                Ok((true, vec![]))
            }
            Screen::Home => Ok((false, vec![])),
        },
    }
}

fn open_recipe(state: &mut AppState, recipe: Recipe) -> Vec<Action> {
    state.open_modal(recipe);
    if state.keep_awake {
        vec![Action::AcquireWakeLock]
    } else {
        vec![]
    }
}

fn release_if_held(state: &AppState) -> Vec<Action> {
    if state.is_modal_open() && state.keep_awake {
        vec![Action::ReleaseWakeLock]
    } else {
        vec![]
    }
}

fn favorite_target(state: &AppState) -> Option<String> {
    if let Some(recipe) = &state.open_recipe {
        return Some(recipe.id.clone());
    }
    match state.screen {
        Screen::Index => state.selected_recipe().map(|r| r.id.clone()),
        Screen::Home => match state.home_entries().get(state.home_index) {
            Some(HomeEntry::Recipe(id)) => Some(id.clone()),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::Category;
    use crate::storage::JsonStorage;
    use crate::ui::theme::Theme;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> AppState {
        let storage = JsonStorage::new(dir.path().join("ladle.json")).unwrap();
        AppState::new(
            Catalog::load_embedded().unwrap(),
            Rc::new(RefCell::new(storage)),
            Theme::default(),
            false,
        )
    }

    fn fire(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        let mut all = vec![];
        for event in events {
            let (_, actions) = handle_event(state, event).unwrap();
            all.extend(actions);
        }
        all
    }

    #[test]
    fn search_submit_carries_query_to_index() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);

        fire(
            &mut state,
            &[
                Event::SearchMode,
                Event::Char('e'),
                Event::Char('g'),
                Event::Char('g'),
                Event::FocusResults,
            ],
        );

        assert_eq!(state.screen, Screen::Index);
        assert_eq!(state.filters.query, "egg");
        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
        assert!(!state.filtered_recipes.is_empty());
    }

    #[test]
    fn category_tile_opens_filtered_index() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);

        // The first home entry is the first category tile.
        state.home_index = 0;
        fire(&mut state, &[Event::Select]);

        assert_eq!(state.screen, Screen::Index);
        assert_eq!(state.filters.category, Some(Category::Breakfast));
        assert!(state
            .filtered_recipes
            .iter()
            .all(|r| r.category == Category::Breakfast));
    }

    #[test]
    fn navigate_home_resets_everything() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);

        fire(
            &mut state,
            &[Event::SearchMode, Event::Char('a'), Event::FocusResults],
        );
        state.filters.dietary.insert(crate::domain::Dietary::Vegan);
        state.apply_filters();

        fire(&mut state, &[Event::NavigateHome]);

        assert_eq!(state.screen, Screen::Home);
        assert!(state.filters.query.is_empty());
        assert!(state.filters.category.is_none());
        assert!(!state.filters.has_active_filters());
        assert_eq!(state.filtered_recipes.len(), state.catalog.len());
    }

    #[test]
    fn modal_opens_and_escape_clears_it() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);

        fire(
            &mut state,
            &[Event::SearchMode, Event::FocusResults], // empty query drops to normal
        );
        state.screen = Screen::Index;
        state.apply_filters();
        fire(&mut state, &[Event::Select]);
        assert!(state.is_modal_open());

        fire(&mut state, &[Event::Select]);
        assert!(state.is_modal_open(), "select is inert while modal is open");

        fire(&mut state, &[Event::Escape]);
        assert!(!state.is_modal_open());
        assert!(state.open_recipe.is_none());
    }

    #[test]
    fn wake_lock_follows_modal_when_keep_awake_is_on() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.keep_awake = true;
        state.screen = Screen::Index;
        state.apply_filters();

        let actions = fire(&mut state, &[Event::Select]);
        assert_eq!(actions, vec![Action::AcquireWakeLock]);

        let actions = fire(&mut state, &[Event::Escape]);
        assert_eq!(actions, vec![Action::ReleaseWakeLock]);
    }

    #[test]
    fn no_wake_lock_actions_when_toggle_is_off() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.screen = Screen::Index;

        let actions = fire(&mut state, &[Event::Select, Event::Escape]);
        assert!(actions.is_empty());
    }

    #[test]
    fn keep_awake_toggle_acquires_for_open_recipe() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.screen = Screen::Index;
        fire(&mut state, &[Event::Select]);

        let actions = fire(&mut state, &[Event::ToggleKeepAwake]);
        assert_eq!(actions, vec![Action::AcquireWakeLock]);

        let actions = fire(&mut state, &[Event::ToggleKeepAwake]);
        assert_eq!(actions, vec![Action::ReleaseWakeLock]);
    }

    #[test]
    fn favorite_toggle_targets_open_recipe() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.screen = Screen::Index;

        fire(&mut state, &[Event::Select]);
        let id = state.open_recipe.as_ref().unwrap().id.clone();

        fire(&mut state, &[Event::ToggleFavorite]);
        assert!(state.favorites.is_favorite(&id));
        fire(&mut state, &[Event::ToggleFavorite]);
        assert!(!state.favorites.is_favorite(&id));
    }

    #[test]
    fn filter_panel_toggle_narrows_results() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.screen = Screen::Index;
        let all = state.catalog.len();

        fire(&mut state, &[Event::OpenFilters]);
        assert_eq!(state.input_mode, InputMode::Filters);

        // First row is the first present category type.
        fire(&mut state, &[Event::Select]);
        assert!(state.filters.has_active_filters());
        assert!(state.filtered_recipes.len() < all);

        fire(&mut state, &[Event::ClearFilters]);
        assert!(!state.filters.has_active_filters());
        assert_eq!(state.filtered_recipes.len(), all);

        fire(&mut state, &[Event::Escape]);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn quit_emits_quit_action() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let actions = fire(&mut state, &[Event::Quit]);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn characters_outside_typing_focus_are_ignored() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let (rendered, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!rendered);
        assert!(state.filters.query.is_empty());
    }

    #[test]
    fn theme_cycles_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let before = state.theme.name.clone();

        fire(&mut state, &[Event::CycleTheme]);
        assert_ne!(state.theme.name, before);
        assert!(dir.path().join("ladle.json").exists());
    }
}
