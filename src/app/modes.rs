//! Input and navigation mode state types for the application.
//!
//! This module defines the state machine enums that control which screen is
//! visible, which keybindings are active, and how input is processed.
//!
//! # State Machine
//!
//! Navigation happens between two screens, with a recipe modal that can
//! overlay either of them:
//! - **Home**: category tiles, quick links, and favorites
//! - **Index**: searchable, filterable recipe list
//!
//! Input modes determine keybinding interpretation on the current screen:
//! - **Normal**: navigation and command mode
//! - **Search**: active search with typing or result navigation focus
//! - **Filters**: the filter panel is open and toggles apply to its rows

/// Which screen is currently displayed.
///
/// The recipe modal is not a screen; it overlays whichever screen was active
/// and restores it on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen with category tiles, quick links, and favorites.
    Home,

    /// Full recipe list with live search and the filter panel.
    Index,
}

/// Focus state within search mode.
///
/// Determines whether search input is being typed or results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to submit).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results.
    Search(SearchFocus),

    /// The filter panel is open; movement and toggles act on its rows.
    Filters,
}
