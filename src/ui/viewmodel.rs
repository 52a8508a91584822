//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like highlight ranges and selection state; they contain no
//! business logic.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer.

/// Complete UI view model for rendering.
///
/// Contains everything needed to draw one frame: the chrome (header, footer,
/// optional search bar) and exactly one body view.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Search bar, present while searching or when a query is active.
    pub search_bar: Option<SearchBarInfo>,

    /// The main content region.
    pub body: BodyView,
}

/// The main content region, one variant per visual mode.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Home screen rows (headings, category tiles, quick links, favorites).
    Home(Vec<HomeRow>),

    /// Recipe list rows, already windowed to the terminal height.
    List(Vec<ListRow>),

    /// The filter panel.
    Filters(FilterPanelView),

    /// The open recipe detail overlay.
    Detail(DetailView),

    /// Shown when the index has no matching recipes.
    Empty(EmptyState),
}

/// One row on the home screen: a section heading or a selectable entry.
#[derive(Debug, Clone)]
pub struct HomeRow {
    pub label: String,

    /// Secondary text (recipe count for category tiles, category for
    /// favorite entries). Empty when there is nothing to show.
    pub detail: String,

    pub is_selected: bool,
    pub is_heading: bool,

    /// Favorite marker for recipe entries.
    pub is_favorite: bool,
}

impl HomeRow {
    #[must_use]
    pub fn heading(label: &str) -> Self {
        Self {
            label: label.to_string(),
            detail: String::new(),
            is_selected: false,
            is_heading: true,
            is_favorite: false,
        }
    }

    #[must_use]
    pub fn entry(label: &str, detail: String, is_selected: bool) -> Self {
        Self {
            label: label.to_string(),
            detail,
            is_selected,
            is_heading: false,
            is_favorite: false,
        }
    }
}

/// Display information for a single recipe list row.
#[derive(Debug, Clone)]
pub struct ListRow {
    /// Recipe name, truncated to fit.
    pub name: String,

    /// Meta column: category, cuisine, active minutes, difficulty.
    pub meta: String,

    pub is_selected: bool,

    /// User-toggled favorite marker.
    pub is_favorite: bool,

    /// Curated catalog highlight marker.
    pub is_curated: bool,

    /// Byte ranges of the name to highlight for search matches.
    ///
    /// Each tuple is `(start_index, end_index)`, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The filter panel: grouped toggle rows plus an active-selection count.
#[derive(Debug, Clone)]
pub struct FilterPanelView {
    pub rows: Vec<FilterPanelRow>,
    pub active_count: usize,
}

/// One row of the filter panel: a group heading or a toggleable value.
#[derive(Debug, Clone)]
pub struct FilterPanelRow {
    pub label: String,
    pub is_heading: bool,

    /// Whether the value is currently selected in the filter state.
    pub is_active: bool,

    /// Whether the panel cursor is on this row.
    pub is_cursor: bool,
}

impl FilterPanelRow {
    #[must_use]
    pub fn heading(label: &str) -> Self {
        Self {
            label: label.to_string(),
            is_heading: true,
            is_active: false,
            is_cursor: false,
        }
    }
}

/// The open recipe rendered as a scrollable page.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,

    /// Meta line: category, cuisine, difficulty, times, servings.
    pub meta: String,

    pub is_favorite: bool,

    /// Whether the keep-awake toggle is on (shown as an indicator).
    pub keep_awake: bool,

    /// Body lines in display order; the renderer applies `scroll`.
    pub lines: Vec<DetailLine>,

    /// First visible line index.
    pub scroll: usize,
}

/// One line of the recipe detail body.
#[derive(Debug, Clone)]
pub enum DetailLine {
    /// Section header ("Ingredients", "Instructions", ...).
    Section(String),
    /// Plain text (description, notes, split-usage fragments).
    Text(String),
    /// A bulleted ingredient or equipment line.
    Ingredient(String),
    /// A numbered instruction step.
    Step(usize, String),
    Blank,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No recipes match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether the input (rather than the results) has focus.
    pub focused: bool,
}
