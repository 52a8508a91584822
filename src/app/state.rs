//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! application, along with methods for filtering, selection management, and
//! UI view model generation. It is the single source of truth for all
//! transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the catalog, the favorites store) from
//! derived state (filtered recipes, cursor positions) to keep transitions
//! simple. View models are computed on demand from state snapshots; nothing
//! in here prints to the terminal.
//!
//! # State Components
//!
//! - **Catalog**: the fixed recipe list, loaded once
//! - **Filters**: the current query and structured filter selections
//! - **Filtered recipes**: subset after applying the filter engine
//! - **Cursors**: independent selection positions for the home screen, the
//!   recipe list, and the filter panel
//! - **Open recipe**: the modal overlay, at most one at a time

use super::modes::{InputMode, Screen, SearchFocus};
use crate::catalog::filter::{filter_recipes, match_ranges, FilterOptions, FilterState};
use crate::catalog::Catalog;
use crate::domain::{Category, CookMethod, Dietary, Difficulty, Recipe};
use crate::favorites::FavoritesStore;
use crate::storage::Storage;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, DetailLine, DetailView, EmptyState, FilterPanelRow, FilterPanelView, FooterInfo,
    HeaderInfo, HomeRow, ListRow, SearchBarInfo, UIViewModel,
};
use std::cell::RefCell;
use std::rc::Rc;

/// A selectable entry on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEntry {
    /// A category tile; activating it opens the index filtered to it.
    Category(Category),

    /// A preset shortcut; activating it opens the index with the preset
    /// applied.
    Quick(QuickLink),

    /// A favorite recipe shown directly on the home screen; activating it
    /// opens the recipe.
    Recipe(String),
}

/// Preset shortcuts shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickLink {
    All,
    Quick,
    Vegetarian,
    GlutenFree,
    SlowCooker,
    Desserts,
}

impl QuickLink {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Quick,
        Self::Vegetarian,
        Self::GlutenFree,
        Self::SlowCooker,
        Self::Desserts,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All recipes",
            Self::Quick => "Quick (under 30 min)",
            Self::Vegetarian => "Vegetarian",
            Self::GlutenFree => "Gluten-free",
            Self::SlowCooker => "Slow cooker",
            Self::Desserts => "Desserts",
        }
    }

    /// The filter state this preset expands to.
    #[must_use]
    pub fn filters(self) -> FilterState {
        let mut filters = FilterState::default();
        match self {
            Self::All => {}
            Self::Quick => filters.query = "quick".to_string(),
            Self::Vegetarian => {
                filters.dietary.insert(Dietary::Vegetarian);
            }
            Self::GlutenFree => {
                filters.dietary.insert(Dietary::GlutenFree);
            }
            Self::SlowCooker => {
                filters.cook_methods.insert(CookMethod::SlowCooker);
            }
            Self::Desserts => filters.category = Some(Category::Dessert),
        }
        filters
    }
}

/// One toggleable row in the filter panel.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterRow {
    Type(Category),
    Cuisine(String),
    Difficulty(Difficulty),
    CookMethod(CookMethod),
    Dietary(Dietary),
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input. View models are
/// computed on demand from state snapshots.
pub struct AppState {
    /// The fixed recipe catalog.
    pub catalog: Catalog,

    /// User-toggled favorites, persisting through the shared storage handle.
    pub favorites: FavoritesStore,

    /// Shared storage handle, used directly for theme persistence.
    storage: Rc<RefCell<dyn Storage>>,

    /// Active color theme.
    pub theme: Theme,

    /// Which screen is displayed (the modal overlays it).
    pub screen: Screen,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current query and structured filter selections.
    pub filters: FilterState,

    /// Distinct filter option values, computed once from the catalog.
    pub filter_options: FilterOptions,

    /// Recipes matching the current filters, in display order.
    ///
    /// Recomputed by [`apply_filters`](Self::apply_filters) after every
    /// filter change; used for rendering and selection bounds.
    pub filtered_recipes: Vec<Recipe>,

    /// Cursor within `filtered_recipes` on the index screen.
    pub selected_index: usize,

    /// Cursor within the home screen entries.
    pub home_index: usize,

    /// Cursor within the filter panel rows.
    pub filter_index: usize,

    /// The recipe open in the modal overlay, if any.
    pub open_recipe: Option<Recipe>,

    /// Scroll offset into the open recipe's detail lines.
    pub detail_scroll: usize,

    /// Whether opening a recipe should request a screen wake-lock.
    pub keep_awake: bool,
}

impl AppState {
    /// Creates the application state from loaded components.
    ///
    /// Builds the favorites store over the shared storage handle, computes
    /// the filter options, and runs the initial (empty) filter so the index
    /// is ready immediately.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        storage: Rc<RefCell<dyn Storage>>,
        theme: Theme,
        keep_awake: bool,
    ) -> Self {
        let favorites = FavoritesStore::new(Rc::clone(&storage));
        let filter_options = FilterOptions::from_recipes(catalog.recipes());

        let mut state = Self {
            catalog,
            favorites,
            storage,
            theme,
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            filters: FilterState::default(),
            filter_options,
            filtered_recipes: vec![],
            selected_index: 0,
            home_index: 0,
            filter_index: 0,
            open_recipe: None,
            detail_scroll: 0,
            keep_awake,
        };
        state.apply_filters();
        state
    }

    /// Recomputes the filtered recipe list and clamps the selection.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            query_len = self.filters.query.len(),
            active = self.filters.active_count()
        )
        .entered();

        self.filtered_recipes = filter_recipes(self.catalog.recipes(), &self.filters)
            .into_iter()
            .cloned()
            .collect();

        if self.filtered_recipes.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_recipes.len() - 1);
        }
    }

    /// The selectable entries on the home screen, in display order.
    ///
    /// Category tiles for categories present in the catalog, then the preset
    /// quick links, then the user's favorites, then the curated picks.
    #[must_use]
    pub fn home_entries(&self) -> Vec<HomeEntry> {
        let mut entries: Vec<HomeEntry> = self
            .filter_options
            .types
            .iter()
            .map(|c| HomeEntry::Category(*c))
            .collect();

        entries.extend(QuickLink::ALL.iter().map(|q| HomeEntry::Quick(*q)));

        entries.extend(
            self.favorites
                .ids()
                .iter()
                .filter(|id| self.catalog.get(id).is_some())
                .map(|id| HomeEntry::Recipe(id.clone())),
        );

        entries.extend(
            self.catalog
                .curated_favorites()
                .iter()
                .map(|r| HomeEntry::Recipe(r.id.clone())),
        );

        entries
    }

    /// The filter panel rows, in display order.
    ///
    /// Only values present in the catalog are offered, except the dietary
    /// axis, which is always complete.
    #[must_use]
    pub fn filter_rows(&self) -> Vec<FilterRow> {
        let mut rows: Vec<FilterRow> = self
            .filter_options
            .types
            .iter()
            .map(|c| FilterRow::Type(*c))
            .collect();
        rows.extend(
            self.filter_options
                .cuisines
                .iter()
                .map(|c| FilterRow::Cuisine(c.clone())),
        );
        rows.extend(
            self.filter_options
                .difficulties
                .iter()
                .map(|d| FilterRow::Difficulty(*d)),
        );
        rows.extend(
            self.filter_options
                .cook_methods
                .iter()
                .map(|m| FilterRow::CookMethod(*m)),
        );
        rows.extend(Dietary::ALL.iter().map(|d| FilterRow::Dietary(*d)));
        rows
    }

    /// Flips the filter selection the given row represents.
    pub fn toggle_filter_row(&mut self, row: &FilterRow) {
        fn flip<T: std::hash::Hash + Eq + Clone>(
            set: &mut std::collections::HashSet<T>,
            value: &T,
        ) {
            if !set.remove(value) {
                set.insert(value.clone());
            }
        }

        match row {
            FilterRow::Type(c) => flip(&mut self.filters.types, c),
            FilterRow::Cuisine(c) => flip(&mut self.filters.cuisines, c),
            FilterRow::Difficulty(d) => flip(&mut self.filters.difficulties, d),
            FilterRow::CookMethod(m) => flip(&mut self.filters.cook_methods, m),
            FilterRow::Dietary(d) => flip(&mut self.filters.dietary, d),
        }
    }

    /// Moves the active cursor down by one position, wrapping at the end.
    ///
    /// Which cursor is active depends on the modal, the input mode, and the
    /// screen, in that priority order. With the modal open this scrolls the
    /// detail view instead.
    pub fn move_down(&mut self) {
        if self.open_recipe.is_some() {
            self.detail_scroll = self.detail_scroll.saturating_add(1);
            return;
        }
        match (self.input_mode, self.screen) {
            (InputMode::Filters, _) => {
                let len = self.filter_rows().len();
                Self::cycle_down(&mut self.filter_index, len);
            }
            (_, Screen::Home) => {
                let len = self.home_entries().len();
                Self::cycle_down(&mut self.home_index, len);
            }
            (_, Screen::Index) => {
                Self::cycle_down(&mut self.selected_index, self.filtered_recipes.len());
            }
        }
    }

    /// Moves the active cursor up by one position, wrapping at the start.
    pub fn move_up(&mut self) {
        if self.open_recipe.is_some() {
            self.detail_scroll = self.detail_scroll.saturating_sub(1);
            return;
        }
        match (self.input_mode, self.screen) {
            (InputMode::Filters, _) => {
                let len = self.filter_rows().len();
                Self::cycle_up(&mut self.filter_index, len);
            }
            (_, Screen::Home) => {
                let len = self.home_entries().len();
                Self::cycle_up(&mut self.home_index, len);
            }
            (_, Screen::Index) => {
                Self::cycle_up(&mut self.selected_index, self.filtered_recipes.len());
            }
        }
    }

    fn cycle_down(index: &mut usize, len: usize) {
        if len > 0 {
            *index = (*index + 1) % len;
        }
    }

    fn cycle_up(index: &mut usize, len: usize) {
        if len > 0 {
            *index = index.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// The recipe under the index cursor, if any.
    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.filtered_recipes.get(self.selected_index)
    }

    /// Whether the recipe modal is open.
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.open_recipe.is_some()
    }

    /// Opens a recipe in the modal overlay, replacing any open one.
    pub fn open_modal(&mut self, recipe: Recipe) {
        tracing::debug!(recipe_id = %recipe.id, "opening recipe");
        self.open_recipe = Some(recipe);
        self.detail_scroll = 0;
    }

    /// Closes the modal overlay, clearing the open recipe.
    pub fn close_modal(&mut self) {
        if let Some(recipe) = self.open_recipe.take() {
            tracing::debug!(recipe_id = %recipe.id, "closing recipe");
        }
        self.detail_scroll = 0;
    }

    /// Returns to the home screen, resetting all index state.
    ///
    /// Clears the query, the category selection, every filter set, and the
    /// index cursor; closes the modal if open.
    pub fn reset_to_home(&mut self) {
        self.close_modal();
        self.filters.clear();
        self.screen = Screen::Home;
        self.input_mode = InputMode::Normal;
        self.selected_index = 0;
        self.filter_index = 0;
        self.apply_filters();
    }

    /// Switches to the next built-in theme and persists the choice.
    ///
    /// Persistence is best-effort; a write failure keeps the new theme for
    /// this session.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
        tracing::debug!(theme = %self.theme.name, "theme changed");
        if let Err(e) = self.storage.borrow_mut().save_theme(&self.theme.name) {
            tracing::warn!(error = %e, "failed to persist theme");
        }
    }

    /// Computes a renderable view model from current state.
    ///
    /// `rows` and `cols` are the terminal dimensions; the recipe list and the
    /// detail view are windowed to fit.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = if let Some(recipe) = &self.open_recipe {
            BodyView::Detail(self.compute_detail(recipe))
        } else {
            match (self.input_mode, self.screen) {
                (InputMode::Filters, _) => BodyView::Filters(self.compute_filter_panel()),
                (_, Screen::Home) => BodyView::Home(self.compute_home_rows()),
                (_, Screen::Index) => {
                    if self.filtered_recipes.is_empty() {
                        BodyView::Empty(EmptyState {
                            message: "No recipes match".to_string(),
                            subtitle: "Adjust the search or clear filters with c".to_string(),
                        })
                    } else {
                        BodyView::List(self.compute_list_rows(rows, cols))
                    }
                }
            }
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            body,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.open_recipe.is_some() {
            " Recipe ".to_string()
        } else {
            match self.screen {
                Screen::Home => " Ladle ".to_string(),
                Screen::Index => format!(" Recipes ({}) ", self.filtered_recipes.len()),
            }
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.open_recipe.is_some() {
            "j/k: scroll  f: favorite  w: keep awake  Esc: close".to_string()
        } else {
            match (self.input_mode, self.screen) {
                (InputMode::Filters, _) => {
                    "j/k: move  Enter: toggle  c: clear  Esc: done".to_string()
                }
                (InputMode::Search(SearchFocus::Typing), _) => {
                    "Esc: cancel  Enter: results  Type to search".to_string()
                }
                (InputMode::Search(SearchFocus::Navigating), _) => {
                    "j/k: move  Enter: open  /: edit query  Esc: exit search".to_string()
                }
                (InputMode::Normal, Screen::Home) => {
                    "j/k: move  Enter: open  /: search  t: theme  q: quit".to_string()
                }
                (InputMode::Normal, Screen::Index) => {
                    "j/k: move  Enter: open  /: search  F: filters  f: favorite  h: home  q: quit"
                        .to_string()
                }
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let searching = matches!(self.input_mode, InputMode::Search(_));
        if searching || (!self.filters.query.is_empty() && self.screen == Screen::Index) {
            Some(SearchBarInfo {
                query: self.filters.query.clone(),
                focused: matches!(self.input_mode, InputMode::Search(SearchFocus::Typing)),
            })
        } else {
            None
        }
    }

    fn compute_home_rows(&self) -> Vec<HomeRow> {
        let entries = self.home_entries();
        let category_count = self.filter_options.types.len();
        let quick_count = QuickLink::ALL.len();
        let user_favorite_count = self
            .favorites
            .ids()
            .iter()
            .filter(|id| self.catalog.get(id).is_some())
            .count();

        // Section headings interleave with the flat entry list; the cursor
        // index counts entries only, so headings are inserted by boundary.
        let mut boundaries = vec![(0, "Browse by category"), (category_count, "Quick links")];
        if user_favorite_count > 0 {
            boundaries.push((category_count + quick_count, "Your favorites"));
        }
        boundaries.push((category_count + quick_count + user_favorite_count, "Our picks"));

        let mut rows = Vec::with_capacity(entries.len() + boundaries.len());
        for (i, entry) in entries.iter().enumerate() {
            for &(boundary, heading) in &boundaries {
                if i == boundary {
                    rows.push(HomeRow::heading(heading));
                }
            }
            rows.push(self.compute_home_row(entry, i == self.home_index));
        }
        rows
    }

    fn compute_home_row(&self, entry: &HomeEntry, is_selected: bool) -> HomeRow {
        match entry {
            HomeEntry::Category(category) => {
                let count = self
                    .catalog
                    .recipes()
                    .iter()
                    .filter(|r| r.category == *category)
                    .count();
                HomeRow::entry(category.label(), format!("{count}"), is_selected)
            }
            HomeEntry::Quick(link) => HomeRow::entry(link.label(), String::new(), is_selected),
            HomeEntry::Recipe(id) => {
                let (name, detail) = self.catalog.get(id).map_or_else(
                    || (id.clone(), String::new()),
                    |r| (r.name.clone(), r.category.label().to_string()),
                );
                HomeRow {
                    label: name,
                    detail,
                    is_selected,
                    is_heading: false,
                    is_favorite: self.favorites.is_favorite(id),
                }
            }
        }
    }

    fn compute_list_rows(&self, rows: usize, cols: usize) -> Vec<ListRow> {
        let available = rows.saturating_sub(CHROME_ROWS).max(1);

        // Window centered on the selection, shifted back at the edges so the
        // screen stays full whenever enough recipes exist.
        let mut start = self.selected_index.saturating_sub(available / 2);
        let end = (start + available).min(self.filtered_recipes.len());
        if end - start < available && self.filtered_recipes.len() >= available {
            start = end.saturating_sub(available);
        }

        self.filtered_recipes[start..end]
            .iter()
            .enumerate()
            .map(|(i, recipe)| self.compute_list_row(recipe, start + i == self.selected_index, cols))
            .collect()
    }

    fn compute_list_row(&self, recipe: &Recipe, is_selected: bool, cols: usize) -> ListRow {
        let meta = format!(
            "{} · {} · {} min · {}",
            recipe.category,
            recipe.cuisine,
            recipe.active_minutes(),
            recipe.difficulty
        );

        let max_name = cols.saturating_sub(meta.len() + 8).max(10);
        let name = if recipe.name.chars().count() > max_name {
            let truncated: String = recipe.name.chars().take(max_name.saturating_sub(3)).collect();
            format!("{truncated}...")
        } else {
            recipe.name.clone()
        };

        let highlight_ranges = if self.filters.query.trim().is_empty() {
            vec![]
        } else {
            match_ranges(&name, &self.filters.query)
        };

        ListRow {
            name,
            meta,
            is_selected,
            is_favorite: self.favorites.is_favorite(&recipe.id),
            is_curated: recipe.is_favorite,
            highlight_ranges,
        }
    }

    fn compute_filter_panel(&self) -> FilterPanelView {
        let rows = self.filter_rows();
        let mut panel_rows = Vec::with_capacity(rows.len() + 5);
        let mut last_group = "";

        for (i, row) in rows.iter().enumerate() {
            let (group, label, is_active) = match row {
                FilterRow::Type(c) => ("Type", c.label().to_string(), self.filters.types.contains(c)),
                FilterRow::Cuisine(c) => ("Cuisine", c.clone(), self.filters.cuisines.contains(c)),
                FilterRow::Difficulty(d) => (
                    "Difficulty",
                    d.label().to_string(),
                    self.filters.difficulties.contains(d),
                ),
                FilterRow::CookMethod(m) => (
                    "Cook method",
                    m.label().to_string(),
                    self.filters.cook_methods.contains(m),
                ),
                FilterRow::Dietary(d) => (
                    "Dietary",
                    d.label().to_string(),
                    self.filters.dietary.contains(d),
                ),
            };

            if group != last_group {
                panel_rows.push(FilterPanelRow::heading(group));
                last_group = group;
            }

            panel_rows.push(FilterPanelRow {
                label,
                is_heading: false,
                is_active,
                is_cursor: i == self.filter_index,
            });
        }

        FilterPanelView {
            rows: panel_rows,
            active_count: self.filters.active_count(),
        }
    }

    fn compute_detail(&self, recipe: &Recipe) -> DetailView {
        let mut lines = Vec::new();

        if let Some(description) = &recipe.description {
            lines.push(DetailLine::Text(description.clone()));
        }
        if let Some(attribution) = &recipe.attribution {
            lines.push(DetailLine::Text(format!("from {attribution}")));
        }
        lines.push(DetailLine::Blank);

        lines.push(DetailLine::Section("Ingredients".to_string()));
        let mut last_section: Option<&str> = None;
        for ingredient in &recipe.ingredients {
            if ingredient.section.as_deref() != last_section {
                if let Some(section) = &ingredient.section {
                    lines.push(DetailLine::Section(format!("  {section}")));
                }
                last_section = ingredient.section.as_deref();
            }

            let mut text = ingredient.amount.to_string();
            if !ingredient.unit.is_empty() {
                text.push(' ');
                text.push_str(&ingredient.unit);
            }
            text.push(' ');
            text.push_str(&ingredient.item);
            if let Some(prep) = &ingredient.preparation {
                text.push_str(", ");
                text.push_str(prep);
            }
            if ingredient.is_optional == Some(true) {
                text.push_str(" (optional)");
            }
            if let Some(substitution) = &ingredient.substitution {
                text.push_str(&format!(" (or: {substitution})"));
            }
            lines.push(DetailLine::Ingredient(text));

            if let Some(fragments) = &ingredient.split_usage {
                for fragment in fragments {
                    lines.push(DetailLine::Text(format!(
                        "    {} for the {}",
                        fragment.amount, fragment.step
                    )));
                }
            }
        }

        lines.push(DetailLine::Blank);
        lines.push(DetailLine::Section("Instructions".to_string()));
        for (i, step) in recipe.instructions.iter().enumerate() {
            lines.push(DetailLine::Step(i + 1, step.clone()));
        }

        if let Some(equipment) = &recipe.equipment {
            lines.push(DetailLine::Blank);
            lines.push(DetailLine::Section("Equipment".to_string()));
            for item in equipment {
                lines.push(DetailLine::Ingredient(item.clone()));
            }
        }

        if let Some(notes) = &recipe.notes {
            lines.push(DetailLine::Blank);
            lines.push(DetailLine::Section("Notes".to_string()));
            lines.push(DetailLine::Text(notes.clone()));
        }

        let meta = format!(
            "{} · {} · {} · prep {} min · cook {} min · total {} min · serves {}",
            recipe.category,
            recipe.cuisine,
            recipe.difficulty,
            recipe.prep_time,
            recipe.cook_time,
            recipe.total_time,
            recipe.servings
        );

        DetailView {
            title: recipe.name.clone(),
            meta,
            is_favorite: self.favorites.is_favorite(&recipe.id),
            keep_awake: self.keep_awake,
            lines,
            scroll: self.detail_scroll,
        }
    }
}

/// Rows consumed by header, footer, search bar, and padding.
const CHROME_ROWS: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
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

    #[test]
    fn home_cursor_cycles_through_entries() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let len = state.home_entries().len();
        assert!(len > 1);

        state.move_up();
        assert_eq!(state.home_index, len - 1, "wraps backwards from the top");
        state.move_down();
        assert_eq!(state.home_index, 0, "wraps forwards past the end");
        state.move_down();
        assert_eq!(state.home_index, 1);
    }

    #[test]
    fn index_cursor_cycles_through_filtered_recipes() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.screen = Screen::Index;
        let len = state.filtered_recipes.len();

        for _ in 0..len {
            state.move_down();
        }
        assert_eq!(state.selected_index, 0, "full loop returns to the start");
        state.move_up();
        assert_eq!(state.selected_index, len - 1);
    }

    #[test]
    fn filter_panel_cursor_cycles_through_rows() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.screen = Screen::Index;
        state.input_mode = InputMode::Filters;
        let len = state.filter_rows().len();

        state.move_down();
        assert_eq!(state.filter_index, 1);
        state.move_up();
        state.move_up();
        assert_eq!(state.filter_index, len - 1);
    }

    #[test]
    fn open_recipe_scrolls_instead_of_moving_cursors() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.screen = Screen::Index;
        let recipe = state.filtered_recipes[0].clone();
        state.open_modal(recipe);

        state.move_down();
        state.move_down();
        assert_eq!(state.detail_scroll, 2);
        assert_eq!(state.selected_index, 0, "list cursor is untouched");

        state.move_up();
        state.move_up();
        state.move_up();
        assert_eq!(state.detail_scroll, 0, "scroll saturates at zero");
    }
}
