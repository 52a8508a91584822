//! Recipe filtering and search.
//!
//! The filter engine is a pure function over the catalog: given the current
//! [`FilterState`] it produces the matching subset, ordered by the fixed
//! category precedence and then by name. It is recomputed synchronously on
//! every parameter change; with a catalog of tens of recipes a linear scan is
//! the whole algorithm.
//!
//! # Matching rules
//!
//! All clauses are ANDed:
//!
//! - a non-empty free-text query matches case-insensitively against name,
//!   description, attribution, tags, cuisine, and ingredient items — except
//!   the special query `"quick"`, which instead matches recipes whose
//!   prep + cook time is at most 30 minutes;
//! - the single category selection requires equality;
//! - the type / cuisine / difficulty sets require membership;
//! - the cook-method set requires a non-empty intersection;
//! - the dietary set requires EVERY selected flag to hold.
//!
//! Empty or unset clauses are skipped entirely.

use crate::domain::{Category, CookMethod, Dietary, Difficulty, Recipe};
use std::collections::HashSet;

/// The current query and structured filter selections.
///
/// Defaults to "everything": empty query, no category, empty sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text query; matched case-insensitively. `"quick"` is special.
    pub query: String,

    /// Single category carried from a Home category tile; `None` means all.
    pub category: Option<Category>,

    pub types: HashSet<Category>,
    pub cuisines: HashSet<String>,
    pub difficulties: HashSet<Difficulty>,
    pub cook_methods: HashSet<CookMethod>,
    pub dietary: HashSet<Dietary>,
}

impl FilterState {
    /// Whether any structured filter set is non-empty (the query and the
    /// category selection are tracked separately in the UI).
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.types.is_empty()
            || !self.cuisines.is_empty()
            || !self.difficulties.is_empty()
            || !self.cook_methods.is_empty()
            || !self.dietary.is_empty()
    }

    /// Count of all active selections, including the query, for badges.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.types.len()
            + self.cuisines.len()
            + self.difficulties.len()
            + self.cook_methods.len()
            + self.dietary.len()
            + usize::from(!self.query.trim().is_empty())
    }

    /// Clears every selection and the query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Returns the recipes matching `filters`, in display order.
///
/// Display order is a stable sort by category precedence (breakfast first,
/// condiment last), then by name ascending within a category. The result
/// borrows from the catalog; nothing is cached.
#[must_use]
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filters: &FilterState) -> Vec<&'a Recipe> {
    let query = filters.query.trim().to_lowercase();

    let mut matched: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| matches(recipe, filters, &query))
        .collect();

    matched.sort_by(|a, b| {
        a.category
            .rank()
            .cmp(&b.category.rank())
            .then_with(|| a.name.cmp(&b.name))
    });

    tracing::debug!(
        total = recipes.len(),
        matched = matched.len(),
        query = %query,
        "filter applied"
    );

    matched
}

fn matches(recipe: &Recipe, filters: &FilterState, query: &str) -> bool {
    if !query.is_empty() && !matches_query(recipe, query) {
        return false;
    }

    if let Some(category) = filters.category {
        if recipe.category != category {
            return false;
        }
    }

    if !filters.types.is_empty() && !filters.types.contains(&recipe.category) {
        return false;
    }

    if !filters.cuisines.is_empty() && !filters.cuisines.contains(&recipe.cuisine) {
        return false;
    }

    if !filters.difficulties.is_empty() && !filters.difficulties.contains(&recipe.difficulty) {
        return false;
    }

    if !filters.cook_methods.is_empty()
        && !recipe
            .cook_method
            .iter()
            .any(|m| filters.cook_methods.contains(m))
    {
        return false;
    }

    // Dietary selections AND together: every chosen flag must hold.
    if !filters.dietary.iter().all(|diet| recipe.satisfies(*diet)) {
        return false;
    }

    true
}

fn matches_query(recipe: &Recipe, query: &str) -> bool {
    if query == "quick" {
        return recipe.is_quick();
    }

    let contains = |text: &str| text.to_lowercase().contains(query);

    contains(&recipe.name)
        || recipe.description.as_deref().is_some_and(contains)
        || recipe.attribution.as_deref().is_some_and(contains)
        || contains(&recipe.cuisine)
        || recipe.tags.iter().any(|tag| contains(tag))
        || recipe.ingredients.iter().any(|ing| contains(&ing.item))
}

/// Byte ranges of `query` occurrences in `text`, case-insensitive.
///
/// Used for highlighting matches in list rows. Returns an empty vector for
/// an empty query or for `"quick"`, which matches on time, not text.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || query == "quick" {
        return vec![];
    }

    let haystack = text.to_lowercase();
    // Lowercasing can change byte lengths for non-ASCII text; only highlight
    // when the mapping is positionally safe.
    if haystack.len() != text.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&query) {
        let start = from + pos;
        ranges.push((start, start + query.len()));
        from = start + query.len().max(1);
    }
    ranges
}

/// Distinct filter option values present in the catalog.
///
/// Drives the filter panel: only values that actually occur are offered.
/// Cuisines are sorted; enum axes follow their natural orders.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub types: Vec<Category>,
    pub cuisines: Vec<String>,
    pub difficulties: Vec<Difficulty>,
    pub cook_methods: Vec<CookMethod>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let present_types: HashSet<Category> = recipes.iter().map(|r| r.category).collect();
        let types = Category::ORDERED
            .iter()
            .copied()
            .filter(|c| present_types.contains(c))
            .collect();

        let mut cuisines: Vec<String> = recipes
            .iter()
            .map(|r| r.cuisine.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        cuisines.sort();

        let present_difficulties: HashSet<Difficulty> =
            recipes.iter().map(|r| r.difficulty).collect();
        let difficulties = Difficulty::ALL
            .iter()
            .copied()
            .filter(|d| present_difficulties.contains(d))
            .collect();

        let present_methods: HashSet<CookMethod> = recipes
            .iter()
            .flat_map(|r| r.cook_method.iter().copied())
            .collect();
        let mut cook_methods: Vec<CookMethod> = present_methods.into_iter().collect();
        cook_methods.sort_by_key(|m| m.label());

        Self {
            types,
            cuisines,
            difficulties,
            cook_methods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Ingredient};
    use chrono::NaiveDate;

    fn recipe(id: &str, name: &str, category: Category) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            attribution: None,
            category,
            cuisine: "american".to_string(),
            is_favorite: false,
            is_vegetarian: false,
            is_vegan: None,
            is_gluten_free: None,
            cook_method: vec![CookMethod::Stovetop],
            prep_time: 10,
            cook_time: 25,
            total_time: 35,
            difficulty: Difficulty::Easy,
            servings: 4,
            ingredients: vec![],
            instructions: vec![],
            notes: None,
            equipment: None,
            tags: vec![],
            created_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    fn sample_catalog() -> Vec<Recipe> {
        let mut eggs = recipe("eggs", "Perfect Scrambled Eggs", Category::Breakfast);
        eggs.prep_time = 2;
        eggs.cook_time = 5;
        eggs.total_time = 7;
        eggs.is_vegetarian = true;
        eggs.is_gluten_free = Some(true);
        eggs.tags = vec!["eggs".into(), "weekday".into()];
        eggs.ingredients = vec![Ingredient {
            amount: Amount::Number(4.0),
            unit: String::new(),
            item: "eggs".into(),
            preparation: None,
            notes: None,
            is_optional: None,
            section: None,
            substitution: None,
            conditional: None,
            split_usage: None,
        }];

        let mut bars = recipe("bars", "Coconut Bars", Category::Dessert);
        bars.prep_time = 15;
        bars.cook_time = 30;
        bars.total_time = 45;
        bars.is_vegetarian = true;
        bars.cuisine = "tropical".into();
        bars.cook_method = vec![CookMethod::Oven];

        let mut stew = recipe("stew", "Beef Stew", Category::Entree);
        stew.cook_method = vec![CookMethod::SlowCooker, CookMethod::Stovetop];
        stew.difficulty = Difficulty::Medium;

        let mut salad = recipe("salad", "Apple Salad", Category::Salad);
        salad.prep_time = 10;
        salad.cook_time = 0;
        salad.total_time = 10;
        salad.is_vegetarian = true;
        salad.is_vegan = Some(true);
        salad.is_gluten_free = Some(true);
        salad.cook_method = vec![CookMethod::NoCook];

        vec![bars, stew, eggs, salad]
    }

    #[test]
    fn empty_filters_return_everything_in_display_order() {
        let catalog = sample_catalog();
        let result = filter_recipes(&catalog, &FilterState::default());
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Perfect Scrambled Eggs", // breakfast
                "Beef Stew",              // entree
                "Apple Salad",            // salad
                "Coconut Bars",           // dessert
            ]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample_catalog();
        let filters = FilterState {
            query: "a".to_string(),
            ..FilterState::default()
        };
        let first: Vec<Recipe> = filter_recipes(&catalog, &filters)
            .into_iter()
            .cloned()
            .collect();
        let second: Vec<&Recipe> = filter_recipes(&first, &filters);
        assert_eq!(first.iter().collect::<Vec<_>>(), second);
    }

    #[test]
    fn quick_query_matches_on_time_only() {
        let catalog = sample_catalog();
        let filters = FilterState {
            query: "quick".to_string(),
            ..FilterState::default()
        };
        let names: Vec<&str> = filter_recipes(&catalog, &filters)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        // Eggs 2+5=7 and salad 10+0=10 qualify; bars 15+30=45 and stew 35 do not.
        assert_eq!(names, vec!["Perfect Scrambled Eggs", "Apple Salad"]);
    }

    #[test]
    fn query_searches_name_tags_cuisine_and_ingredients() {
        let catalog = sample_catalog();
        let query = |q: &str| {
            filter_recipes(
                &catalog,
                &FilterState {
                    query: q.to_string(),
                    ..FilterState::default()
                },
            )
            .iter()
            .map(|r| r.id.clone())
            .collect::<Vec<_>>()
        };

        assert_eq!(query("COCONUT"), vec!["bars"]); // name, case-insensitive
        assert_eq!(query("weekday"), vec!["eggs"]); // tag
        assert_eq!(query("tropical"), vec!["bars"]); // cuisine
        assert!(query("eggs").contains(&"eggs".to_string())); // ingredient item
        assert!(query("zzz").is_empty());
    }

    #[test]
    fn category_selection_is_equality() {
        let catalog = sample_catalog();
        let filters = FilterState {
            category: Some(Category::Dessert),
            ..FilterState::default()
        };
        let names: Vec<&str> = filter_recipes(&catalog, &filters)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Coconut Bars"]);
    }

    #[test]
    fn cook_method_filter_intersects() {
        let catalog = sample_catalog();
        let mut filters = FilterState::default();
        filters.cook_methods.insert(CookMethod::SlowCooker);
        let ids: Vec<&str> = filter_recipes(&catalog, &filters)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["stew"]);
    }

    #[test]
    fn dietary_selections_require_all_flags() {
        let catalog = sample_catalog();
        let mut filters = FilterState::default();
        filters.dietary.insert(Dietary::Vegetarian);
        filters.dietary.insert(Dietary::GlutenFree);

        let ids: Vec<&str> = filter_recipes(&catalog, &filters)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        // Bars are vegetarian but not gluten-free; eggs and salad are both.
        assert_eq!(ids, vec!["eggs", "salad"]);
    }

    #[test]
    fn difficulty_and_type_filters_are_membership() {
        let catalog = sample_catalog();
        let mut filters = FilterState::default();
        filters.difficulties.insert(Difficulty::Medium);
        let ids: Vec<&str> = filter_recipes(&catalog, &filters)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["stew"]);

        let mut filters = FilterState::default();
        filters.types.insert(Category::Salad);
        filters.types.insert(Category::Dessert);
        let ids: Vec<&str> = filter_recipes(&catalog, &filters)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["salad", "bars"]);
    }

    #[test]
    fn same_category_sorts_by_name() {
        let a = recipe("a", "Zucchini Soup", Category::Soup);
        let b = recipe("b", "Avgolemono", Category::Soup);
        let catalog = vec![a, b];
        let names: Vec<&str> = filter_recipes(&catalog, &FilterState::default())
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Avgolemono", "Zucchini Soup"]);
    }

    #[test]
    fn match_ranges_finds_all_occurrences() {
        assert_eq!(match_ranges("Banana Bread", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(match_ranges("Coconut Bars", "BAR"), vec![(8, 11)]);
        assert!(match_ranges("Anything", "").is_empty());
        assert!(match_ranges("Quick Bread", "quick").is_empty());
    }

    #[test]
    fn filter_options_reflect_catalog_contents() {
        let catalog = sample_catalog();
        let options = FilterOptions::from_recipes(&catalog);
        assert_eq!(
            options.types,
            vec![
                Category::Breakfast,
                Category::Entree,
                Category::Salad,
                Category::Dessert
            ]
        );
        assert_eq!(options.cuisines, vec!["american", "tropical"]);
        assert_eq!(
            options.difficulties,
            vec![Difficulty::Easy, Difficulty::Medium]
        );
        assert!(options.cook_methods.contains(&CookMethod::SlowCooker));
    }

    #[test]
    fn active_count_includes_query() {
        let mut filters = FilterState::default();
        assert_eq!(filters.active_count(), 0);
        filters.query = "soup".to_string();
        filters.dietary.insert(Dietary::Vegan);
        assert_eq!(filters.active_count(), 2);
        filters.clear();
        assert_eq!(filters.active_count(), 0);
        assert!(!filters.has_active_filters());
    }
}
