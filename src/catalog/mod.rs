//! The fixed recipe catalog.
//!
//! The catalog is an ordered, immutable list of recipes embedded in the
//! binary as JSON and deserialized once at startup. There is no loader
//! surface beyond [`Catalog::load_embedded`]; nothing mutates the catalog at
//! runtime, and all search/filter work borrows from it.

pub mod filter;

use crate::domain::{LadleError, Recipe, Result};
use std::collections::HashSet;

/// Embedded catalog data, compiled into the binary.
const EMBEDDED_RECIPES: &str = include_str!("../../data/recipes.json");

/// The fixed, read-only recipe collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog from an explicit recipe list, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LadleError::Catalog`] when a recipe id repeats or a recipe
    /// declares no cook method. Both indicate broken catalog data, not a
    /// runtime condition.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(LadleError::Catalog(format!(
                    "duplicate recipe id: {}",
                    recipe.id
                )));
            }
            if recipe.cook_method.is_empty() {
                return Err(LadleError::Catalog(format!(
                    "recipe {} has no cook method",
                    recipe.id
                )));
            }
        }

        tracing::debug!(recipe_count = recipes.len(), "catalog built");
        Ok(Self { recipes })
    }

    /// Loads the catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`LadleError::Catalog`] if the embedded JSON does not parse
    /// or fails validation.
    pub fn load_embedded() -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(EMBEDDED_RECIPES)
            .map_err(|e| LadleError::Catalog(format!("failed to parse catalog: {e}")))?;
        Self::new(recipes)
    }

    /// All recipes in catalog order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Looks up a recipe by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes flagged as curated favorites by the catalog author.
    #[must_use]
    pub fn curated_favorites(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_favorite).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CookMethod, Difficulty};
    use chrono::NaiveDate;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            attribution: None,
            category: Category::Entree,
            cuisine: "american".to_string(),
            is_favorite: false,
            is_vegetarian: false,
            is_vegan: None,
            is_gluten_free: None,
            cook_method: vec![CookMethod::Oven],
            prep_time: 10,
            cook_time: 20,
            total_time: 30,
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

    #[test]
    fn embedded_catalog_parses_and_validates() {
        let catalog = Catalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        // Recipes referenced by the documented search examples must exist.
        assert!(catalog.get("perfect-scrambled-eggs").is_some());
        assert!(catalog.get("coconut-bars").is_some());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![recipe("dup"), recipe("dup")]).unwrap_err();
        assert!(err.to_string().contains("duplicate recipe id"));
    }

    #[test]
    fn empty_cook_method_is_rejected() {
        let mut bad = recipe("bad");
        bad.cook_method.clear();
        let err = Catalog::new(vec![bad]).unwrap_err();
        assert!(err.to_string().contains("no cook method"));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(vec![recipe("a"), recipe("b")]).unwrap();
        assert_eq!(catalog.get("b").unwrap().id, "b");
        assert!(catalog.get("missing").is_none());
    }
}
