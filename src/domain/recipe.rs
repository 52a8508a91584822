//! Recipe domain model.
//!
//! Defines [`Recipe`], [`Ingredient`], and the closed vocabularies used by
//! the catalog: [`Category`], [`CookMethod`], [`Difficulty`], and the
//! [`Dietary`] filter axis. Serde attributes mirror the catalog data format
//! (camelCase keys, lowercase enum values), so the embedded JSON deserializes
//! without a translation layer.
//!
//! Recipes are immutable once loaded; nothing in the application mutates a
//! `Recipe` after the catalog is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound, in minutes, for a recipe to count as "quick".
pub const QUICK_MINUTES: u32 = 30;

/// Course classification for a recipe.
///
/// The variant order here is incidental; display ordering is governed by
/// [`Category::rank`], which sorts meal-opening courses first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entree,
    Side,
    Salad,
    Appetizer,
    Dessert,
    Breakfast,
    Snack,
    Soup,
    Beverage,
    Condiment,
}

impl Category {
    /// All categories, in precedence (display) order.
    pub const ORDERED: [Self; 10] = [
        Self::Breakfast,
        Self::Appetizer,
        Self::Entree,
        Self::Side,
        Self::Salad,
        Self::Soup,
        Self::Dessert,
        Self::Beverage,
        Self::Snack,
        Self::Condiment,
    ];

    /// Fixed precedence rank used for result ordering.
    ///
    /// Lower ranks sort first. Every variant appears in [`Self::ORDERED`],
    /// so the fallback rank (one past the end) is unreachable today; it
    /// exists so the ordering stays total if the vocabulary ever grows.
    #[must_use]
    pub fn rank(self) -> usize {
        Self::ORDERED
            .iter()
            .position(|c| *c == self)
            .unwrap_or(Self::ORDERED.len())
    }

    /// Lowercase label matching the data format (e.g. `"entree"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entree => "entree",
            Self::Side => "side",
            Self::Salad => "salad",
            Self::Appetizer => "appetizer",
            Self::Dessert => "dessert",
            Self::Breakfast => "breakfast",
            Self::Snack => "snack",
            Self::Soup => "soup",
            Self::Beverage => "beverage",
            Self::Condiment => "condiment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cooking technique vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CookMethod {
    #[serde(rename = "oven")]
    Oven,
    #[serde(rename = "stovetop")]
    Stovetop,
    #[serde(rename = "grill")]
    Grill,
    #[serde(rename = "microwave")]
    Microwave,
    #[serde(rename = "no-cook")]
    NoCook,
    #[serde(rename = "smoker")]
    Smoker,
    #[serde(rename = "slow cooker")]
    SlowCooker,
    #[serde(rename = "pressure cooker")]
    PressureCooker,
    #[serde(rename = "air fryer")]
    AirFryer,
    #[serde(rename = "griddle")]
    Griddle,
    #[serde(rename = "broiler")]
    Broiler,
}

impl CookMethod {
    /// Label matching the data format (e.g. `"slow cooker"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oven => "oven",
            Self::Stovetop => "stovetop",
            Self::Grill => "grill",
            Self::Microwave => "microwave",
            Self::NoCook => "no-cook",
            Self::Smoker => "smoker",
            Self::SlowCooker => "slow cooker",
            Self::PressureCooker => "pressure cooker",
            Self::AirFryer => "air fryer",
            Self::Griddle => "griddle",
            Self::Broiler => "broiler",
        }
    }
}

impl fmt::Display for CookMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recipe difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dietary filter axis.
///
/// Not a recipe field itself; each variant maps onto one of the three
/// dietary flags on [`Recipe`]. Selecting several in a filter requires ALL
/// of them to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dietary {
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl Dietary {
    pub const ALL: [Self; 3] = [Self::Vegetarian, Self::Vegan, Self::GlutenFree];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten-free",
        }
    }
}

impl fmt::Display for Dietary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ingredient amount: a number or free text such as "to taste".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Trim trailing ".0" so "2" renders as 2, not 2.0.
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A portion of an ingredient used in a specific step.
///
/// Some recipes split a single ingredient across steps (e.g. half the sugar
/// in the crust, half in the topping). Fragments carry the amount and a
/// human-readable step reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitUsage {
    pub amount: Amount,
    pub step: String,
}

/// One entry in a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub amount: Amount,

    /// Unit of measure; empty for unitless items ("2 eggs").
    #[serde(default)]
    pub unit: String,

    /// The ingredient itself; searched by the free-text query.
    pub item: String,

    /// Preparation applied before use ("diced", "softened").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_optional: Option<bool>,

    /// Grouping label when the ingredient list has sections
    /// ("crust" vs "topping"). Ungrouped ingredients leave this unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_usage: Option<Vec<SplitUsage>>,
}

/// An immutable recipe record from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique key across the catalog; favorites reference this.
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Who contributed the recipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,

    /// Course classification; the data format calls this `type`.
    #[serde(rename = "type")]
    pub category: Category,

    pub cuisine: String,

    /// Curated highlight set by the catalog author. Distinct from the
    /// device-local user favorites.
    pub is_favorite: bool,

    pub is_vegetarian: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegan: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_gluten_free: Option<bool>,

    /// Cooking techniques; non-empty for every catalog entry.
    pub cook_method: Vec<CookMethod>,

    /// Minutes of active preparation.
    pub prep_time: u32,

    /// Minutes of cooking.
    pub cook_time: u32,

    /// Minutes start-to-finish as stated by the author. Stored, not derived;
    /// may exceed prep + cook when the recipe has resting or chilling time.
    pub total_time: u32,

    pub difficulty: Difficulty,

    pub servings: u32,

    pub ingredients: Vec<Ingredient>,

    pub instructions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: NaiveDate,
}

impl Recipe {
    /// Active minutes (prep + cook), the value the `"quick"` search tests.
    ///
    /// Deliberately not `total_time`: authors include resting and chilling
    /// in the stated total, which should not disqualify a low-effort recipe.
    #[must_use]
    pub const fn active_minutes(&self) -> u32 {
        self.prep_time + self.cook_time
    }

    /// Whether prep + cook fits within [`QUICK_MINUTES`].
    #[must_use]
    pub const fn is_quick(&self) -> bool {
        self.active_minutes() <= QUICK_MINUTES
    }

    /// Whether a dietary requirement holds for this recipe.
    ///
    /// Absent optional flags count as not satisfying the requirement.
    #[must_use]
    pub fn satisfies(&self, diet: Dietary) -> bool {
        match diet {
            Dietary::Vegetarian => self.is_vegetarian,
            Dietary::Vegan => self.is_vegan.unwrap_or(false),
            Dietary::GlutenFree => self.is_gluten_free.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(id: &str, category: Category) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            attribution: None,
            category,
            cuisine: "american".to_string(),
            is_favorite: false,
            is_vegetarian: false,
            is_vegan: None,
            is_gluten_free: None,
            cook_method: vec![CookMethod::Stovetop],
            prep_time: 5,
            cook_time: 10,
            total_time: 15,
            difficulty: Difficulty::Easy,
            servings: 2,
            ingredients: vec![],
            instructions: vec![],
            notes: None,
            equipment: None,
            tags: vec![],
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn category_rank_follows_precedence_order() {
        assert!(Category::Breakfast.rank() < Category::Appetizer.rank());
        assert!(Category::Appetizer.rank() < Category::Entree.rank());
        assert!(Category::Dessert.rank() < Category::Beverage.rank());
        assert!(Category::Snack.rank() < Category::Condiment.rank());
    }

    #[test]
    fn every_category_has_a_rank() {
        for (i, cat) in Category::ORDERED.iter().enumerate() {
            assert_eq!(cat.rank(), i);
        }
    }

    #[test]
    fn quick_uses_active_minutes_not_stated_total() {
        let mut r = minimal("cheesecake", Category::Dessert);
        r.prep_time = 20;
        r.cook_time = 0;
        r.total_time = 300; // overnight chill
        assert!(r.is_quick());

        r.cook_time = 15;
        assert!(!r.is_quick());
    }

    #[test]
    fn absent_dietary_flags_do_not_satisfy() {
        let mut r = minimal("bread", Category::Side);
        r.is_vegetarian = true;
        assert!(r.satisfies(Dietary::Vegetarian));
        assert!(!r.satisfies(Dietary::Vegan));
        assert!(!r.satisfies(Dietary::GlutenFree));

        r.is_vegan = Some(true);
        assert!(r.satisfies(Dietary::Vegan));
    }

    #[test]
    fn cook_method_labels_round_trip_through_serde() {
        let json = "\"slow cooker\"";
        let method: CookMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method, CookMethod::SlowCooker);
        assert_eq!(serde_json::to_string(&method).unwrap(), json);
    }

    #[test]
    fn amount_renders_whole_numbers_without_fraction() {
        assert_eq!(Amount::Number(2.0).to_string(), "2");
        assert_eq!(Amount::Number(0.5).to_string(), "0.5");
        assert_eq!(Amount::Text("to taste".into()).to_string(), "to taste");
    }
}
