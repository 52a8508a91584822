//! Core domain types: the recipe model and error definitions.

pub mod error;
pub mod recipe;

pub use error::{LadleError, Result};
pub use recipe::{
    Amount, Category, CookMethod, Dietary, Difficulty, Ingredient, Recipe, SplitUsage,
    QUICK_MINUTES,
};
