use serde::{Deserialize, Serialize};

use crate::scale::parse_decimal;

/// One ingredient of a recipe, with its quantity for a single portion.
///
/// The unit usually lives in the name, e.g. "Wasser (ml)".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Quantity per portion.
    pub menge: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, menge: f64) -> Self {
        Self {
            name: name.into(),
            menge,
        }
    }

    /// Whether this ingredient may be stored in a new recipe.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.menge.is_finite() && self.menge > 0.0
    }
}

/// A raw ingredient row as submitted from the new-recipe form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientRow {
    pub name: String,
    pub menge: String,
}

impl IngredientRow {
    pub fn new(name: impl Into<String>, menge: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            menge: menge.into(),
        }
    }

    /// Turn the row into an ingredient, or `None` if the row is blank,
    /// its quantity is not a number, or the quantity is not positive.
    pub fn to_ingredient(&self) -> Option<Ingredient> {
        let name = self.name.trim();
        let menge = parse_decimal(&self.menge)?;
        let ingredient = Ingredient::new(name, menge);
        ingredient.is_valid().then_some(ingredient)
    }
}

/// Keep only the rows that make a usable ingredient, in submission order.
pub fn collect_ingredients(rows: &[IngredientRow]) -> Vec<Ingredient> {
    rows.iter().filter_map(IngredientRow::to_ingredient).collect()
}
