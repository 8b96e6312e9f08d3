use serde::Serialize;

use crate::book::RecipeStore;
use crate::error::CoreError;
use crate::ingredient::Ingredient;
use crate::scale::{parse_portions, parse_quantity, scale};

/// One row of the displayed recipe table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub menge: f64,
    pub total: f64,
}

/// Scale every ingredient to `portions` portions.
pub fn scaled_ingredients(ingredients: &[Ingredient], portions: f64) -> Vec<ScaledIngredient> {
    ingredients
        .iter()
        .map(|i| ScaledIngredient {
            name: i.name.clone(),
            menge: i.menge,
            total: scale(i.menge, portions),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct EditRow {
    name: String,
    raw_menge: String,
}

/// The recipe currently being looked at, if any.
///
/// Holds the per-portion quantities as typed, so edits can be shown and
/// scaled before they are written back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeView {
    selected: Option<String>,
    rows: Vec<EditRow>,
    portions: String,
}

impl Default for RecipeView {
    fn default() -> Self {
        Self::closed()
    }
}

impl RecipeView {
    pub fn closed() -> Self {
        Self {
            selected: None,
            rows: Vec::new(),
            portions: "1".to_string(),
        }
    }

    /// Select a recipe. Unknown names leave the view unchanged.
    pub fn show(&mut self, store: &RecipeStore, name: &str) -> bool {
        let Some(ingredients) = store.get(name) else {
            return false;
        };
        self.selected = Some(name.to_string());
        self.rows = ingredients
            .iter()
            .map(|i| EditRow {
                name: i.name.clone(),
                raw_menge: i.menge.to_string(),
            })
            .collect();
        true
    }

    /// Deselect and drop the edit buffer.
    pub fn close(&mut self) {
        self.selected = None;
        self.rows.clear();
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn set_portions(&mut self, raw: &str) {
        self.portions = raw.to_string();
    }

    pub fn portions(&self) -> f64 {
        parse_portions(&self.portions)
    }

    /// Change the typed per-portion quantity of one ingredient.
    /// Returns false if there is no such row.
    pub fn edit_quantity(&mut self, index: usize, raw: &str) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.raw_menge = raw.to_string();
                true
            }
            None => false,
        }
    }

    /// The edit buffer as ingredients; malformed quantities count as 0.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.rows
            .iter()
            .map(|row| Ingredient::new(row.name.clone(), parse_quantity(&row.raw_menge)))
            .collect()
    }

    pub fn totals(&self) -> Vec<ScaledIngredient> {
        scaled_ingredients(&self.ingredients(), self.portions())
    }

    /// Write the edit buffer back to the selected recipe.
    pub fn commit(&self, store: &mut RecipeStore) -> Result<(), CoreError> {
        match &self.selected {
            Some(name) => store.update(name, self.ingredients()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::memory::InMemoryKvStore;

    fn default_store() -> RecipeStore {
        RecipeStore::load(Arc::new(InMemoryKvStore::new()))
    }

    #[test]
    fn test_closed_by_default() {
        let view = RecipeView::default();
        assert!(!view.is_open());
        assert!(view.totals().is_empty());
        assert_eq!(view.portions(), 1.0);
    }

    #[test]
    fn test_show_unknown_recipe() {
        let store = default_store();
        let mut view = RecipeView::closed();

        assert!(!view.show(&store, "Nichtsbrei"));
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_show_and_scale() {
        let store = default_store();
        let mut view = RecipeView::closed();

        assert!(view.show(&store, "Maisbrei"));
        view.set_portions("3");

        let totals = view.totals();
        assert_eq!(totals.len(), 4);
        assert_eq!(totals[0].name, "Wasser (ml)");
        assert_eq!(totals[0].menge, 200.0);
        assert_eq!(totals[0].total, 600.0);
        assert_eq!(totals[3].total, 3.0);
    }

    #[test]
    fn test_invalid_portions_count_as_one() {
        let store = default_store();
        let mut view = RecipeView::closed();
        view.show(&store, "Maisbrei");

        view.set_portions("0");
        assert_eq!(view.totals()[0].total, 200.0);
        view.set_portions("abc");
        assert_eq!(view.totals()[0].total, 200.0);
    }

    #[test]
    fn test_edit_and_commit() {
        let mut store = default_store();
        let mut view = RecipeView::closed();
        view.show(&store, "Kokosbrei");

        assert!(view.edit_quantity(1, "45.5"));
        assert!(view.edit_quantity(2, "nichts"));
        assert!(!view.edit_quantity(99, "1"));
        view.set_portions("2");

        let totals = view.totals();
        assert_eq!(totals[1].total, 91.0);
        assert_eq!(totals[2].total, 0.0);

        view.commit(&mut store).unwrap();
        let ingredients = store.get("Kokosbrei").unwrap();
        assert_eq!(ingredients[1], Ingredient::new("Kokosraspeln (g)", 45.5));
        assert_eq!(ingredients[2], Ingredient::new("Zucker (g)", 0.0));
    }

    #[test]
    fn test_close_clears_buffer() {
        let mut store = default_store();
        let mut view = RecipeView::closed();
        view.show(&store, "Kokosbrei");
        view.edit_quantity(0, "1");

        view.close();

        assert!(!view.is_open());
        assert!(view.totals().is_empty());
        view.commit(&mut store).unwrap();
        assert_eq!(store.get("Kokosbrei").unwrap()[0].menge, 200.0);
    }
}
