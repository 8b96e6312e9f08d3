use std::collections::BTreeMap;
use std::sync::Arc;

use crate::defaults::default_recipes;
use crate::error::{CoreError, StorageError, ValidationError};
use crate::ingredient::{collect_ingredients, Ingredient, IngredientRow};
use crate::storage::{KvStore, RECIPES_KEY};

/// Recipe name to ingredient list. Iterates in alphabetical order.
pub type RecipeMap = BTreeMap<String, Vec<Ingredient>>;

/// The recipe collection, persisted as one JSON blob after every mutation.
///
/// A failed save leaves the in-memory recipes as they are: the mutation is
/// kept and the caller gets [`CoreError::Storage`] so it can tell the user.
pub struct RecipeStore {
    recipes: RecipeMap,
    backend: Arc<dyn KvStore>,
}

impl RecipeStore {
    /// Load recipes from the backend.
    ///
    /// Never fails: missing or unreadable data is replaced by the default
    /// recipes, which are then written back.
    pub fn load(backend: Arc<dyn KvStore>) -> Self {
        let recipes = match read_recipes(backend.as_ref()) {
            Ok(Some(recipes)) => {
                tracing::info!("Loaded {} recipes", recipes.len());
                return Self { recipes, backend };
            }
            Ok(None) => {
                tracing::info!("No stored recipes, installing defaults");
                default_recipes()
            }
            Err(e) => {
                tracing::warn!("Failed to load recipes, using defaults: {}", e);
                default_recipes()
            }
        };

        let store = Self { recipes, backend };
        if let Err(e) = store.save() {
            tracing::error!("Failed to save default recipes: {}", e);
        }
        store
    }

    /// Write the full mapping to the backend.
    pub fn save(&self) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(&self.recipes)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.backend.put(RECIPES_KEY, &bytes)
    }

    /// Add a new recipe.
    ///
    /// The name is trimmed. Ingredients with a blank name or a quantity that
    /// is not a positive number are dropped before the emptiness check.
    pub fn add(&mut self, name: &str, ingredients: Vec<Ingredient>) -> Result<(), CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.recipes.contains_key(name) {
            return Err(ValidationError::DuplicateName(name.to_string()).into());
        }

        let ingredients: Vec<Ingredient> = ingredients
            .into_iter()
            .filter(Ingredient::is_valid)
            .map(|i| Ingredient::new(i.name.trim(), i.menge))
            .collect();
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients.into());
        }

        tracing::info!("Adding recipe {} with {} ingredients", name, ingredients.len());
        self.recipes.insert(name.to_string(), ingredients);
        self.persist()
    }

    /// Add a new recipe from raw form rows.
    pub fn add_rows(&mut self, name: &str, rows: &[IngredientRow]) -> Result<(), CoreError> {
        self.add(name, collect_ingredients(rows))
    }

    /// Overwrite the ingredient list of an existing recipe.
    ///
    /// Quantities that are negative or not finite are stored as 0.
    pub fn update(&mut self, name: &str, ingredients: Vec<Ingredient>) -> Result<(), CoreError> {
        let entry = self
            .recipes
            .get_mut(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;

        *entry = non_negative(ingredients);

        tracing::debug!("Updated recipe {}", name);
        self.persist()
    }

    pub fn get(&self, name: &str) -> Option<&[Ingredient]> {
        self.recipes.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// All recipe names, alphabetically.
    pub fn names(&self) -> Vec<&str> {
        self.recipes.keys().map(String::as_str).collect()
    }

    pub fn recipes(&self) -> &RecipeMap {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes whose name contains `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> RecipeMap {
        if term.is_empty() {
            return self.recipes.clone();
        }
        let term = term.to_lowercase();
        self.recipes
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&term))
            .map(|(name, ingredients)| (name.clone(), ingredients.clone()))
            .collect()
    }

    fn persist(&self) -> Result<(), CoreError> {
        self.save().map_err(|e| {
            tracing::error!("Failed to save recipes: {}", e);
            CoreError::Storage(e)
        })
    }
}

/// Store negative or non-finite quantities as 0.
fn non_negative(ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    ingredients
        .into_iter()
        .map(|mut i| {
            if !(i.menge.is_finite() && i.menge >= 0.0) {
                i.menge = 0.0;
            }
            i
        })
        .collect()
}

fn read_recipes(backend: &dyn KvStore) -> Result<Option<RecipeMap>, StorageError> {
    match backend.get(RECIPES_KEY)? {
        Some(bytes) => {
            let recipes: RecipeMap = serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::Serialization(e.to_string()))?;
            let recipes = recipes
                .into_iter()
                .map(|(name, ingredients)| (name, non_negative(ingredients)))
                .collect();
            Ok(Some(recipes))
        }
        None => Ok(None),
    }
}
