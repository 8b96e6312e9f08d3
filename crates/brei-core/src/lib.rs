//! Brei Core - Recipe store, portion scaling and storage traits.
//!
//! This crate holds the domain logic of the Brei recipe manager. It has no
//! dependencies on other Brei crates.

pub mod book;
pub mod defaults;
pub mod error;
pub mod ingredient;
pub mod scale;
pub mod storage;
pub mod view;

// Re-exports for convenience
pub use book::{RecipeMap, RecipeStore};
pub use defaults::default_recipes;
pub use error::{CoreError, StorageError, ValidationError};
pub use ingredient::{collect_ingredients, Ingredient, IngredientRow};
pub use scale::{format_total, scale, scale_raw};
pub use storage::{KvStore, RECIPES_KEY};
pub use view::{scaled_ingredients, RecipeView, ScaledIngredient};

#[cfg(any(test, feature = "test-utils"))]
pub use storage::memory::InMemoryKvStore;
