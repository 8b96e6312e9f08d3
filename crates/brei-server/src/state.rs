use std::sync::Arc;

use tokio::sync::RwLock;

use brei_core::{KvStore, RecipeStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<RwLock<RecipeStore>>,
}

impl AppState {
    pub fn new(recipes: RecipeStore) -> Self {
        Self {
            recipes: Arc::new(RwLock::new(recipes)),
        }
    }

    /// Load the recipes from `backend` and wrap them for sharing.
    pub fn load(backend: Arc<dyn KvStore>) -> Self {
        Self::new(RecipeStore::load(backend))
    }
}
