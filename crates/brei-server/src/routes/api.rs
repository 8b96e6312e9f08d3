use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use brei_core::scale::{format_total, parse_portions, scale_raw};
use brei_core::{scaled_ingredients, ScaledIngredient};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/recipes", get(list_recipes))
        .route("/api/recipes/{name}", get(get_recipe))
        .route("/api/scale", get(get_scale))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
struct RecipeListResponse {
    recipes: Vec<String>,
}

/// GET /api/recipes?q=... - Recipe names matching the search term, alphabetically.
async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<RecipeListResponse> {
    let recipes = state.recipes.read().await.search(&query.q).into_keys().collect();
    Json(RecipeListResponse { recipes })
}

#[derive(Debug, Deserialize)]
pub struct PortionsQuery {
    pub portions: Option<String>,
}

/// A recipe with its totals for a given number of portions.
#[derive(Serialize)]
pub struct RecipeResponse {
    pub name: String,
    pub portions: f64,
    pub ingredients: Vec<ScaledIngredient>,
}

/// GET /api/recipes/:name?portions=... - One recipe, scaled.
async fn get_recipe(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PortionsQuery>,
) -> Response {
    let portions = parse_portions(query.portions.as_deref().unwrap_or_default());
    let recipes = state.recipes.read().await;

    match recipes.get(&name) {
        Some(ingredients) => Json(RecipeResponse {
            ingredients: scaled_ingredients(ingredients, portions),
            name,
            portions,
        })
        .into_response(),
        None => ApiError::not_found(&name).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct ScaleQuery {
    #[serde(default)]
    pub menge: String,
    #[serde(default)]
    pub portions: String,
}

#[derive(Serialize)]
struct ScaleResponse {
    total: f64,
    display: String,
}

/// GET /api/scale?menge=...&portions=... - Scale a single raw quantity.
async fn get_scale(Query(query): Query<ScaleQuery>) -> Json<ScaleResponse> {
    let total = scale_raw(&query.menge, &query.portions);
    Json(ScaleResponse {
        total,
        display: format_total(total),
    })
}
