use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use brei_core::{IngredientRow, RecipeView};

use crate::error::ApiError;
use crate::routes::api::RecipeResponse;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/recipes", post(create_recipe))
        .route("/api/recipes/{name}", put(update_quantities))
}

/// A number field as sent by a form: either a JSON number or the typed text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn to_raw(&self) -> String {
        match self {
            RawNumber::Number(n) => n.to_string(),
            RawNumber::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewIngredient {
    #[serde(default)]
    pub name: String,
    pub menge: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<NewIngredient>,
}

#[derive(Serialize)]
struct CreateRecipeResponse {
    status: &'static str,
    name: String,
    message: String,
}

/// POST /api/recipes - Add a new recipe from form rows.
async fn create_recipe(
    State(state): State<AppState>,
    Json(req): Json<CreateRecipeRequest>,
) -> Response {
    let rows: Vec<IngredientRow> = req
        .ingredients
        .iter()
        .map(|i| {
            IngredientRow::new(
                i.name.clone(),
                i.menge.as_ref().map(RawNumber::to_raw).unwrap_or_default(),
            )
        })
        .collect();

    let mut recipes = state.recipes.write().await;
    if let Err(e) = recipes.add_rows(&req.name, &rows) {
        return ApiError::from(e).into_response();
    }

    let name = req.name.trim().to_string();
    (
        StatusCode::CREATED,
        Json(CreateRecipeResponse {
            status: "created",
            message: format!("Rezept \"{}\" wurde erfolgreich hinzugefügt", name),
            name,
        }),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantitiesRequest {
    /// New per-portion quantities, by ingredient position.
    #[serde(default)]
    pub quantities: Vec<RawNumber>,
    pub portions: Option<RawNumber>,
}

/// PUT /api/recipes/:name - Edit per-portion quantities and return the new totals.
async fn update_quantities(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<UpdateQuantitiesRequest>,
) -> Response {
    let mut recipes = state.recipes.write().await;

    let mut view = RecipeView::closed();
    if !view.show(&recipes, &name) {
        return ApiError::not_found(&name).into_response();
    }
    for (index, quantity) in req.quantities.iter().enumerate() {
        view.edit_quantity(index, &quantity.to_raw());
    }
    if let Some(portions) = &req.portions {
        view.set_portions(&portions.to_raw());
    }

    if let Err(e) = view.commit(&mut recipes) {
        return ApiError::from(e).into_response();
    }

    Json(RecipeResponse {
        portions: view.portions(),
        ingredients: view.totals(),
        name,
    })
    .into_response()
}
