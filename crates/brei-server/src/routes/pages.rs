use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use brei_core::scale::{format_total, parse_portions};
use brei_core::{scaled_ingredients, ScaledIngredient};

use crate::routes::api::{PortionsQuery, SearchQuery};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/recipes/{name}", get(recipe))
}

async fn index(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Html<String> {
    let recipes = state.recipes.read().await;
    let names: Vec<String> = recipes.search(&query.q).into_keys().collect();

    Html(render_index(&names, &query.q))
}

async fn recipe(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PortionsQuery>,
) -> Response {
    let portions = parse_portions(query.portions.as_deref().unwrap_or_default());
    let recipes = state.recipes.read().await;

    match recipes.get(&name) {
        Some(ingredients) => {
            let rows = scaled_ingredients(ingredients, portions);
            Html(render_recipe(&name, portions, &rows)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Html(render_page(
                "Nicht gefunden",
                &format!(
                    r#"<p>Rezept <strong>{}</strong> nicht gefunden.</p>
        <p><a href="/">Zurück zur Übersicht</a></p>"#,
                    escape_html(&name)
                ),
            )),
        )
            .into_response(),
    }
}

fn render_index(names: &[String], search: &str) -> String {
    let grid = if names.is_empty() {
        r#"<div class="no-results">Keine Rezepte gefunden</div>"#.to_string()
    } else {
        names
            .iter()
            .map(|name| {
                format!(
                    r#"<a class="breiItem" href="/recipes/{}" aria-label="Rezept {} anzeigen">{}</a>"#,
                    urlencoding::encode(name),
                    escape_html(name),
                    escape_html(name)
                )
            })
            .collect::<Vec<_>>()
            .join("\n            ")
    };

    let body = format!(
        r#"<form id="search" method="get" action="/">
            <input type="search" name="q" value="{search}" placeholder="Brei suchen" aria-label="Brei suchen">
        </form>

        <section id="breiGrid">
            {grid}
        </section>"#,
        search = escape_html(search),
    );

    render_page("Brei Rezepte", &body)
}

fn render_recipe(name: &str, portions: f64, rows: &[ScaledIngredient]) -> String {
    let table_rows: String = rows
        .iter()
        .map(|row| {
            format!(
                r#"<tr><td>{}</td><td>{}</td><td class="total">{}</td></tr>"#,
                escape_html(&row.name),
                row.menge,
                format_total(row.total)
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let body = format!(
        r#"<section id="recipe">
            <h2 id="recipeName">{name}</h2>
            <form method="get">
                <label for="portions">Portionen</label>
                <input type="number" id="portions" name="portions" value="{portions}" min="1" step="1">
            </form>
            <table>
                <thead><tr><th>Zutat</th><th>Menge pro Portion</th><th>Gesamt</th></tr></thead>
                <tbody id="recipeBody">
                {table_rows}
                </tbody>
            </table>
            <p><a id="closeRecipe" href="/">Schließen</a></p>
        </section>"#,
        name = escape_html(name),
    );

    render_page(name, &body)
}

fn render_page(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <main id="app">
        <h1><a href="/">Brei Rezepte</a></h1>
        {body}
    </main>
</body>
</html>"##,
        title = escape_html(title),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
