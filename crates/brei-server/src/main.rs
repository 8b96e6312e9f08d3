use std::sync::Arc;

use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brei_db::{init_database, RedbKvStore};
use brei_server::{routes, AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: BREI_LISTEN_ADDR, BREI_DB_PATH, BREI_STATIC_DIR");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Brei server");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Database path: {}", config.db_path.display());

    // Initialize database
    let db = match init_database(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::load(Arc::new(RedbKvStore::new(db)));
    tracing::info!("{} recipes available", state.recipes.read().await.len());

    // Build router
    let app =
        routes::create_router(state).nest_service("/static", ServeDir::new(&config.static_dir));

    // Start server
    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server running at http://{}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
