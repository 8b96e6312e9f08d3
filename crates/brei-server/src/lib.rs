//! Brei Server - Axum server for browsing, scaling and adding recipes.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;
