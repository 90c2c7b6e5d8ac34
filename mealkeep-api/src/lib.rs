//! mealkeep-api library - Favorites HTTP service
//!
//! Persists per-user recipe favorites and serves them over a small JSON
//! API. All state lives in the SQLite pool handed to [`AppState`]; there
//! is no global connection.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// CORS is permissive: the mobile client calls from emulator/device
/// origins that cannot be enumerated ahead of time.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post};

    Router::new()
        .route("/api/health", get(api::health_check))
        .route("/api/favorites", post(api::add_favorite))
        .route("/api/favorites/:user_id/:recipe_id", delete(api::remove_favorite))
        .route("/api/favorites/:user_id", get(api::list_favorites))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
