//! Health check endpoint

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: bool,
    pub module: String,
    pub version: String,
}

/// GET /api/health
///
/// Liveness probe for the mobile client's connection check. No side
/// effects, no failure mode.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: true,
        module: "mealkeep-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
