//! Favorites CRUD handlers
//!
//! Each handler performs exactly one statement against the store; there is
//! no multi-statement transaction state to unwind on failure. Store errors
//! are logged here and surfaced as a generic 500 without internal detail.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

use mealkeep_common::db::Favorite;

use crate::AppState;

/// Request body for POST /api/favorites
///
/// All fields are optional at the serde level so that missing required
/// fields produce the API's own 400 rather than a body-rejection error.
/// `recipe_id` accepts either a JSON number or a numeric string, matching
/// what existing clients send.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub user_id: Option<String>,
    pub recipe_id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
}

/// Favorites API errors
#[derive(Debug)]
pub enum FavoriteError {
    MissingFields,
    DatabaseError(String),
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            FavoriteError::MissingFields => {
                (StatusCode::BAD_REQUEST, "Missing required fields".to_string())
            }
            FavoriteError::DatabaseError(msg) => {
                // Log the detail; the caller gets a generic message
                error!("Store error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Coerce a JSON number or numeric string into a recipe id
fn parse_recipe_id(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// POST /api/favorites
///
/// Validates presence of user_id, recipe_id and title only; optional
/// display fields pass through untouched. (user_id, recipe_id) is UNIQUE
/// in the schema, so re-favoriting returns the existing row with 200
/// instead of creating a duplicate; a fresh insert returns 201.
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(req): Json<AddFavoriteRequest>,
) -> Result<Response, FavoriteError> {
    debug!(body = ?req, "Add favorite request");

    let user_id = match req.user_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(FavoriteError::MissingFields),
    };
    let recipe_id = match req.recipe_id.as_ref().and_then(parse_recipe_id) {
        Some(id) => id,
        None => return Err(FavoriteError::MissingFields),
    };
    let title = match req.title.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return Err(FavoriteError::MissingFields),
    };

    let result = sqlx::query(
        r#"
        INSERT OR IGNORE INTO favorites (user_id, recipe_id, title, image, cook_time, servings)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(recipe_id)
    .bind(title)
    .bind(&req.image)
    .bind(&req.cook_time)
    .bind(&req.servings)
    .execute(&state.db)
    .await
    .map_err(|e| FavoriteError::DatabaseError(e.to_string()))?;

    // Echo back the stored row, generated fields included
    let favorite: Favorite = sqlx::query_as(
        "SELECT * FROM favorites WHERE user_id = ? AND recipe_id = ?",
    )
    .bind(user_id)
    .bind(recipe_id)
    .fetch_one(&state.db)
    .await
    .map_err(|e| FavoriteError::DatabaseError(e.to_string()))?;

    let status = if result.rows_affected() == 1 {
        info!(user_id, recipe_id, title, "Saved favorite");
        StatusCode::CREATED
    } else {
        debug!(user_id, recipe_id, "Favorite already present");
        StatusCode::OK
    };

    Ok((status, Json(favorite)).into_response())
}

/// DELETE /api/favorites/:user_id/:recipe_id
///
/// Deletes by exact pair. Deleting zero rows is success; the operation is
/// idempotent.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i64)>,
) -> Result<Json<serde_json::Value>, FavoriteError> {
    let result = sqlx::query("DELETE FROM favorites WHERE user_id = ? AND recipe_id = ?")
        .bind(&user_id)
        .bind(recipe_id)
        .execute(&state.db)
        .await
        .map_err(|e| FavoriteError::DatabaseError(e.to_string()))?;

    info!(
        %user_id,
        recipe_id,
        removed = result.rows_affected(),
        "Remove favorite"
    );

    Ok(Json(json!({ "message": "Favorite removed successfully" })))
}

/// GET /api/favorites/:user_id
///
/// Returns all rows for the user in storage order; an empty list is a
/// valid 200 response.
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Favorite>>, FavoriteError> {
    let favorites: Vec<Favorite> = sqlx::query_as("SELECT * FROM favorites WHERE user_id = ?")
        .bind(&user_id)
        .fetch_all(&state.db)
        .await
        .map_err(|e| FavoriteError::DatabaseError(e.to_string()))?;

    debug!(%user_id, count = favorites.len(), "Fetched favorites");

    Ok(Json(favorites))
}
