//! Database models

use serde::{Deserialize, Serialize};

/// A saved association between a user and a recipe
///
/// Display fields (title, image, cook_time, servings) are denormalized
/// copies taken from the recipe catalog at save time and never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "recipeId")]
    pub recipe_id: i64,
    pub title: String,
    pub image: Option<String>,
    #[serde(rename = "cookTime")]
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::NaiveDateTime,
}
