//! HTTP API handlers for mealkeep-api

pub mod favorites;
pub mod health;

pub use favorites::{add_favorite, list_favorites, remove_favorite};
pub use health::health_check;
