//! Database access layer for MealKeep
//!
//! One table: `favorites`. Created idempotently at startup; no migration
//! framework is needed for a single immutable schema.

pub mod init;
pub mod models;

pub use init::init_database;
pub use models::Favorite;
