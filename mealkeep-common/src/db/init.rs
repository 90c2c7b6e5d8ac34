//! Database initialization
//!
//! Creates the database file on first run and the favorites schema if it
//! does not exist. Safe to call on every startup.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    // Wait briefly on lock contention instead of failing immediately
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_favorites_table(&pool).await?;

    Ok(pool)
}

/// Create the favorites table
///
/// (user_id, recipe_id) is UNIQUE so re-favoriting the same recipe cannot
/// create duplicate rows; the insert path relies on INSERT OR IGNORE.
async fn create_favorites_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            recipe_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            image TEXT,
            cook_time TEXT,
            servings TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE(user_id, recipe_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Connect to an in-memory database with the full schema, for tests
pub async fn init_memory_database() -> Result<SqlitePool> {
    // A single connection that is never recycled, so the in-memory
    // database survives for the life of the pool.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    create_favorites_table(&pool).await?;

    Ok(pool)
}
