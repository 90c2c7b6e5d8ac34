//! Tests for database initialization

use mealkeep_common::db::init::{init_database, init_memory_database};

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("mealkeep.db");
    assert!(!db_path.exists());

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("mealkeep.db");

    let pool1 = init_database(&db_path).await.expect("first init");
    pool1.close().await;

    // Second init is idempotent (CREATE TABLE IF NOT EXISTS)
    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
}

#[tokio::test]
async fn test_favorites_schema_exists() {
    let pool = init_memory_database().await.expect("memory db");

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'favorites'",
    )
    .fetch_one(&pool)
    .await
    .expect("schema query");

    assert_eq!(count, 1, "favorites table should exist");
}

#[tokio::test]
async fn test_unique_pair_constraint() {
    let pool = init_memory_database().await.expect("memory db");

    let insert = "INSERT OR IGNORE INTO favorites (user_id, recipe_id, title) VALUES (?, ?, ?)";

    sqlx::query(insert)
        .bind("u1")
        .bind(52i64)
        .bind("Teriyaki Chicken")
        .execute(&pool)
        .await
        .expect("first insert");

    // Second insert of the same pair is ignored, not duplicated
    sqlx::query(insert)
        .bind("u1")
        .bind(52i64)
        .bind("Teriyaki Chicken")
        .execute(&pool)
        .await
        .expect("second insert");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
        .fetch_one(&pool)
        .await
        .expect("count");

    assert_eq!(count, 1, "duplicate (user_id, recipe_id) must not create a second row");
}
