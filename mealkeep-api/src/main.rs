//! mealkeep-api - Favorites tracking service
//!
//! Persists per-user recipe favorites in SQLite and serves them over a
//! small JSON API for the mobile client.

use anyhow::Result;
use mealkeep_api::{build_router, AppState};
use mealkeep_common::config::ServerConfig;
use mealkeep_common::db::init_database;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting MealKeep API v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::resolve()?;
    info!("Database path: {}", config.database_path.display());

    let pool = match init_database(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("mealkeep-api listening on http://{}", config.bind_addr());
    info!("Health check: http://127.0.0.1:{}/api/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
