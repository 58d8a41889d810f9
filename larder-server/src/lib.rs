//! Larder Server
//!
//! HTTP service managing recipes: named, typed scripts owned by the user who
//! created them.
//!
//! Layers, from the outside in:
//! - `api`: axum handlers, caller identity extraction, error mapping
//! - `service`: validation and the recipe lifecycle
//! - `repository`: the `RecipeStore` contract and its backends

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod service;

use std::sync::Arc;

use config::Config;
use repository::{InMemoryRecipeStore, PgRecipeStore, RecipeStore};

/// Open the store selected by the configuration
///
/// PostgreSQL when a database URL is configured, otherwise an in-memory
/// store whose contents are lost on shutdown.
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn RecipeStore>> {
    match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");

            let pool = db::create_pool(config, database_url).await?;
            db::ensure_schema(&pool).await?;

            tracing::info!("Database connection pool created");
            Ok(Arc::new(PgRecipeStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, recipes are kept in memory only");
            Ok(Arc::new(InMemoryRecipeStore::new()))
        }
    }
}
