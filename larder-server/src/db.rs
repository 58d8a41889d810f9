use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::Config;

pub async fn create_pool(config: &Config, database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Create the recipes table and its indexes if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    // seq gives search a stable creation order to paginate over
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recipes (
            seq BIGSERIAL NOT NULL,
            id VARCHAR(64) PRIMARY KEY,
            name TEXT NOT NULL,
            type VARCHAR(255) NOT NULL,
            script TEXT NOT NULL,
            creator VARCHAR(255) NOT NULL,
            tags TEXT[] NOT NULL DEFAULT '{}'
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_creator_seq ON recipes(creator, seq)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_type ON recipes(type)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_tags ON recipes USING GIN (tags)")
        .execute(pool)
        .await?;

    tracing::info!("Recipe schema is ready");
    Ok(())
}
