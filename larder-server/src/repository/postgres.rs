//! PostgreSQL recipe store
//!
//! Every operation is a single statement, so each write is atomic on its own.

use async_trait::async_trait;
use larder_core::domain::recipe::Recipe;
use larder_core::dto::recipe::RecipeSearch;
use sqlx::PgPool;

use super::recipe::{RecipeStore, StoreError};

/// Recipe store backed by the `recipes` table
#[derive(Debug, Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn create(&self, recipe: &Recipe) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO recipes (id, name, type, script, creator, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&recipe.id)
        .bind(&recipe.name)
        .bind(&recipe.recipe_type)
        .bind(&recipe.script)
        .bind(&recipe.creator)
        .bind(&recipe.tags)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            let duplicate = err
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if duplicate {
                StoreError::Conflict(recipe.id.clone())
            } else {
                StoreError::from(err)
            }
        })?;

        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Recipe, StoreError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, name, type, script, creator, tags
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Recipe::from)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, StoreError> {
        // creator is never part of the SET list
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            UPDATE recipes
            SET name = $1, type = $2, script = $3, tags = $4
            WHERE id = $5
            RETURNING id, name, type, script, creator, tags
            "#,
        )
        .bind(&recipe.name)
        .bind(&recipe.recipe_type)
        .bind(&recipe.script)
        .bind(&recipe.tags)
        .bind(&recipe.id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Recipe::from)
            .ok_or(StoreError::NotFound(recipe.id))
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn search(
        &self,
        caller: &str,
        search: &RecipeSearch,
    ) -> Result<Vec<Recipe>, StoreError> {
        // tags @> '{}' holds for every row, so an empty tag filter matches all
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, name, type, script, creator, tags
            FROM recipes
            WHERE creator = $1
              AND tags @> $2::TEXT[]
              AND ($3::TEXT IS NULL OR type = $3::TEXT)
            ORDER BY seq ASC
            OFFSET $4
            LIMIT $5
            "#,
        )
        .bind(caller)
        .bind(&search.tags)
        .bind(&search.recipe_type)
        .bind(to_sql_bound(search.skip_count))
        .bind(to_sql_bound(search.max_items))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }
}

fn to_sql_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: String,
    name: String,
    #[sqlx(rename = "type")]
    recipe_type: String,
    script: String,
    creator: String,
    tags: Vec<String>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            name: row.name,
            recipe_type: row.recipe_type,
            script: row.script,
            creator: row.creator,
            tags: row.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use larder_core::id;

    /// Connects to `DATABASE_URL` and bootstraps the schema
    async fn connect() -> PgRecipeStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.unwrap();
        db::ensure_schema(&pool).await.unwrap();
        PgRecipeStore::new(pool)
    }

    fn recipe(creator: &str, name: &str, recipe_type: &str, tags: &[&str]) -> Recipe {
        Recipe {
            id: id::recipe_id(),
            name: name.to_string(),
            recipe_type: recipe_type.to_string(),
            script: "FROM x".to_string(),
            creator: creator.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn names(recipes: Vec<Recipe>) -> Vec<String> {
        recipes.into_iter().map(|r| r.name).collect()
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
    async fn test_search_filters_and_paginates_in_postgres() {
        let store = connect().await;
        // a fresh creator keeps earlier runs out of the results
        let caller = id::generate("user", 12);
        let other = id::generate("user", 12);

        for (creator, name, recipe_type, tags) in [
            (caller.as_str(), "ab", "dockerfile", &["a", "b"][..]),
            (caller.as_str(), "a", "dockerfile", &["a"][..]),
            (caller.as_str(), "abc", "compose", &["a", "b", "c"][..]),
            (other.as_str(), "other", "dockerfile", &["a", "b"][..]),
        ] {
            store
                .create(&recipe(creator, name, recipe_type, tags))
                .await
                .unwrap();
        }

        let search = |tags: &[&str], recipe_type: Option<&str>, skip, max| {
            RecipeSearch::new(
                tags.iter().map(|t| t.to_string()).collect(),
                recipe_type.map(str::to_string),
                skip,
                max,
            )
        };

        let all = store
            .search(&caller, &search(&[], None, None, None))
            .await
            .unwrap();
        assert_eq!(names(all), vec!["ab", "a", "abc"]);

        let both_tags = store
            .search(&caller, &search(&["a", "b"], None, None, None))
            .await
            .unwrap();
        assert_eq!(names(both_tags), vec!["ab", "abc"]);

        let by_type = store
            .search(&caller, &search(&[], Some("dockerfile"), None, None))
            .await
            .unwrap();
        assert_eq!(names(by_type), vec!["ab", "a"]);

        let tags_and_type = store
            .search(&caller, &search(&["a", "b"], Some("compose"), None, None))
            .await
            .unwrap();
        assert_eq!(names(tags_and_type), vec!["abc"]);

        let window = store
            .search(&caller, &search(&[], None, Some(1), Some(1)))
            .await
            .unwrap();
        assert_eq!(names(window), vec!["a"]);

        let past_end = store
            .search(&caller, &search(&[], None, Some(3), None))
            .await
            .unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
    async fn test_crud_roundtrip_in_postgres() {
        let store = connect().await;
        let caller = id::generate("user", 12);
        let created = recipe(&caller, "r1", "dockerfile", &["ci"]);

        store.create(&created).await.unwrap();
        assert!(matches!(
            store.create(&created).await,
            Err(StoreError::Conflict(_))
        ));
        assert_eq!(store.get_by_id(&created.id).await.unwrap(), created);

        let replacement = Recipe {
            name: "r2".to_string(),
            creator: "mallory".to_string(),
            tags: vec![],
            ..created.clone()
        };
        let updated = store.update(replacement).await.unwrap();
        assert_eq!(updated.name, "r2");
        assert_eq!(updated.creator, caller);
        assert!(updated.tags.is_empty());

        store.remove(&created.id).await.unwrap();
        assert!(matches!(
            store.get_by_id(&created.id).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.remove(&created.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_sql_bounds_saturate() {
        assert_eq!(to_sql_bound(0), 0);
        assert_eq!(to_sql_bound(30), 30);
        assert_eq!(to_sql_bound(usize::MAX), i64::MAX);
    }

    #[test]
    fn test_pool_timeout_maps_to_timeout() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Timeout
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        ));
    }
}
