//! Recipe store contract
//!
//! Durable CRUD and search over recipes. Implementations must apply
//! `create`, `update` and `remove` atomically: each either fully happens or
//! fails without a visible partial write.

use async_trait::async_trait;
use larder_core::domain::recipe::Recipe;
use larder_core::dto::recipe::RecipeSearch;
use thiserror::Error;

/// Errors raised by a recipe store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No recipe has this id
    #[error("Recipe {0} not found")]
    NotFound(String),

    /// A recipe with this id already exists
    #[error("Recipe {0} already exists")]
    Conflict(String),

    /// The backend did not answer in time
    #[error("Recipe store timed out")]
    Timeout,

    /// Any other backend failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => StoreError::Timeout,
            other => StoreError::Database(other),
        }
    }
}

/// Store trait for recipe persistence
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persists a new recipe
    ///
    /// Fails with `Conflict` when the id is already taken.
    async fn create(&self, recipe: &Recipe) -> Result<(), StoreError>;

    /// Fetches a recipe by id
    async fn get_by_id(&self, id: &str) -> Result<Recipe, StoreError>;

    /// Replaces the stored recipe with the same id and returns the stored state
    ///
    /// The stored creator is never overwritten.
    async fn update(&self, recipe: Recipe) -> Result<Recipe, StoreError>;

    /// Deletes a recipe by id
    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// Returns the recipes visible to `caller` that match `search`
    ///
    /// A caller sees the recipes they created. Results are in creation order
    /// and limited to the window `[skip_count, skip_count + max_items)`.
    async fn search(&self, caller: &str, search: &RecipeSearch)
    -> Result<Vec<Recipe>, StoreError>;
}
