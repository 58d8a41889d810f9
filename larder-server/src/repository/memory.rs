//! In-memory recipe store
//!
//! Used when no database is configured and by the test suites. Recipes are
//! kept in creation order, which is the ordering search paginates over.

use async_trait::async_trait;
use larder_core::domain::recipe::Recipe;
use larder_core::dto::recipe::RecipeSearch;
use tokio::sync::RwLock;

use super::recipe::{RecipeStore, StoreError};

/// Recipe store backed by a vector behind an async lock
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn create(&self, recipe: &Recipe) -> Result<(), StoreError> {
        let mut recipes = self.recipes.write().await;

        if recipes.iter().any(|r| r.id == recipe.id) {
            return Err(StoreError::Conflict(recipe.id.clone()));
        }

        recipes.push(recipe.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Recipe, StoreError> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut recipes = self.recipes.write().await;

        let stored = recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or_else(|| StoreError::NotFound(recipe.id.clone()))?;

        let creator = std::mem::take(&mut stored.creator);
        *stored = Recipe { creator, ..recipe };

        Ok(stored.clone())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut recipes = self.recipes.write().await;

        let index = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        // remove, not swap_remove: creation order must survive
        recipes.remove(index);
        Ok(())
    }

    async fn search(
        &self,
        caller: &str,
        search: &RecipeSearch,
    ) -> Result<Vec<Recipe>, StoreError> {
        let recipes = self.recipes.read().await;

        Ok(recipes
            .iter()
            .filter(|r| r.creator == caller && search.matches(r))
            .skip(search.skip_count)
            .take(search.max_items)
            .cloned()
            .collect())
    }
}
