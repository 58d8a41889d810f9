//! Recipe Service
//!
//! Business logic for the recipe lifecycle: id allocation, creator
//! attribution, whole-record updates and searches scoped to the caller.
//! Every function is a stateless step against the store it is handed.

use larder_core::domain::recipe::Recipe;
use larder_core::dto::recipe::{NewRecipe, RecipeSearch, RecipeUpdate};
use larder_core::id;
use thiserror::Error;

use crate::repository::{RecipeStore, StoreError};
use crate::service::validation::{self, ValidationError};

/// Service error type
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Recipe {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for RecipeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => RecipeError::NotFound(id),
            other => RecipeError::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

/// Raw script of a recipe together with its exact encoded size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeScript {
    pub content: Vec<u8>,
    /// Byte length of `content`, for an explicit Content-Length
    pub length: usize,
}

impl RecipeScript {
    fn from_script(script: String) -> Self {
        let content = script.into_bytes();
        let length = content.len();
        Self { content, length }
    }
}

/// Create a new recipe owned by `caller`
pub async fn create_recipe(
    store: &dyn RecipeStore,
    req: Option<NewRecipe>,
    caller: &str,
) -> Result<Recipe> {
    let valid = validation::validate_for_create(req)?;

    let recipe = Recipe {
        id: id::recipe_id(),
        name: valid.name,
        recipe_type: valid.recipe_type,
        script: valid.script,
        creator: caller.to_string(),
        tags: valid.tags,
    };

    store.create(&recipe).await?;

    tracing::info!(
        "Recipe created: {} ({}) by {}",
        recipe.name,
        recipe.id,
        recipe.creator
    );

    Ok(recipe)
}

/// Get a recipe by ID
pub async fn get_recipe(store: &dyn RecipeStore, id: &str) -> Result<Recipe> {
    let recipe = store.get_by_id(id).await?;
    Ok(recipe)
}

/// Get the script of a recipe as bytes
pub async fn get_script(store: &dyn RecipeStore, id: &str) -> Result<RecipeScript> {
    let recipe = store.get_by_id(id).await?;
    Ok(RecipeScript::from_script(recipe.script))
}

/// Search the recipes visible to `caller`
pub async fn search_recipes(
    store: &dyn RecipeStore,
    caller: &str,
    search: &RecipeSearch,
) -> Result<Vec<Recipe>> {
    let recipes = store.search(caller, search).await?;

    tracing::debug!(
        "Search by {} (tags: {:?}, type: {:?}, skip: {}, max: {}) matched {} recipe(s)",
        caller,
        search.tags,
        search.recipe_type,
        search.skip_count,
        search.max_items,
        recipes.len()
    );

    Ok(recipes)
}

/// Replace a recipe, keeping its original creator
pub async fn update_recipe(store: &dyn RecipeStore, req: Option<RecipeUpdate>) -> Result<Recipe> {
    let valid = validation::validate_for_update(req)?;

    let existing = store.get_by_id(&valid.id).await?;

    let replacement = Recipe {
        id: existing.id,
        name: valid.name,
        recipe_type: valid.recipe_type,
        script: valid.script,
        creator: existing.creator,
        tags: valid.tags,
    };

    let updated = store.update(replacement).await?;

    tracing::info!("Recipe updated: {} ({})", updated.name, updated.id);

    Ok(updated)
}

/// Delete a recipe
///
/// Deleting an unknown id is an error, not a no-op.
pub async fn remove_recipe(store: &dyn RecipeStore, id: &str) -> Result<()> {
    store.remove(id).await?;

    tracing::info!("Recipe deleted: {}", id);

    Ok(())
}
