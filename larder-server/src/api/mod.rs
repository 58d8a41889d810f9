//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific concern.

pub mod body;
pub mod error;
pub mod health;
pub mod identity;
pub mod recipe;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::repository::RecipeStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    /// Absolute URI of the recipe collection, used to build links
    pub base_uri: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>, base_uri: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            base_uri: base_uri.into(),
        }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Recipe endpoints
        .route(
            "/api/recipe",
            post(recipe::create_recipe)
                .get(recipe::search_recipes)
                .put(recipe::update_recipe)
                .options(recipe::describe_service),
        )
        .route(
            "/api/recipe/{id}",
            get(recipe::get_recipe).delete(recipe::remove_recipe),
        )
        .route("/api/recipe/{id}/script", get(recipe::get_recipe_script))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
