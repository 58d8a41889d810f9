//! Recipe API Handlers
//!
//! HTTP endpoints for the recipe collection. Handlers extract the caller,
//! call into the recipe service and wrap results in descriptors with links.

use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use larder_core::domain::recipe::Recipe;
use larder_core::dto::recipe::{
    NewRecipe, RecipeDescriptor, RecipeSearch, RecipeUpdate, ServiceDescriptor,
};
use larder_core::links;
use serde::Deserialize;

use crate::api::AppState;
use crate::api::body::JsonBody;
use crate::api::error::ApiResult;
use crate::api::identity::CallerIdentity;
use crate::service::recipe_service;

/// POST /api/recipe
/// Create a new recipe owned by the caller
pub async fn create_recipe(
    State(state): State<AppState>,
    caller: CallerIdentity,
    req: JsonBody<NewRecipe>,
) -> ApiResult<(StatusCode, Json<RecipeDescriptor>)> {
    tracing::info!("Creating recipe for {}", caller.as_str());

    let recipe = recipe_service::create_recipe(
        state.store.as_ref(),
        req.into_inner(),
        caller.as_str(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(state.describe(recipe))))
}

/// GET /api/recipe/{id}
/// Get recipe by ID
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeDescriptor>> {
    tracing::debug!("Getting recipe: {}", id);

    let recipe = recipe_service::get_recipe(state.store.as_ref(), &id).await?;

    Ok(Json(state.describe(recipe)))
}

/// GET /api/recipe/{id}/script
/// Get the raw script with an explicit Content-Length
///
/// Some consumers (docker builds among them) cannot read a script sent with
/// chunked transfer encoding, so the length is always set.
pub async fn get_recipe_script(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    tracing::debug!("Getting script of recipe: {}", id);

    let script = recipe_service::get_script(state.store.as_ref(), &id).await?;
    let length = script.length;

    let mut response = Body::from(script.content).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));

    Ok(response)
}

/// GET /api/recipe
/// Search the caller's recipes
///
/// Query parameters:
/// - `tags` (repeatable): every tag must be present
/// - `type`: exact type match
/// - `skipCount` (default 0), `maxItems` (default 30): pagination window
pub async fn search_recipes(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<RecipeDescriptor>>> {
    let search = RecipeSearch::new(
        params.tags,
        params.recipe_type,
        params.skip_count,
        params.max_items,
    );

    let recipes =
        recipe_service::search_recipes(state.store.as_ref(), caller.as_str(), &search).await?;

    Ok(Json(
        recipes
            .into_iter()
            .map(|recipe| state.describe(recipe))
            .collect(),
    ))
}

/// PUT /api/recipe
/// Replace an existing recipe
pub async fn update_recipe(
    State(state): State<AppState>,
    req: JsonBody<RecipeUpdate>,
) -> ApiResult<Json<RecipeDescriptor>> {
    tracing::info!(
        "Updating recipe: {}",
        req.0
            .as_ref()
            .and_then(|req| req.id.as_deref())
            .unwrap_or("<none>")
    );

    let recipe =
        recipe_service::update_recipe(state.store.as_ref(), req.into_inner()).await?;

    Ok(Json(state.describe(recipe)))
}

/// DELETE /api/recipe/{id}
/// Delete a recipe
pub async fn remove_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting recipe: {}", id);

    recipe_service::remove_recipe(state.store.as_ref(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// OPTIONS /api/recipe
/// Describe the collection-level actions of this service
pub async fn describe_service(State(state): State<AppState>) -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        href: state.base_uri.to_string(),
        description: "Recipe REST API".to_string(),
        links: links::compose_service(&state.base_uri),
    })
}

impl AppState {
    fn describe(&self, recipe: Recipe) -> RecipeDescriptor {
        let links = links::compose(&recipe.id, &self.base_uri);
        RecipeDescriptor::assemble(recipe, links)
    }
}

// =============================================================================
// Request Types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub recipe_type: Option<String>,
    pub skip_count: Option<usize>,
    pub max_items: Option<usize>,
}
