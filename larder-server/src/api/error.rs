//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::repository::StoreError;
use crate::service::recipe_service::RecipeError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Conflict(String),
    Unavailable(String),
    DatabaseError(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unavailable(msg) => {
                tracing::warn!("Store unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::Validation(err) => ApiError::BadRequest(err.to_string()),
            RecipeError::NotFound(id) => ApiError::NotFound(format!("Recipe {} not found", id)),
            RecipeError::Store(err) => err.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(format!("Recipe {} not found", id)),
            StoreError::Conflict(id) => {
                ApiError::Conflict(format!("Recipe {} already exists", id))
            }
            StoreError::Timeout => ApiError::Unavailable("Recipe store timed out".to_string()),
            StoreError::Database(err) => ApiError::DatabaseError(err),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::validation::{RequiredField, ValidationError};

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_recipe_errors_map_to_status() {
        assert_eq!(
            status_of(RecipeError::Validation(ValidationError::MissingField(
                RequiredField::Name
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(RecipeError::NotFound("recipeX".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(RecipeError::Store(StoreError::Conflict("recipeX".to_string()))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(RecipeError::Store(StoreError::Timeout)),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(StoreError::Database(sqlx::Error::PoolClosed)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
