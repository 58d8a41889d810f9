//! Caller identity extraction
//!
//! Authentication happens in front of this service; the authenticated user
//! id arrives in the `X-User-Id` header and is handed to the service layer as
//! an explicit argument.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::api::error::ApiError;

/// Header carrying the authenticated user id
pub const CALLER_HEADER: &str = "x-user-id";

/// Identity of the user making the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

impl CallerIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| CallerIdentity(value.to_string()))
            .ok_or_else(|| ApiError::Unauthorized("Caller identity required".to_string()))
    }
}
