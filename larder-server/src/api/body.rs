//! Optional JSON request bodies
//!
//! Create and update accept a body that may be absent. A request without a
//! Content-Type, an empty body and a literal `null` all arrive as `None`, so
//! the validator reports the missing request instead of the extractor.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;

/// JSON body that is `None` when the client sent no request
#[derive(Debug)]
pub struct JsonBody<T>(pub Option<T>);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let has_content_type = req.headers().contains_key(header::CONTENT_TYPE);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        if !has_content_type || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(None));
        }

        let Json(value) = Json::<Option<T>>::from_bytes(&bytes)
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}
