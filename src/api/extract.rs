//! Request extractors that report failures as [`AppError`] JSON bodies.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// JSON request body whose rejections become 400 validation errors.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(invalid_body)?;

        Ok(Self(value))
    }
}

impl<T: DeserializeOwned> JsonBody<T> {
    /// Parses a body that was buffered by the handler instead of extracted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        let Json(value) = Json::<T>::from_bytes(bytes).map_err(invalid_body)?;

        Ok(Self(value))
    }
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::bad_request(
        "Request body must be a valid JSON object",
        json!({ "reason": rejection.body_text() }),
    )
}

/// `{id}` path segment of a contact route.
///
/// A segment that is not an integer cannot name a contact, so it is
/// reported as 404 like any other unknown id.
#[derive(Debug, Clone, Copy)]
pub struct ContactId(pub i64);

impl<S> FromRequestParts<S> for ContactId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("Contact not found", json!({})))?;

        Ok(Self(id))
    }
}
