//! Application error type and its HTTP representation.
//!
//! Every error returned to a client has the shape
//!
//! ```json
//! { "message": "Contact not found", "code": "not_found" }
//! ```
//!
//! Validation errors additionally carry a `details` object keyed by field name.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

/// Name of the unique constraint guarding `contacts.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "contacts_email_key";

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Shorthand for the 404 every contact lookup shares.
    pub fn contact_not_found(id: i64) -> Self {
        Self::not_found("Contact not found", json!({ "id": id }))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, details) = match self {
            // Only validation details help the client fix its request.
            AppError::Validation { message, details } => (message, details),
            AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => (message, Value::Null),
        };

        let body = ErrorBody {
            message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            let constraint = db.constraint().map(str::to_string);
            tracing::warn!(constraint = ?constraint, "Unique constraint violation");

            let message = if constraint.as_deref() == Some(EMAIL_UNIQUE_CONSTRAINT) {
                "A contact with this email already exists"
            } else {
                "Unique constraint violation"
            };
            return AppError::conflict(message, json!({ "constraint": constraint }));
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.errors().keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();

        let details = serde_json::to_value(&errors).unwrap_or_default();

        AppError::bad_request(format!("Invalid fields: {}", fields.join(", ")), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (status, body) = body_json(AppError::contact_not_found(7)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Contact not found");
        assert_eq!(body["code"], "not_found");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_validation_response_keeps_details() {
        let err = AppError::bad_request("Invalid fields: email", json!({ "email": ["bad"] }));
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "validation_error");
        assert_eq!(body["details"]["email"][0], "bad");
    }

    #[tokio::test]
    async fn test_conflict_and_internal_status() {
        let (status, body) = body_json(AppError::conflict("dup", json!({}))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "dup");

        let (status, body) = body_json(AppError::internal("Database error", json!({}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "internal_error");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::contact_not_found(1);
        assert_eq!(err.to_string(), "Contact not found");
    }

    #[test]
    fn test_sqlx_non_database_error_is_internal() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
