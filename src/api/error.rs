//! HTTP mapping of domain errors
//!
//! Every error body has the shape `{statusCode, error, message}`. Validation
//! failures carry a list of messages, every other kind a single string.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::domain::DomainError;

impl DomainError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::Validation(_) | DomainError::Conflict(_) | DomainError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message: Value = match self {
            DomainError::Validation(messages) => json!(messages),
            DomainError::Conflict(message)
            | DomainError::BadRequest(message)
            | DomainError::NotFound(message) => json!(message),
            DomainError::Database(detail) => {
                tracing::error!("Database error: {}", detail);
                json!("Internal server error")
            }
        };

        let body = json!({
            "statusCode": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
