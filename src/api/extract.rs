//! Axum extractors that reject bad input with the catalog's error envelope

use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::Value;

use crate::domain::DomainError;
use crate::validation::{self, Validate};

/// JSON body that has passed its schema and been normalized.
///
/// ```rust,ignore
/// pub async fn create_author(
///     ValidatedJson(input): ValidatedJson<CreateAuthorInput>,
/// ) -> Result<Response, DomainError> { ... }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Validate + Send,
{
    type Rejection = DomainError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| DomainError::Validation(vec![rejection.body_text()]))?;

        validation::parse(payload).map(ValidatedJson)
    }
}

/// Numeric `:id` path segment.
pub struct ResourceId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = DomainError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| DomainError::Validation(vec!["id must be an integer".to_string()]))?;

        Ok(ResourceId(id))
    }
}
