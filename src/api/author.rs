use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Response,
};

use super::extract::{ResourceId, ValidatedJson};
use super::response::envelope;
use crate::domain::{Author, CreateAuthorInput, DomainError, UpdateAuthorInput};
use crate::infrastructure::AppState;
use crate::services;

#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthorInput,
    responses(
        (status = 201, description = "Author created, wrapped in {statusCode, message, data}", body = Author),
        (status = 400, description = "Invalid payload, or national id / full name already taken")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAuthorInput>,
) -> Result<Response, DomainError> {
    let author = services::create_author(state.author_repo.as_ref(), input).await?;
    Ok(envelope(StatusCode::CREATED, "Author created successfully.", author))
}

#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses((status = 200, description = "All authors", body = [Author]))
)]
pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<Author>>, DomainError> {
    Ok(Json(services::list_authors(state.author_repo.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Author>, DomainError> {
    Ok(Json(services::get_author(state.author_repo.as_ref(), id).await?))
}

#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author id")),
    request_body = UpdateAuthorInput,
    responses(
        (status = 200, description = "Author updated, wrapped in {statusCode, message, data}", body = Author),
        (status = 400, description = "Invalid payload or duplicate key"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(input): ValidatedJson<UpdateAuthorInput>,
) -> Result<Response, DomainError> {
    let author = services::update_author(state.author_repo.as_ref(), id, input).await?;
    Ok(envelope(StatusCode::OK, "Author updated successfully.", author))
}

#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, DomainError> {
    services::delete_author(state.author_repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
