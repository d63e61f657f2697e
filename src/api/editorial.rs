use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Response,
};

use super::extract::{ResourceId, ValidatedJson};
use super::response::envelope;
use crate::domain::{CreateEditorialInput, DomainError, Editorial, UpdateEditorialInput};
use crate::infrastructure::AppState;
use crate::services;

#[utoipa::path(
    post,
    path = "/editorials",
    tag = "editorials",
    request_body = CreateEditorialInput,
    responses(
        (status = 201, description = "Editorial created, wrapped in {statusCode, message, data}", body = Editorial),
        (status = 400, description = "Invalid payload, or tax id already taken")
    )
)]
pub async fn create_editorial(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEditorialInput>,
) -> Result<Response, DomainError> {
    let editorial = services::create_editorial(state.editorial_repo.as_ref(), input).await?;
    Ok(envelope(StatusCode::CREATED, "Editorial created successfully.", editorial))
}

#[utoipa::path(
    get,
    path = "/editorials",
    tag = "editorials",
    responses((status = 200, description = "All editorials", body = [Editorial]))
)]
pub async fn list_editorials(State(state): State<AppState>) -> Result<Json<Vec<Editorial>>, DomainError> {
    Ok(Json(services::list_editorials(state.editorial_repo.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/editorials/{id}",
    tag = "editorials",
    params(("id" = i32, Path, description = "Editorial id")),
    responses(
        (status = 200, description = "The editorial", body = Editorial),
        (status = 404, description = "Editorial not found")
    )
)]
pub async fn get_editorial(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Editorial>, DomainError> {
    Ok(Json(services::get_editorial(state.editorial_repo.as_ref(), id).await?))
}

#[utoipa::path(
    put,
    path = "/editorials/{id}",
    tag = "editorials",
    params(("id" = i32, Path, description = "Editorial id")),
    request_body = UpdateEditorialInput,
    responses(
        (status = 200, description = "Editorial updated, wrapped in {statusCode, message, data}", body = Editorial),
        (status = 400, description = "Invalid payload or duplicate key"),
        (status = 404, description = "Editorial not found")
    )
)]
pub async fn update_editorial(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(input): ValidatedJson<UpdateEditorialInput>,
) -> Result<Response, DomainError> {
    let editorial = services::update_editorial(state.editorial_repo.as_ref(), id, input).await?;
    Ok(envelope(StatusCode::OK, "Editorial updated successfully.", editorial))
}

#[utoipa::path(
    delete,
    path = "/editorials/{id}",
    tag = "editorials",
    params(("id" = i32, Path, description = "Editorial id")),
    responses(
        (status = 204, description = "Editorial deleted"),
        (status = 404, description = "Editorial not found")
    )
)]
pub async fn delete_editorial(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, DomainError> {
    services::delete_editorial(state.editorial_repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
