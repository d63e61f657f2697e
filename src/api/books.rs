use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Response,
};

use super::extract::{ResourceId, ValidatedJson};
use super::response::envelope;
use crate::domain::{Book, CreateBookInput, DomainError, UpdateBookInput};
use crate::infrastructure::AppState;
use crate::services;

#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookInput,
    responses(
        (status = 201, description = "Book created with its authors and editorial, wrapped in {statusCode, message, data}", body = Book),
        (status = 400, description = "Invalid payload, or one or more authors not found"),
        (status = 404, description = "Editorial not found")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBookInput>,
) -> Result<Response, DomainError> {
    let book = services::create_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        input,
    )
    .await?;

    Ok(envelope(StatusCode::CREATED, "Book created successfully.", book))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses((status = 200, description = "All books with authors and editorial", body = [Book]))
)]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, DomainError> {
    Ok(Json(services::list_books(state.book_repo.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book with authors and editorial", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Book>, DomainError> {
    Ok(Json(services::get_book(state.book_repo.as_ref(), id).await?))
}

#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    request_body = UpdateBookInput,
    responses(
        (status = 200, description = "Book updated, wrapped in {statusCode, message, data}", body = Book),
        (status = 400, description = "Invalid payload, or one or more authors not found"),
        (status = 404, description = "Book or editorial not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(input): ValidatedJson<UpdateBookInput>,
) -> Result<Response, DomainError> {
    let book = services::update_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        id,
        input,
    )
    .await?;

    Ok(envelope(StatusCode::OK, "Book updated successfully.", book))
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<StatusCode, DomainError> {
    services::delete_book(state.book_repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
