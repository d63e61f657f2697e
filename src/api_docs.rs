use crate::api;
use crate::domain::{
    Author, Book, CreateAuthorInput, CreateBookInput, CreateEditorialInput, Editorial,
    UpdateAuthorInput, UpdateBookInput, UpdateEditorialInput,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::author::create_author,
        api::author::list_authors,
        api::author::get_author,
        api::author::update_author,
        api::author::delete_author,
        api::editorial::create_editorial,
        api::editorial::list_editorials,
        api::editorial::get_editorial,
        api::editorial::update_editorial,
        api::editorial::delete_editorial,
        api::books::create_book,
        api::books::list_books,
        api::books::get_book,
        api::books::update_book,
        api::books::delete_book,
    ),
    components(
        schemas(
            Author,
            Editorial,
            Book,
            CreateAuthorInput,
            UpdateAuthorInput,
            CreateEditorialInput,
            UpdateEditorialInput,
            CreateBookInput,
            UpdateBookInput,
        )
    ),
    tags(
        (name = "authors", description = "Catalog authors"),
        (name = "editorials", description = "Publishers"),
        (name = "books", description = "Books with their authors and editorial"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
