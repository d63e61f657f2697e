pub mod author;
pub mod books;
pub mod editorial;
pub mod error;
pub mod extract;
pub mod health;
pub mod response;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authors
        .route(
            "/authors",
            get(author::list_authors).post(author::create_author),
        )
        .route(
            "/authors/:id",
            get(author::get_author)
                .put(author::update_author)
                .delete(author::delete_author),
        )
        // Editorials
        .route(
            "/editorials",
            get(editorial::list_editorials).post(editorial::create_editorial),
        )
        .route(
            "/editorials/:id",
            get(editorial::get_editorial)
                .put(editorial::update_editorial)
                .delete(editorial::delete_editorial),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state)
}
