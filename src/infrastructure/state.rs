//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{AuthorRepository, BookRepository, EditorialRepository};
use crate::infrastructure::{
    SeaOrmAuthorRepository, SeaOrmBookRepository, SeaOrmEditorialRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Author repository
    pub author_repo: Arc<dyn AuthorRepository>,
    /// Editorial repository
    pub editorial_repo: Arc<dyn EditorialRepository>,
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            author_repo: Arc::new(SeaOrmAuthorRepository::new(db.clone())),
            editorial_repo: Arc::new(SeaOrmEditorialRepository::new(db.clone())),
            book_repo: Arc::new(SeaOrmBookRepository::new(db)),
        }
    }
}
