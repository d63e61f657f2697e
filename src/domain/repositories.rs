//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{Author, Book, DomainError, Editorial};

/// Author row to insert; `full_name` is already derived.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub national_id: String,
    pub nationality: String,
}

#[derive(Debug, Clone)]
pub struct NewEditorial {
    pub name: String,
    pub address: String,
    pub tax_id: String,
}

/// Book row to insert with its already-resolved relations.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub release_date: String,
    pub description: String,
    pub author_ids: Vec<i32>,
    pub editorial_id: i32,
}

/// Changes to apply to a stored book. `None` leaves the value as is;
/// `Some(author_ids)` replaces the whole author set.
#[derive(Debug, Clone, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub release_date: Option<String>,
    pub description: Option<String>,
    pub author_ids: Option<Vec<i32>>,
    pub editorial_id: Option<i32>,
}

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find all authors
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    /// Find an author by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError>;

    /// Find any author holding either key, optionally ignoring one record
    async fn find_by_national_id_or_full_name(
        &self,
        national_id: &str,
        full_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Author>, DomainError>;

    /// Find every author whose full name is in `full_names`, in one query
    async fn find_by_full_names(&self, full_names: &[String]) -> Result<Vec<Author>, DomainError>;

    /// Create a new author
    async fn create(&self, author: NewAuthor) -> Result<Author, DomainError>;

    /// Overwrite every mutable column of an existing author
    async fn save(&self, author: Author) -> Result<Author, DomainError>;

    /// Delete an author by ID, returning the number of rows removed
    async fn delete(&self, id: i32) -> Result<u64, DomainError>;
}

/// Repository trait for Editorial entity
#[async_trait]
pub trait EditorialRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Editorial>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Editorial>, DomainError>;

    /// Find the editorial holding `tax_id`, optionally ignoring one record
    async fn find_by_tax_id(
        &self,
        tax_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Editorial>, DomainError>;

    async fn create(&self, editorial: NewEditorial) -> Result<Editorial, DomainError>;

    async fn save(&self, editorial: Editorial) -> Result<Editorial, DomainError>;

    async fn delete(&self, id: i32) -> Result<u64, DomainError>;
}

/// Repository trait for Book entity
///
/// Every book returned carries its authors and editorial.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Insert the book and its author links as one unit
    async fn create(&self, book: NewBook) -> Result<Book, DomainError>;

    /// Apply `changes` to an existing book as one unit
    async fn update(&self, id: i32, changes: BookChanges) -> Result<Book, DomainError>;

    async fn delete(&self, id: i32) -> Result<u64, DomainError>;
}
