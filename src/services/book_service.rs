//! Book Service - Pure business logic without HTTP layer
//!
//! Books reference their authors by full name and their editorial by id.
//! Both are resolved into stored records before anything is written.

use crate::domain::{
    Author, AuthorRepository, Book, BookChanges, BookRepository, CreateBookInput, DomainError,
    Editorial, EditorialRepository, NewBook, UpdateBookInput,
};

use super::editorial_service::EDITORIAL_NOT_FOUND;

pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const AUTHORS_NOT_FOUND: &str = "One or more authors not found.";

/// Resolve every name with one lookup. An empty list, an unknown name or a
/// repeated name all leave the counts unequal and are rejected.
async fn resolve_authors(
    repo: &dyn AuthorRepository,
    names: &[String],
) -> Result<Vec<Author>, DomainError> {
    let authors = repo.find_by_full_names(names).await?;

    if authors.is_empty() || authors.len() != names.len() {
        tracing::warn!(
            "Resolved {} of {} author names {:?}",
            authors.len(),
            names.len(),
            names
        );
        return Err(DomainError::BadRequest(AUTHORS_NOT_FOUND.into()));
    }

    Ok(authors)
}

async fn resolve_editorial(
    repo: &dyn EditorialRepository,
    id: i32,
) -> Result<Editorial, DomainError> {
    repo.find_by_id(id).await?.ok_or_else(|| {
        tracing::warn!("Editorial {} referenced by a book does not exist", id);
        DomainError::NotFound(EDITORIAL_NOT_FOUND.into())
    })
}

/// Create a book linked to existing authors and an existing editorial
pub async fn create_book(
    books: &dyn BookRepository,
    authors: &dyn AuthorRepository,
    editorials: &dyn EditorialRepository,
    input: CreateBookInput,
) -> Result<Book, DomainError> {
    let resolved = resolve_authors(authors, &input.author_names).await?;
    let editorial = resolve_editorial(editorials, input.editorial_id).await?;

    let book = books
        .create(NewBook {
            title: input.title,
            category: input.category,
            price: input.price,
            release_date: input.release_date,
            description: input.description,
            author_ids: resolved.iter().map(|a| a.id).collect(),
            editorial_id: editorial.id,
        })
        .await?;

    tracing::info!(
        "Created book {} '{}' with {} author(s)",
        book.id,
        book.title,
        book.authors.len()
    );
    Ok(book)
}

/// List all books with authors and editorial
pub async fn list_books(books: &dyn BookRepository) -> Result<Vec<Book>, DomainError> {
    let books = books.find_all().await?;
    tracing::debug!("Returning {} books", books.len());
    Ok(books)
}

/// Get a single book by ID
pub async fn get_book(books: &dyn BookRepository, id: i32) -> Result<Book, DomainError> {
    books
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(BOOK_NOT_FOUND.into()))
}

/// Merge the provided fields onto a book. Author names and the editorial id,
/// when present, are resolved with the same rules as on creation.
pub async fn update_book(
    books: &dyn BookRepository,
    authors: &dyn AuthorRepository,
    editorials: &dyn EditorialRepository,
    id: i32,
    input: UpdateBookInput,
) -> Result<Book, DomainError> {
    get_book(books, id).await?;

    let author_ids: Option<Vec<i32>> = match &input.author_names {
        Some(names) => Some(
            resolve_authors(authors, names)
                .await?
                .iter()
                .map(|a| a.id)
                .collect(),
        ),
        None => None,
    };

    let editorial_id = match input.editorial_id {
        Some(editorial_id) => Some(resolve_editorial(editorials, editorial_id).await?.id),
        None => None,
    };

    let book = books
        .update(
            id,
            BookChanges {
                title: input.title,
                category: input.category,
                price: input.price,
                release_date: input.release_date,
                description: input.description,
                author_ids,
                editorial_id,
            },
        )
        .await?;

    tracing::info!("Updated book {}", book.id);
    Ok(book)
}

/// Delete a book by ID; its author links go with it
pub async fn delete_book(books: &dyn BookRepository, id: i32) -> Result<(), DomainError> {
    if books.delete(id).await? == 0 {
        return Err(DomainError::NotFound(BOOK_NOT_FOUND.into()));
    }

    tracing::info!("Deleted book {}", id);
    Ok(())
}
