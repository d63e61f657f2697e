//! Author Service - Pure business logic without HTTP layer
//!
//! Authors are unique by national id and by full name. Both keys are checked
//! before writing so the client gets a clear message; the UNIQUE columns
//! still catch anything that slips past the check concurrently.

use crate::domain::{
    Author, AuthorRepository, CreateAuthorInput, DomainError, NewAuthor, UpdateAuthorInput,
    full_name,
};

pub const AUTHOR_NOT_FOUND: &str = "Author not found.";
pub const DUPLICATE_AUTHOR: &str = "An author with this national id or name already exists.";

/// Create an author, deriving its full name
pub async fn create_author(
    repo: &dyn AuthorRepository,
    input: CreateAuthorInput,
) -> Result<Author, DomainError> {
    let full_name = full_name(&input.first_name, &input.last_name);

    if let Some(existing) = repo
        .find_by_national_id_or_full_name(&input.national_id, &full_name, None)
        .await?
    {
        tracing::warn!(
            "Rejected author '{}': clashes with author {}",
            full_name,
            existing.id
        );
        return Err(DomainError::Conflict(DUPLICATE_AUTHOR.into()));
    }

    let author = repo
        .create(NewAuthor {
            first_name: input.first_name,
            last_name: input.last_name,
            full_name,
            national_id: input.national_id,
            nationality: input.nationality,
        })
        .await
        .map_err(|e| e.with_conflict_message(DUPLICATE_AUTHOR))?;

    tracing::info!("Created author {} ({})", author.id, author.full_name);
    Ok(author)
}

/// List every author
pub async fn list_authors(repo: &dyn AuthorRepository) -> Result<Vec<Author>, DomainError> {
    repo.find_all().await
}

/// Get a single author by ID
pub async fn get_author(repo: &dyn AuthorRepository, id: i32) -> Result<Author, DomainError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(AUTHOR_NOT_FOUND.into()))
}

/// Merge the provided fields onto an author.
///
/// The full name is derived again from the merged names and both uniqueness
/// keys are checked against every other author.
pub async fn update_author(
    repo: &dyn AuthorRepository,
    id: i32,
    input: UpdateAuthorInput,
) -> Result<Author, DomainError> {
    let mut author = get_author(repo, id).await?;

    if let Some(first_name) = input.first_name {
        author.first_name = first_name;
    }
    if let Some(last_name) = input.last_name {
        author.last_name = last_name;
    }
    if let Some(national_id) = input.national_id {
        author.national_id = national_id;
    }
    if let Some(nationality) = input.nationality {
        author.nationality = nationality;
    }
    author.full_name = full_name(&author.first_name, &author.last_name);

    if let Some(existing) = repo
        .find_by_national_id_or_full_name(&author.national_id, &author.full_name, Some(id))
        .await?
    {
        tracing::warn!(
            "Rejected update of author {}: clashes with author {}",
            id,
            existing.id
        );
        return Err(DomainError::Conflict(DUPLICATE_AUTHOR.into()));
    }

    let author = repo
        .save(author)
        .await
        .map_err(|e| e.with_conflict_message(DUPLICATE_AUTHOR))?;

    tracing::info!("Updated author {}", author.id);
    Ok(author)
}

/// Delete an author by ID
pub async fn delete_author(repo: &dyn AuthorRepository, id: i32) -> Result<(), DomainError> {
    if repo.delete(id).await? == 0 {
        return Err(DomainError::NotFound(AUTHOR_NOT_FOUND.into()));
    }

    tracing::info!("Deleted author {}", id);
    Ok(())
}
