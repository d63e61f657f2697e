//! Editorial Service - Pure business logic without HTTP layer

use crate::domain::{
    CreateEditorialInput, DomainError, Editorial, EditorialRepository, NewEditorial,
    UpdateEditorialInput,
};

pub const EDITORIAL_NOT_FOUND: &str = "Editorial not found.";
pub const DUPLICATE_EDITORIAL: &str = "An editorial with this tax id already exists.";

/// Create an editorial unless its tax id is taken
pub async fn create_editorial(
    repo: &dyn EditorialRepository,
    input: CreateEditorialInput,
) -> Result<Editorial, DomainError> {
    if repo.find_by_tax_id(&input.tax_id, None).await?.is_some() {
        tracing::warn!("Rejected editorial: tax id {} already registered", input.tax_id);
        return Err(DomainError::Conflict(DUPLICATE_EDITORIAL.into()));
    }

    let editorial = repo
        .create(NewEditorial {
            name: input.name,
            address: input.address,
            tax_id: input.tax_id,
        })
        .await
        .map_err(|e| e.with_conflict_message(DUPLICATE_EDITORIAL))?;

    tracing::info!("Created editorial {} ({})", editorial.id, editorial.name);
    Ok(editorial)
}

pub async fn list_editorials(repo: &dyn EditorialRepository) -> Result<Vec<Editorial>, DomainError> {
    repo.find_all().await
}

pub async fn get_editorial(repo: &dyn EditorialRepository, id: i32) -> Result<Editorial, DomainError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(EDITORIAL_NOT_FOUND.into()))
}

/// Merge the provided fields onto an editorial
pub async fn update_editorial(
    repo: &dyn EditorialRepository,
    id: i32,
    input: UpdateEditorialInput,
) -> Result<Editorial, DomainError> {
    let mut editorial = get_editorial(repo, id).await?;

    if let Some(name) = input.name {
        editorial.name = name;
    }
    if let Some(address) = input.address {
        editorial.address = address;
    }
    if let Some(tax_id) = input.tax_id {
        if repo.find_by_tax_id(&tax_id, Some(id)).await?.is_some() {
            tracing::warn!("Rejected update of editorial {}: tax id {} taken", id, tax_id);
            return Err(DomainError::Conflict(DUPLICATE_EDITORIAL.into()));
        }
        editorial.tax_id = tax_id;
    }

    let editorial = repo
        .save(editorial)
        .await
        .map_err(|e| e.with_conflict_message(DUPLICATE_EDITORIAL))?;

    tracing::info!("Updated editorial {}", editorial.id);
    Ok(editorial)
}

pub async fn delete_editorial(repo: &dyn EditorialRepository, id: i32) -> Result<(), DomainError> {
    if repo.delete(id).await? == 0 {
        return Err(DomainError::NotFound(EDITORIAL_NOT_FOUND.into()));
    }

    tracing::info!("Deleted editorial {}", id);
    Ok(())
}
