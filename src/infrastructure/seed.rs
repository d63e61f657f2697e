//! Demo catalog, created through the services so it obeys every rule.
//! Running it twice is harmless.

use crate::domain::{CreateAuthorInput, CreateBookInput, CreateEditorialInput, DomainError};
use crate::infrastructure::AppState;
use crate::services;
use crate::validation::date;

const DEMO_TAX_ID: &str = "20-12345678-9";
const DEMO_AUTHOR: &str = "Gabriel García Márquez";
const DEMO_TITLE: &str = "Cien Años de Soledad";

pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    let editorial = match state.editorial_repo.find_by_tax_id(DEMO_TAX_ID, None).await? {
        Some(editorial) => editorial,
        None => {
            services::create_editorial(
                state.editorial_repo.as_ref(),
                CreateEditorialInput {
                    name: "Editorial Sudamericana".to_owned(),
                    address: "Humberto Primo 555, Capital Federal".to_owned(),
                    tax_id: DEMO_TAX_ID.to_owned(),
                },
            )
            .await?
        }
    };

    let known = state
        .author_repo
        .find_by_full_names(&[DEMO_AUTHOR.to_owned()])
        .await?;
    if known.is_empty() {
        let created = services::create_author(
            state.author_repo.as_ref(),
            CreateAuthorInput {
                first_name: "Gabriel".to_owned(),
                last_name: "García Márquez".to_owned(),
                national_id: "12345678".to_owned(),
                nationality: "Colombiana".to_owned(),
            },
        )
        .await;
        if let Err(DomainError::Conflict(message)) = &created {
            tracing::warn!("Skipping demo author: {}", message);
        } else {
            created?;
        }
    }

    let books = services::list_books(state.book_repo.as_ref()).await?;
    if books.iter().any(|b| b.title == DEMO_TITLE) {
        return Ok(());
    }

    let release_date = date::normalize_release_date("30/05/1967")
        .map_err(|e| DomainError::Validation(vec![e.to_string()]))?;

    services::create_book(
        state.book_repo.as_ref(),
        state.author_repo.as_ref(),
        state.editorial_repo.as_ref(),
        CreateBookInput {
            author_names: vec![DEMO_AUTHOR.to_owned()],
            editorial_id: editorial.id,
            title: DEMO_TITLE.to_owned(),
            category: "Novela".to_owned(),
            price: 20000.0,
            release_date,
            description: "La historia de la familia Buendía en Macondo.".to_owned(),
        },
    )
    .await?;

    Ok(())
}
