//! Catalog records as the services and the API see them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{author, book, editorial};

/// Derived uniqueness key of an author.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name).trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Gabriel")]
    pub first_name: String,
    #[schema(example = "García Márquez")]
    pub last_name: String,
    #[schema(example = "Gabriel García Márquez")]
    pub full_name: String,
    #[schema(example = "12345678")]
    pub national_id: String,
    #[schema(example = "Colombiana")]
    pub nationality: String,
}

impl From<author::Model> for Author {
    fn from(model: author::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            full_name: model.full_name,
            national_id: model.national_id,
            nationality: model.nationality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Editorial Sudamericana")]
    pub name: String,
    #[schema(example = "Humberto Primo 555, Capital Federal")]
    pub address: String,
    #[schema(example = "20-12345678-9")]
    pub tax_id: String,
}

impl From<editorial::Model> for Editorial {
    fn from(model: editorial::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            tax_id: model.tax_id,
        }
    }
}

/// A book with both relations populated.
///
/// `editorial` is `None` only when the referenced editorial was deleted after
/// the book was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Cien Años de Soledad")]
    pub title: String,
    #[schema(example = "Novela")]
    pub category: String,
    #[schema(example = 20000.0)]
    pub price: f64,
    #[schema(example = "2024-11-18T00:00:00.000Z")]
    pub release_date: String,
    pub description: String,
    pub authors: Vec<Author>,
    pub editorial: Option<Editorial>,
}

impl Book {
    pub fn from_parts(
        model: book::Model,
        authors: Vec<author::Model>,
        editorial: Option<editorial::Model>,
    ) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category,
            price: model.price,
            release_date: model.release_date,
            description: model.description,
            authors: authors.into_iter().map(Author::from).collect(),
            editorial: editorial.map(Editorial::from),
        }
    }
}
