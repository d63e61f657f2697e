//! Request payloads, deserialized only after they pass validation.
//!
//! Create inputs carry every field; update inputs carry the subset the
//! client sent. Absent and null fields are both `None` and leave the stored
//! value untouched.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::rules::is_integral_id;

// JSON clients may send an id as `1.0`; accept any whole number.
fn integral_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let n = f64::deserialize(deserializer)?;
    if is_integral_id(n) {
        Ok(n as i32)
    } else {
        Err(D::Error::custom("expected an integer id"))
    }
}

fn optional_integral_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i32>, D::Error> {
    match Option::<f64>::deserialize(deserializer)? {
        Some(n) if is_integral_id(n) => Ok(Some(n as i32)),
        Some(_) => Err(D::Error::custom("expected an integer id")),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorInput {
    #[schema(example = "Gabriel")]
    pub first_name: String,
    #[schema(example = "García Márquez")]
    pub last_name: String,
    #[schema(example = "12345678")]
    pub national_id: String,
    #[schema(example = "Colombiana")]
    pub nationality: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEditorialInput {
    #[schema(example = "Editorial Sudamericana")]
    pub name: String,
    #[schema(example = "Humberto Primo 555, Capital Federal")]
    pub address: String,
    #[schema(example = "20-12345678-9")]
    pub tax_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEditorialInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookInput {
    /// Full names of existing authors
    #[schema(example = json!(["Gabriel García Márquez"]))]
    pub author_names: Vec<String>,
    #[schema(example = 1)]
    #[serde(deserialize_with = "integral_id")]
    pub editorial_id: i32,
    #[schema(example = "Cien Años de Soledad")]
    pub title: String,
    #[schema(example = "Novela")]
    pub category: String,
    #[schema(example = 20000.0)]
    pub price: f64,
    /// `DD/MM/YYYY` or `DD/MM/YY` on the wire, ISO-8601 once normalized
    #[schema(example = "18/11/2024")]
    pub release_date: String,
    #[schema(example = "Cien Años de Soledad.")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookInput {
    pub author_names: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_integral_id")]
    pub editorial_id: Option<i32>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub release_date: Option<String>,
    pub description: Option<String>,
}
