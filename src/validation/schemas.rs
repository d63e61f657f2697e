//! Field rules for each request payload.
//!
//! Create and update payloads share one schema per resource; only the
//! treatment of absent fields differs.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::*;
use super::{Mode, Schema, Validate, date};
use crate::domain::{
    CreateAuthorInput, CreateBookInput, CreateEditorialInput, UpdateAuthorInput, UpdateBookInput,
    UpdateEditorialInput,
};

pub const NATIONAL_ID_DIGITS: &str = "nationalId must contain only digits";
pub const NATIONAL_ID_LENGTH: &str = "nationalId must be between 7 and 8 digits long";
pub const TAX_ID_FORMAT: &str = "taxId must follow the format NN-NNNNNNNN-N";

static TAX_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{7,8}-[0-9]$").expect("valid regex"));

static AUTHOR: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("firstName", vec![is_string()])
        .field("lastName", vec![is_string()])
        .field(
            "nationalId",
            vec![
                is_string(),
                digits_only(NATIONAL_ID_DIGITS),
                length(7, 8, NATIONAL_ID_LENGTH),
            ],
        )
        .field("nationality", vec![is_string()])
});

static EDITORIAL: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("name", vec![is_string()])
        .field("address", vec![is_string()])
        .field("taxId", vec![is_string(), matches(&TAX_ID, TAX_ID_FORMAT)])
});

static BOOK: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field("authorNames", vec![is_array(), each_string()])
        .field("editorialId", vec![is_number(), is_integer()])
        .field("title", vec![is_string()])
        .field("category", vec![is_string()])
        .field("price", vec![is_number(), non_negative()])
        .field("releaseDate", vec![is_string(), date_shape(), calendar_date()])
        .field("description", vec![is_string()])
});

fn normalized_date(value: &str) -> Result<String, Vec<String>> {
    date::normalize_release_date(value).map_err(|e| vec![format!("releaseDate: {}", e)])
}

impl Validate for CreateAuthorInput {
    const MODE: Mode = Mode::Create;

    fn schema() -> &'static Schema {
        &AUTHOR
    }
}

impl Validate for UpdateAuthorInput {
    const MODE: Mode = Mode::Partial;

    fn schema() -> &'static Schema {
        &AUTHOR
    }
}

impl Validate for CreateEditorialInput {
    const MODE: Mode = Mode::Create;

    fn schema() -> &'static Schema {
        &EDITORIAL
    }
}

impl Validate for UpdateEditorialInput {
    const MODE: Mode = Mode::Partial;

    fn schema() -> &'static Schema {
        &EDITORIAL
    }
}

impl Validate for CreateBookInput {
    const MODE: Mode = Mode::Create;

    fn schema() -> &'static Schema {
        &BOOK
    }

    fn normalize(mut self) -> Result<Self, Vec<String>> {
        self.release_date = normalized_date(&self.release_date)?;
        Ok(self)
    }
}

impl Validate for UpdateBookInput {
    const MODE: Mode = Mode::Partial;

    fn schema() -> &'static Schema {
        &BOOK
    }

    fn normalize(mut self) -> Result<Self, Vec<String>> {
        if let Some(raw) = self.release_date.take() {
            self.release_date = Some(normalized_date(&raw)?);
        }
        Ok(self)
    }
}
