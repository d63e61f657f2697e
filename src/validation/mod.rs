//! Declarative request validation
//!
//! A [`Schema`] maps each field name to an ordered list of rules. Every rule
//! of every field is evaluated and all failures are collected, so a client
//! sees each problem with its payload in a single response.

pub mod date;
pub mod rules;
pub mod schemas;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::DomainError;

/// A single predicate over a field value, producing a message on failure.
pub type Rule = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Whether absent fields are errors (create) or simply skipped (update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Partial,
}

struct FieldSchema {
    name: &'static str,
    rules: Vec<Rule>,
}

#[derive(Default)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldSchema { name, rules });
        self
    }

    /// Validate `payload`, returning every failure message in field order.
    pub fn validate(&self, payload: &Value, mode: Mode) -> Result<(), Vec<String>> {
        let Some(object) = payload.as_object() else {
            return Err(vec!["Request body must be a JSON object".to_string()]);
        };

        let mut errors = Vec::new();
        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if mode == Mode::Create {
                        errors.push(format!("{} is required", field.name));
                    }
                }
                Some(value) => {
                    errors.extend(field.rules.iter().filter_map(|rule| rule(field.name, value).err()));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// A request payload with a validation schema.
pub trait Validate: DeserializeOwned {
    const MODE: Mode;

    fn schema() -> &'static Schema;

    /// Post-validation rewriting of field values into their canonical form.
    fn normalize(self) -> Result<Self, Vec<String>> {
        Ok(self)
    }
}

/// Validate a raw JSON payload and turn it into `T`.
pub fn parse<T: Validate>(payload: Value) -> Result<T, DomainError> {
    T::schema()
        .validate(&payload, T::MODE)
        .map_err(DomainError::Validation)?;

    let input: T = serde_json::from_value(payload)
        .map_err(|e| DomainError::Validation(vec![e.to_string()]))?;

    input.normalize().map_err(DomainError::Validation)
}

#[cfg(test)]
mod tests {
    use super::rules::{is_number, is_string};
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new()
            .field("name", vec![is_string()])
            .field("price", vec![is_number()])
    }

    #[test]
    fn collects_every_failure() {
        let errors = schema()
            .validate(&json!({"name": 5, "price": "free"}), Mode::Create)
            .unwrap_err();
        assert_eq!(errors, vec!["name must be a string", "price must be a number"]);
    }

    #[test]
    fn missing_fields_only_fail_on_create() {
        let errors = schema().validate(&json!({}), Mode::Create).unwrap_err();
        assert_eq!(errors, vec!["name is required", "price is required"]);

        assert!(schema().validate(&json!({}), Mode::Partial).is_ok());
        assert!(schema().validate(&json!({"name": null}), Mode::Partial).is_ok());
    }

    #[test]
    fn partial_mode_still_checks_present_fields() {
        let errors = schema()
            .validate(&json!({"price": "x"}), Mode::Partial)
            .unwrap_err();
        assert_eq!(errors, vec!["price must be a number"]);
    }

    #[test]
    fn rejects_non_object_payloads() {
        let errors = schema().validate(&json!([1, 2]), Mode::Create).unwrap_err();
        assert_eq!(errors, vec!["Request body must be a JSON object"]);
    }
}
