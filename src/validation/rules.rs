//! Reusable field rules
//!
//! A rule only judges the aspect it names. Type mismatches are reported by
//! the type rule, so e.g. [`matches`] lets a non-string value through.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::Rule;
use super::date;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Validator: value is a JSON string
pub fn is_string() -> Rule {
    Box::new(|field: &str, value: &Value| {
        if value.is_string() {
            Ok(())
        } else {
            Err(format!("{} must be a string", field))
        }
    })
}

/// Validator: value is a JSON number
pub fn is_number() -> Rule {
    Box::new(|field: &str, value: &Value| {
        if value.is_number() {
            Ok(())
        } else {
            Err(format!("{} must be a number", field))
        }
    })
}

/// Whole number within the `i32` range; `1.0` counts as `1`.
pub fn is_integral_id(n: f64) -> bool {
    n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX)
}

/// Validator: number has no fractional part and fits an id column
pub fn is_integer() -> Rule {
    Box::new(|field: &str, value: &Value| match value.as_f64() {
        Some(n) if is_integral_id(n) => Ok(()),
        Some(_) => Err(format!("{} must be an integer", field)),
        None => Ok(()),
    })
}

/// Validator: number is zero or greater
pub fn non_negative() -> Rule {
    Box::new(|field: &str, value: &Value| match value.as_f64() {
        Some(n) if n < 0.0 => Err(format!("{} must not be negative", field)),
        _ => Ok(()),
    })
}

/// Validator: value is a JSON array
pub fn is_array() -> Rule {
    Box::new(|field: &str, value: &Value| {
        if value.is_array() {
            Ok(())
        } else {
            Err(format!("{} must be an array", field))
        }
    })
}

/// Validator: every element of an array is a string
pub fn each_string() -> Rule {
    Box::new(|field: &str, value: &Value| match value.as_array() {
        Some(items) if !items.iter().all(Value::is_string) => {
            Err(format!("each value in {} must be a string", field))
        }
        _ => Ok(()),
    })
}

/// Validator: string matches `regex`, failing with `message`
pub fn matches(regex: &'static Lazy<Regex>, message: &'static str) -> Rule {
    Box::new(move |_: &str, value: &Value| match value.as_str() {
        Some(s) if !regex.is_match(s) => Err(message.to_string()),
        _ => Ok(()),
    })
}

/// Validator: string is made of ASCII digits only
pub fn digits_only(message: &'static str) -> Rule {
    matches(&DIGITS, message)
}

/// Validator: string length (in characters) is within `min..=max`
pub fn length(min: usize, max: usize, message: &'static str) -> Rule {
    Box::new(move |_: &str, value: &Value| match value.as_str() {
        Some(s) if !(min..=max).contains(&s.chars().count()) => Err(message.to_string()),
        _ => Ok(()),
    })
}

/// Validator: string has the `DD/MM/YYYY` or `DD/MM/YY` shape
pub fn date_shape() -> Rule {
    Box::new(|field: &str, value: &Value| match value.as_str() {
        Some(s) if !date::has_release_date_shape(s) => Err(format!(
            "{} must follow the format DD/MM/YYYY or DD/MM/YY",
            field
        )),
        _ => Ok(()),
    })
}

/// Validator: a well-shaped date string names a real calendar day
pub fn calendar_date() -> Rule {
    Box::new(|field: &str, value: &Value| match value.as_str() {
        Some(s) if date::has_release_date_shape(s) && date::parse_release_date(s).is_err() => {
            Err(format!("{} must be a valid calendar date", field))
        }
        _ => Ok(()),
    })
}
