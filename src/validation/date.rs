//! Release date parsing
//!
//! Clients send `DD/MM/YYYY` or `DD/MM/YY`. Checking the shape and checking
//! the calendar are separate steps: `99/99/9999` has the right shape but
//! names no real day.

use chrono::{Datelike, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static FULL_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid regex"));
static SHORT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{2}$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReleaseDateError {
    #[error("date must follow the format DD/MM/YYYY or DD/MM/YY")]
    Shape,
    #[error("date must be a valid calendar date")]
    Calendar,
}

pub fn has_release_date_shape(value: &str) -> bool {
    FULL_YEAR.is_match(value) || SHORT_YEAR.is_match(value)
}

/// Parse a release date, resolving two-digit years against the current year.
pub fn parse_release_date(value: &str) -> Result<NaiveDate, ReleaseDateError> {
    parse_release_date_at(value, Utc::now().year())
}

pub fn parse_release_date_at(value: &str, reference_year: i32) -> Result<NaiveDate, ReleaseDateError> {
    let short = SHORT_YEAR.is_match(value);
    if !short && !FULL_YEAR.is_match(value) {
        return Err(ReleaseDateError::Shape);
    }

    let mut parts = value.split('/').map(|p| p.parse::<i32>());
    let (Some(Ok(day)), Some(Ok(month)), Some(Ok(year))) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ReleaseDateError::Shape);
    };

    let year = if short {
        resolve_two_digit_year(year, reference_year)
    } else {
        year
    };

    let (Ok(month), Ok(day)) = (u32::try_from(month), u32::try_from(day)) else {
        return Err(ReleaseDateError::Calendar);
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ReleaseDateError::Calendar)
}

/// Pick the year ending in `two_digit` that lies in the hundred-year window
/// `reference_year - 50 ..= reference_year + 49`.
pub fn resolve_two_digit_year(two_digit: i32, reference_year: i32) -> i32 {
    if reference_year <= 50 {
        return if two_digit == 0 { 100 } else { two_digit };
    }

    let range_end = reference_year + 50;
    let range_end_century = (range_end / 100) * 100;
    if two_digit >= range_end % 100 {
        two_digit + range_end_century - 100
    } else {
        two_digit + range_end_century
    }
}

/// Render a date as the UTC-midnight timestamp stored on the book.
pub fn to_timestamp(date: NaiveDate) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Validate and convert a client date into its stored form.
pub fn normalize_release_date(value: &str) -> Result<String, ReleaseDateError> {
    parse_release_date(value).map(to_timestamp)
}
