//! Parsing of raw query string values.
//!
//! Query parameters arrive as strings so that a malformed value can be reported as a 400
//! with a `{"message"}` body naming the offending parameter.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::server::error::AppError;

/// Date format accepted by the `date` filter, e.g. `18-10-2026`.
pub const QUERY_DATE_FORMAT: &str = "%d-%m-%Y";

/// 400 naming the query parameter and the value that failed to parse.
pub fn invalid(name: &str, value: &str) -> AppError {
    AppError::BadRequest(format!("Invalid value '{}' for '{}'", value, name))
}

/// Parses a boolean query value.
///
/// Accepts `true`, `false`, `1` and `0`, ignoring ASCII case.
///
/// # Arguments
/// - `name` - Parameter name, used in the error message
/// - `value` - Raw parameter value
///
/// # Returns
/// - `Ok(bool)` - Parsed flag
/// - `Err(AppError::BadRequest)` - Value is not a recognized boolean
pub fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(invalid(name, value)),
    }
}

/// Parses a `DD-MM-YYYY` date.
pub fn parse_date(name: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), QUERY_DATE_FORMAT).map_err(|_| invalid(name, value))
}

/// Parses a decimal amount such as `12.50`.
pub fn parse_decimal(name: &str, value: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(value.trim()).map_err(|_| invalid(name, value))
}

/// Parses any integer type, e.g. an ID or a page number.
pub fn parse_int<T: FromStr>(name: &str, value: &str) -> Result<T, AppError> {
    value.trim().parse::<T>().map_err(|_| invalid(name, value))
}

/// Applies `parse` to an optional raw value.
///
/// # Example
///
/// ```rust,ignore
/// let featured = parse_optional("featured", query.featured.as_deref(), parse_bool)?;
/// ```
pub fn parse_optional<T>(
    name: &str,
    value: Option<&str>,
    parse: fn(&str, &str) -> Result<T, AppError>,
) -> Result<Option<T>, AppError> {
    value.map(|value| parse(name, value)).transpose()
}
