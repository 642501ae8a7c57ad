// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between domain values and their stored column form.
//!
//! Dates are stored as ISO 8601 `TEXT` (`YYYY-MM-DD`), which also keeps their
//! lexical and chronological order identical.

use time::Date;
use time::macros::format_description;

use crate::error::PersistenceError;

pub fn format_date(date: Date) -> String {
    date.to_string()
}

pub fn format_optional_date(date: Option<Date>) -> Option<String> {
    date.map(format_date)
}

/// Parses a stored date column.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidStoredValue` if the text is not a date.
pub fn parse_date(column: &'static str, value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|_| {
        PersistenceError::InvalidStoredValue {
            column,
            value: value.to_string(),
        }
    })
}

/// Parses a nullable stored date column.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidStoredValue` if the text is not a date.
pub fn parse_optional_date(
    column: &'static str,
    value: Option<&str>,
) -> Result<Option<Date>, PersistenceError> {
    value.map(|value| parse_date(column, value)).transpose()
}

/// Reads a stored dedication percentage.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidStoredValue` if the value is not 0-100.
pub fn parse_dedication(value: Option<i32>) -> Result<Option<u8>, PersistenceError> {
    value
        .map(|value| {
            u8::try_from(value)
                .ok()
                .filter(|dedication| *dedication <= 100)
                .ok_or_else(|| PersistenceError::InvalidStoredValue {
                    column: "assignments.dedication",
                    value: value.to_string(),
                })
        })
        .transpose()
}

/// Parses a stored enum label with its `FromStr` implementation.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidStoredValue` if the label is unknown.
pub fn parse_label<T: std::str::FromStr>(
    column: &'static str,
    value: &str,
) -> Result<T, PersistenceError> {
    value
        .parse::<T>()
        .map_err(|_| PersistenceError::InvalidStoredValue {
            column,
            value: value.to_string(),
        })
}
