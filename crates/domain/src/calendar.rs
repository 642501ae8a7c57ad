// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day normalization.
//!
//! Work dates and activity descriptions are compared after normalization:
//! dates keep only their calendar day in the offset they were written in,
//! descriptions are trimmed and case-folded.

use crate::error::DomainError;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Drops the time of day from a timestamp.
///
/// The calendar day is the one shown in the timestamp's own offset, so
/// `2025-01-10T23:30:00-05:00` and `2025-01-10T08:00:00+02:00` are the same
/// day.
#[must_use]
pub const fn calendar_day(value: OffsetDateTime) -> Date {
    value.date()
}

/// Parses a calendar day from user input.
///
/// Accepts a plain date (`2025-01-10`), an RFC 3339 timestamp
/// (`2025-01-10T15:00:00Z`) or a timestamp without offset
/// (`2025-01-10T15:00:00`). Any time component is discarded.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the input matches none of the
/// accepted shapes.
pub fn parse_calendar_day(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();

    if let Ok(date) = Date::parse(trimmed, format_description!("[year]-[month]-[day]")) {
        return Ok(date);
    }

    if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(calendar_day(timestamp));
    }

    PrimitiveDateTime::parse(
        trimmed,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .map(|timestamp| timestamp.date())
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses a timestamp for hour registration.
///
/// RFC 3339 timestamps keep their offset. Anything else accepted by
/// [`parse_calendar_day`] is read as midnight UTC of that day.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the input matches none of the
/// accepted shapes.
pub fn parse_work_timestamp(value: &str) -> Result<OffsetDateTime, DomainError> {
    let trimmed: &str = value.trim();

    if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(timestamp);
    }

    parse_calendar_day(trimmed).map(|date| date.midnight().assume_utc())
}

/// Normalizes an activity description for duplicate comparison.
#[must_use]
pub fn normalize_description(description: &str) -> String {
    description.trim().to_lowercase()
}
