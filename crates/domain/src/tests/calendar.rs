// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, calendar_day, normalize_description, parse_calendar_day, parse_work_timestamp,
};
use time::macros::{date, datetime};

#[test]
fn test_calendar_day_ignores_time_of_day() {
    assert_eq!(
        calendar_day(datetime!(2025-01-10 00:00 UTC)),
        calendar_day(datetime!(2025-01-10 23:59:59 UTC))
    );
}

#[test]
fn test_calendar_day_ignores_offset() {
    let evening_west = datetime!(2025-01-10 23:30 -5);
    let morning_east = datetime!(2025-01-10 08:00 +2);
    assert_eq!(calendar_day(evening_west), date!(2025 - 01 - 10));
    assert_eq!(calendar_day(evening_west), calendar_day(morning_east));
}

#[test]
fn test_parse_calendar_day_accepts_plain_date() {
    assert_eq!(parse_calendar_day("2025-01-10").unwrap(), date!(2025 - 01 - 10));
}

#[test]
fn test_parse_calendar_day_drops_time_component() {
    assert_eq!(
        parse_calendar_day("2025-01-10T18:45:00Z").unwrap(),
        date!(2025 - 01 - 10)
    );
    assert_eq!(
        parse_calendar_day("2025-01-10T18:45:00+09:00").unwrap(),
        date!(2025 - 01 - 10)
    );
    assert_eq!(
        parse_calendar_day("2025-01-10T18:45:00").unwrap(),
        date!(2025 - 01 - 10)
    );
}

#[test]
fn test_parse_calendar_day_rejects_garbage() {
    let result: Result<time::Date, DomainError> = parse_calendar_day("10/01/2025");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}

#[test]
fn test_parse_work_timestamp_keeps_offset() {
    let timestamp = parse_work_timestamp("2025-01-10T23:30:00-05:00").unwrap();
    assert_eq!(timestamp, datetime!(2025-01-10 23:30 -5));
    assert_eq!(calendar_day(timestamp), date!(2025 - 01 - 10));
}

#[test]
fn test_parse_work_timestamp_plain_date_is_midnight_utc() {
    let timestamp = parse_work_timestamp("2025-01-10").unwrap();
    assert_eq!(timestamp, datetime!(2025-01-10 00:00 UTC));
}

#[test]
fn test_normalize_description() {
    assert_eq!(normalize_description("  Testing "), "testing");
    assert_eq!(normalize_description("testing "), normalize_description("Testing"));
}
