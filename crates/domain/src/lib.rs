// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod interval;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{
    calendar_day, normalize_description, parse_calendar_day, parse_work_timestamp,
};
pub use error::{DomainError, ErrorKind};
pub use interval::{DedicationInterval, OPEN_END};
pub use types::{
    Assignment, AssignmentDraft, Availability, Consultant, HourLog, NewHourLog, Project,
    ProjectState, format_role,
};
pub use validation::{
    MAX_DAILY_HOURS, MAX_DEDICATION, check_assignment_not_duplicate, check_consultant_available,
    check_dedication_ceiling, check_hour_log_unique, check_project_admits,
    check_within_assignment, validate_date_order, validate_hours,
};
