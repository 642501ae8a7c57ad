// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hour registration.
//!
//! A log is accepted only if, in order:
//!
//! 1. the consultant exists
//! 2. the project exists
//! 3. `0 < hours <= 24`
//! 4. the consultant has an assignment on the project (any role)
//! 5. the work day lies inside that assignment's window
//! 6. no log with the same day and normalized description exists
//!
//! Work dates are reduced to calendar days before any comparison or write.

use crate::error::CoreError;
use crate::store::{HourLogStore, StaffingStore};
use staffing_domain::{
    Assignment, DomainError, HourLog, NewHourLog, calendar_day, check_hour_log_unique,
    check_within_assignment, validate_hours,
};
use time::Date;
use tracing::{debug, info, warn};

/// Validates and persists a new hour log.
///
/// # Errors
///
/// Returns the first failing rule as `CoreError::DomainViolation`, or a store
/// error. Nothing is written when a rule fails.
pub fn register_hours<S>(store: &mut S, entry: NewHourLog) -> Result<HourLog, CoreError>
where
    S: StaffingStore,
{
    let work_date: Date = calendar_day(entry.work_date);
    let description: &str = entry.description.trim();

    let result: Result<HourLog, CoreError> = store.serialized(|store| {
        store
            .consultant_by_id(entry.consultant_id)?
            .ok_or(DomainError::ConsultantNotFound(entry.consultant_id))?;

        store
            .project_by_id(entry.project_id)?
            .ok_or(DomainError::ProjectNotFound(entry.project_id))?;

        validate_hours(entry.hours)?;

        let assignment: Assignment = store
            .assignment_for(entry.consultant_id, entry.project_id)?
            .ok_or(DomainError::NotAssigned {
                consultant_id: entry.consultant_id,
                project_id: entry.project_id,
            })?;

        check_within_assignment(&assignment, work_date)?;

        let existing: Vec<HourLog> =
            store.hour_logs_by_consultant_and_project(entry.consultant_id, entry.project_id)?;
        check_hour_log_unique(&existing, work_date, description)?;

        let hour_log_id: i64 = store.insert_hour_log(
            entry.consultant_id,
            entry.project_id,
            work_date,
            entry.hours,
            description,
        )?;

        Ok(HourLog {
            hour_log_id,
            project_id: entry.project_id,
            consultant_id: entry.consultant_id,
            work_date,
            hours: entry.hours,
            description: description.to_string(),
        })
    });

    match &result {
        Ok(log) => info!(
            hour_log_id = log.hour_log_id,
            consultant_id = log.consultant_id,
            project_id = log.project_id,
            %work_date,
            hours = log.hours,
            "Hours registered"
        ),
        Err(err) => warn!(
            consultant_id = entry.consultant_id,
            project_id = entry.project_id,
            %work_date,
            error = %err,
            "Hour registration rejected"
        ),
    }

    result
}

/// Lists every hour log.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_hour_logs<S>(store: &mut S) -> Result<Vec<HourLog>, CoreError>
where
    S: HourLogStore + ?Sized,
{
    Ok(store.list_hour_logs()?)
}

/// Lists the hour logs of a consultant on a project.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_hour_logs_for<S>(
    store: &mut S,
    consultant_id: i64,
    project_id: i64,
) -> Result<Vec<HourLog>, CoreError>
where
    S: HourLogStore + ?Sized,
{
    Ok(store.hour_logs_by_consultant_and_project(consultant_id, project_id)?)
}

/// Looks up an hour log.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_hour_log<S>(store: &mut S, hour_log_id: i64) -> Result<Option<HourLog>, CoreError>
where
    S: HourLogStore + ?Sized,
{
    debug!(hour_log_id, "Looking up hour log");
    Ok(store.hour_log_by_id(hour_log_id)?)
}

/// Deletes an hour log.
///
/// # Errors
///
/// Returns `DomainError::HourLogNotFound` if nothing was deleted, or a store
/// error.
pub fn delete_hour_log<S>(store: &mut S, hour_log_id: i64) -> Result<(), CoreError>
where
    S: HourLogStore + ?Sized,
{
    if !store.delete_hour_log(hour_log_id)? {
        return Err(DomainError::HourLogNotFound(hour_log_id).into());
    }
    info!(hour_log_id, "Hour log deleted");
    Ok(())
}
