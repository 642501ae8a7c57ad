// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure business-rule checks.
//!
//! Every function here is deterministic and side-effect free. Lookups and
//! ordering of the checks belong to the core crate.

use crate::calendar::normalize_description;
use crate::error::DomainError;
use crate::interval::DedicationInterval;
use crate::types::{Assignment, Consultant, HourLog, Project, ProjectState};
use time::Date;

/// Maximum cumulative dedication a consultant may carry at any point in time.
pub const MAX_DEDICATION: u32 = 100;

/// Maximum hours that may be logged for a single day.
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// Rejects a duplicate (consultant, project, role) assignment.
///
/// # Arguments
///
/// * `existing` - The assignment matching the candidate's triple, if any
/// * `exclude_assignment_id` - The assignment being updated, which never
///   counts as its own duplicate
///
/// # Errors
///
/// Returns `DomainError::DuplicateAssignment` if `existing` is another
/// assignment.
pub fn check_assignment_not_duplicate(
    existing: Option<&Assignment>,
    exclude_assignment_id: Option<i64>,
) -> Result<(), DomainError> {
    match existing {
        Some(existing) if Some(existing.assignment_id) != exclude_assignment_id => {
            Err(DomainError::DuplicateAssignment {
                consultant_id: existing.consultant_id,
                project_id: existing.project_id,
                role: existing.role.clone(),
                existing_assignment_id: existing.assignment_id,
            })
        }
        _ => Ok(()),
    }
}

/// Validates that an end date, when given, is not before the start date.
///
/// # Errors
///
/// Returns `DomainError::EndBeforeStart` if `end_date < start_date`.
pub fn validate_date_order(start_date: Date, end_date: Option<Date>) -> Result<(), DomainError> {
    match end_date {
        Some(end_date) if end_date < start_date => Err(DomainError::EndBeforeStart {
            start_date,
            end_date,
        }),
        _ => Ok(()),
    }
}

/// Checks that a project's lifecycle state admits an assignment over the
/// given dates.
///
/// - `Finished` projects reject every assignment.
/// - `Active` projects require the dates to sit inside the project bounds.
/// - `Pending` projects accept any dates.
///
/// # Errors
///
/// Returns an error if:
/// - The project is finished
/// - The project is active without a start date
/// - The assignment starts before the project
/// - Both end dates exist and the assignment ends after the project
pub fn check_project_admits(
    project: &Project,
    start_date: Date,
    end_date: Option<Date>,
) -> Result<(), DomainError> {
    match project.state {
        ProjectState::Finished => Err(DomainError::ProjectFinished {
            project_name: project.name.clone(),
        }),
        ProjectState::Active => check_within_project(project, start_date, end_date),
        ProjectState::Pending => Ok(()),
    }
}

fn check_within_project(
    project: &Project,
    start_date: Date,
    end_date: Option<Date>,
) -> Result<(), DomainError> {
    let Some(project_start) = project.start_date else {
        return Err(DomainError::ProjectWithoutStartDate {
            project_name: project.name.clone(),
        });
    };

    if start_date < project_start {
        return Err(DomainError::StartsBeforeProject {
            start_date,
            project_start,
        });
    }

    // An open-ended assignment is not bounded by the project end.
    if let (Some(project_end), Some(end_date)) = (project.end_date, end_date) {
        if end_date > project_end {
            return Err(DomainError::EndsAfterProject {
                end_date,
                project_end,
            });
        }
    }

    Ok(())
}

/// Checks that a consultant can take new assignments.
///
/// # Errors
///
/// Returns `DomainError::ConsultantUnavailable`, carrying the consultant's
/// name and state, if the consultant is not available.
pub fn check_consultant_available(consultant: &Consultant) -> Result<(), DomainError> {
    if consultant.availability.accepts_assignments() {
        return Ok(());
    }
    Err(DomainError::ConsultantUnavailable {
        name: consultant.name.clone(),
        availability: consultant.availability,
    })
}

/// Checks the allocation ceiling.
///
/// # Arguments
///
/// * `previous` - Dedication already committed over the candidate's interval
/// * `requested` - Dedication requested by the candidate
///
/// # Returns
///
/// The resulting total when it stays within [`MAX_DEDICATION`].
///
/// # Errors
///
/// Returns `DomainError::DedicationExceeded` with all three figures if the
/// total is above the ceiling.
pub fn check_dedication_ceiling(previous: u32, requested: u32) -> Result<u32, DomainError> {
    let total: u32 = previous.saturating_add(requested);
    if total > MAX_DEDICATION {
        return Err(DomainError::DedicationExceeded {
            previous,
            requested,
            total,
        });
    }
    Ok(total)
}

/// Validates hours worked for a single log.
///
/// # Errors
///
/// Returns `DomainError::HoursNotPositive` for zero, negative or NaN values,
/// and `DomainError::HoursExceedDay` above [`MAX_DAILY_HOURS`].
pub fn validate_hours(hours: f64) -> Result<(), DomainError> {
    if hours.is_nan() || hours <= 0.0 {
        return Err(DomainError::HoursNotPositive);
    }
    if hours > MAX_DAILY_HOURS {
        return Err(DomainError::HoursExceedDay);
    }
    Ok(())
}

/// Checks that a work day falls inside an assignment window.
///
/// Both bounds are inclusive; open-ended assignments have no upper bound.
///
/// # Errors
///
/// Returns `DomainError::OutsideAssignmentRange` otherwise.
pub fn check_within_assignment(assignment: &Assignment, work_date: Date) -> Result<(), DomainError> {
    let window: DedicationInterval = assignment.interval();
    if window.contains(work_date) {
        return Ok(());
    }
    Err(DomainError::OutsideAssignmentRange {
        work_date,
        start_date: window.start(),
        end_date: window.end(),
    })
}

/// Rejects an hour log equivalent to one already recorded.
///
/// Two logs are equivalent when they share the calendar day and their
/// descriptions match after trimming and case-folding. Hours are ignored.
///
/// # Arguments
///
/// * `existing` - Logs already recorded for the same consultant and project
/// * `work_date` - Calendar day of the candidate
/// * `description` - Candidate description, in any casing
///
/// # Errors
///
/// Returns `DomainError::DuplicateHourLog` if an equivalent log exists.
pub fn check_hour_log_unique(
    existing: &[HourLog],
    work_date: Date,
    description: &str,
) -> Result<(), DomainError> {
    let normalized: String = normalize_description(description);

    let duplicate: bool = existing.iter().any(|log| {
        log.work_date == work_date && normalize_description(&log.description) == normalized
    });

    if duplicate {
        return Err(DomainError::DuplicateHourLog {
            work_date,
            description: normalized,
        });
    }
    Ok(())
}
