// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Availability, format_role};
use time::Date;

/// The caller-visible class of a rule failure.
///
/// Every `DomainError` belongs to exactly one kind. Boundaries map kinds to
/// their own status codes; the engine never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced entity does not exist.
    NotFound,
    /// The request is well formed but breaks a business rule.
    Validation,
    /// The request collides with existing state.
    Conflict,
    /// A date or label could not be parsed.
    InvalidInput,
}

impl ErrorKind {
    /// Returns the kind as a lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Consultant does not exist.
    ConsultantNotFound(i64),
    /// Project does not exist.
    ProjectNotFound(i64),
    /// Assignment does not exist.
    AssignmentNotFound(i64),
    /// Hour log does not exist.
    HourLogNotFound(i64),
    /// An assignment with the same consultant, project and role already exists.
    DuplicateAssignment {
        /// The consultant.
        consultant_id: i64,
        /// The project.
        project_id: i64,
        /// The role shared by both assignments.
        role: Option<String>,
        /// The assignment already holding the slot.
        existing_assignment_id: i64,
    },
    /// Assignment end date precedes its start date.
    EndBeforeStart {
        /// The requested start date.
        start_date: Date,
        /// The requested end date.
        end_date: Date,
    },
    /// The project is finished and closed to new assignments.
    ProjectFinished {
        /// The project name.
        project_name: String,
    },
    /// The project is active but has no start date to contain assignments.
    ProjectWithoutStartDate {
        /// The project name.
        project_name: String,
    },
    /// Assignment starts before its project does.
    StartsBeforeProject {
        /// The requested start date.
        start_date: Date,
        /// The project start date.
        project_start: Date,
    },
    /// Assignment ends after its project does.
    EndsAfterProject {
        /// The requested end date.
        end_date: Date,
        /// The project end date.
        project_end: Date,
    },
    /// Consultant is not in the `available` state.
    ConsultantUnavailable {
        /// The consultant display name.
        name: String,
        /// The consultant's current state.
        availability: Availability,
    },
    /// The 100% allocation ceiling would be exceeded.
    DedicationExceeded {
        /// Percentage already committed in the overlapping period.
        previous: u32,
        /// Percentage requested by the candidate.
        requested: u32,
        /// Resulting total.
        total: u32,
    },
    /// Hours worked is zero or negative.
    HoursNotPositive,
    /// Hours worked is above a full day.
    HoursExceedDay,
    /// The consultant has no assignment on the project.
    NotAssigned {
        /// The consultant.
        consultant_id: i64,
        /// The project.
        project_id: i64,
    },
    /// The work date lies outside the assignment window.
    OutsideAssignmentRange {
        /// The requested work date.
        work_date: Date,
        /// Assignment start date.
        start_date: Date,
        /// Assignment end date, `None` when open-ended.
        end_date: Option<Date>,
    },
    /// An equivalent hour log already exists.
    DuplicateHourLog {
        /// The calendar day of the log.
        work_date: Date,
        /// The normalized activity description.
        description: String,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Unknown availability label.
    InvalidAvailability(String),
    /// Unknown project state label.
    InvalidProjectState(String),
}

impl DomainError {
    /// Classifies this error for callers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ConsultantNotFound(_)
            | Self::ProjectNotFound(_)
            | Self::AssignmentNotFound(_)
            | Self::HourLogNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateAssignment { .. }
            | Self::ProjectFinished { .. }
            | Self::ConsultantUnavailable { .. }
            | Self::DuplicateHourLog { .. } => ErrorKind::Conflict,
            Self::EndBeforeStart { .. }
            | Self::ProjectWithoutStartDate { .. }
            | Self::StartsBeforeProject { .. }
            | Self::EndsAfterProject { .. }
            | Self::DedicationExceeded { .. }
            | Self::HoursNotPositive
            | Self::HoursExceedDay
            | Self::NotAssigned { .. }
            | Self::OutsideAssignmentRange { .. } => ErrorKind::Validation,
            Self::DateParseError { .. }
            | Self::InvalidAvailability(_)
            | Self::InvalidProjectState(_) => ErrorKind::InvalidInput,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConsultantNotFound(id) => write!(f, "Consultant {id} not found"),
            Self::ProjectNotFound(id) => write!(f, "Project {id} not found"),
            Self::AssignmentNotFound(id) => write!(f, "Assignment {id} not found"),
            Self::HourLogNotFound(id) => write!(f, "Hour log {id} not found"),
            Self::DuplicateAssignment {
                consultant_id,
                project_id,
                role,
                existing_assignment_id,
            } => {
                write!(
                    f,
                    "Consultant {consultant_id} is already assigned to project {project_id} with role {} (assignment {existing_assignment_id})",
                    format_role(role.as_deref())
                )
            }
            Self::EndBeforeStart {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "End date {end_date} must be on or after start date {start_date}"
                )
            }
            Self::ProjectFinished { project_name } => {
                write!(
                    f,
                    "Project '{project_name}' is finished and cannot accept new assignments"
                )
            }
            Self::ProjectWithoutStartDate { project_name } => {
                write!(f, "Project '{project_name}' has no start date")
            }
            Self::StartsBeforeProject {
                start_date,
                project_start,
            } => {
                write!(
                    f,
                    "Assignment start date {start_date} is before the project start date {project_start}"
                )
            }
            Self::EndsAfterProject {
                end_date,
                project_end,
            } => {
                write!(
                    f,
                    "Assignment end date {end_date} is after the project end date {project_end}"
                )
            }
            Self::ConsultantUnavailable { name, availability } => {
                write!(
                    f,
                    "Consultant '{name}' is not available (current state: {availability})"
                )
            }
            Self::DedicationExceeded {
                previous,
                requested,
                total,
            } => {
                write!(
                    f,
                    "Dedication limit exceeded: {previous}% already committed in this period, {requested}% requested, {total}% total (maximum 100%)"
                )
            }
            Self::HoursNotPositive => write!(f, "Hours worked must be greater than 0"),
            Self::HoursExceedDay => write!(f, "Hours worked cannot exceed 24"),
            Self::NotAssigned {
                consultant_id,
                project_id,
            } => {
                write!(
                    f,
                    "Consultant {consultant_id} is not assigned to this project ({project_id})"
                )
            }
            Self::OutsideAssignmentRange {
                work_date,
                start_date,
                end_date,
            } => match end_date {
                Some(end_date) => write!(
                    f,
                    "Work date {work_date} is outside assignment range {start_date} to {end_date}"
                ),
                None => write!(
                    f,
                    "Work date {work_date} is outside assignment range starting {start_date}"
                ),
            },
            Self::DuplicateHourLog {
                work_date,
                description,
            } => {
                write!(
                    f,
                    "An hour log for {work_date} with description '{description}' already exists"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidAvailability(value) => write!(f, "Invalid availability: {value}"),
            Self::InvalidProjectState(value) => write!(f, "Invalid project state: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
