// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::interval::DedicationInterval;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Availability state of a consultant.
///
/// Mutated by processes outside the engine; read by the assignment validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Free to take new assignments.
    #[default]
    Available,
    /// Fully booked.
    Busy,
    /// Temporarily away.
    OnBreak,
    /// Not taking work.
    Unavailable,
}

impl Availability {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::OnBreak => "on_break",
            Self::Unavailable => "unavailable",
        }
    }

    /// Returns whether new assignments may be given to a consultant in this state.
    #[must_use]
    pub const fn accepts_assignments(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl FromStr for Availability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            "on_break" => Ok(Self::OnBreak),
            "unavailable" => Ok(Self::Unavailable),
            _ => Err(DomainError::InvalidAvailability(s.to_string())),
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a project.
///
/// The state gates which assignments a project accepts:
/// - `Pending`: any dates
/// - `Active`: dates contained in the project bounds
/// - `Finished`: none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    /// Not started yet.
    #[default]
    Pending,
    /// In progress.
    Active,
    /// Closed. A finished project always carries an end date.
    Finished,
}

impl ProjectState {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl FromStr for ProjectState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(DomainError::InvalidProjectState(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProjectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A consultant that can be assigned to projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultant {
    /// Canonical identifier assigned by the store.
    pub consultant_id: i64,
    /// Display name.
    pub name: String,
    /// Area of expertise.
    pub specialty: String,
    /// Current availability.
    pub availability: Availability,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
}

/// A client project that consultants are assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Canonical identifier assigned by the store.
    pub project_id: i64,
    /// Display name.
    pub name: String,
    /// Lifecycle state.
    pub state: ProjectState,
    /// First day of the project, if scheduled.
    pub start_date: Option<Date>,
    /// Last day of the project, if scheduled.
    pub end_date: Option<Date>,
}

/// Assignment fields supplied by a caller, before an identifier exists.
///
/// This is the candidate checked by the assignment validator on both create
/// and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDraft {
    /// The consultant being assigned.
    pub consultant_id: i64,
    /// The project receiving the consultant.
    pub project_id: i64,
    /// Optional role label. `None` is a distinct matchable value.
    pub role: Option<String>,
    /// Percentage of the consultant's time (0-100). `None` counts as 0.
    pub dedication: Option<u8>,
    /// First day of the assignment.
    pub start_date: Date,
    /// Last day of the assignment, `None` when open-ended.
    pub end_date: Option<Date>,
}

impl AssignmentDraft {
    /// Returns the dedication interval covered by this draft.
    #[must_use]
    pub const fn interval(&self) -> DedicationInterval {
        DedicationInterval::new(self.start_date, self.end_date)
    }

    /// Returns the requested dedication, treating an absent value as 0.
    #[must_use]
    pub fn dedication_or_zero(&self) -> u32 {
        u32::from(self.dedication.unwrap_or(0))
    }

    /// Materializes this draft with a store-assigned identifier.
    #[must_use]
    pub fn into_assignment(self, assignment_id: i64) -> Assignment {
        Assignment {
            assignment_id,
            consultant_id: self.consultant_id,
            project_id: self.project_id,
            role: self.role,
            dedication: self.dedication,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// A persisted consultant-to-project assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Canonical identifier assigned by the store.
    pub assignment_id: i64,
    /// The assigned consultant.
    pub consultant_id: i64,
    /// The project.
    pub project_id: i64,
    /// Optional role label.
    pub role: Option<String>,
    /// Percentage of the consultant's time (0-100). `None` counts as 0.
    pub dedication: Option<u8>,
    /// First day of the assignment.
    pub start_date: Date,
    /// Last day of the assignment, `None` when open-ended.
    pub end_date: Option<Date>,
}

impl Assignment {
    /// Returns the dedication interval covered by this assignment.
    #[must_use]
    pub const fn interval(&self) -> DedicationInterval {
        DedicationInterval::new(self.start_date, self.end_date)
    }

    /// Returns the dedication, treating an absent value as 0.
    #[must_use]
    pub fn dedication_or_zero(&self) -> u32 {
        u32::from(self.dedication.unwrap_or(0))
    }
}

/// An hour log submitted for registration.
///
/// `work_date` may carry any time of day and offset; only its calendar day
/// is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHourLog {
    /// The project the hours were spent on.
    pub project_id: i64,
    /// The consultant who worked.
    pub consultant_id: i64,
    /// When the work happened.
    pub work_date: OffsetDateTime,
    /// Hours worked, `0 < hours <= 24`.
    pub hours: f64,
    /// Free-text activity description.
    pub description: String,
}

/// A persisted hour log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourLog {
    /// Canonical identifier assigned by the store.
    pub hour_log_id: i64,
    /// The project the hours were spent on.
    pub project_id: i64,
    /// The consultant who worked.
    pub consultant_id: i64,
    /// Calendar day of the work.
    pub work_date: Date,
    /// Hours worked.
    pub hours: f64,
    /// Trimmed activity description.
    pub description: String,
}

/// Renders an optional role for messages.
#[must_use]
pub fn format_role(role: Option<&str>) -> String {
    role.map_or_else(|| String::from("(none)"), |role| format!("'{role}'"))
}
