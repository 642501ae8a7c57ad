// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry dates and enum labels as strings; they are parsed at the
//! API boundary so malformed input is reported as `ApiError::InvalidInput`.
//! Responses render dates as `YYYY-MM-DD`.

use serde::{Deserialize, Serialize};
use staffing_domain::{Assignment, Consultant, HourLog, Project};
use time::Date;

fn render_date(date: Date) -> String {
    date.to_string()
}

/// API request to register a consultant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConsultantRequest {
    /// Display name.
    pub name: String,
    /// Area of expertise.
    pub specialty: String,
    /// Availability label. Defaults to `available`.
    #[serde(default)]
    pub availability: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
}

/// A consultant as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantResponse {
    pub consultant_id: i64,
    pub name: String,
    pub specialty: String,
    pub availability: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<Consultant> for ConsultantResponse {
    fn from(consultant: Consultant) -> Self {
        Self {
            consultant_id: consultant.consultant_id,
            name: consultant.name,
            specialty: consultant.specialty,
            availability: consultant.availability.to_string(),
            email: consultant.email,
            phone: consultant.phone,
        }
    }
}

/// API request to register a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Display name.
    pub name: String,
    /// Lifecycle state label. Defaults to `pending`.
    #[serde(default)]
    pub state: Option<String>,
    /// First day (ISO 8601).
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day (ISO 8601).
    #[serde(default)]
    pub end_date: Option<String>,
}

/// A project as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub project_id: i64,
    pub name: String,
    pub state: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            project_id: project.project_id,
            name: project.name,
            state: project.state.to_string(),
            start_date: project.start_date.map(render_date),
            end_date: project.end_date.map(render_date),
        }
    }
}

/// API request carrying assignment fields, used by create, update and
/// validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// The consultant being assigned.
    pub consultant_id: i64,
    /// The project receiving the consultant.
    pub project_id: i64,
    /// Optional role label.
    #[serde(default)]
    pub role: Option<String>,
    /// Percentage of the consultant's time (0-100).
    #[serde(default)]
    pub dedication: Option<i64>,
    /// First day (ISO 8601).
    pub start_date: String,
    /// Last day (ISO 8601). Absent when open-ended.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// API response for a successful assignment creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssignmentResponse {
    /// The identifier of the new assignment.
    pub assignment_id: i64,
    /// A success message.
    pub message: String,
}

/// An assignment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub assignment_id: i64,
    pub consultant_id: i64,
    pub project_id: i64,
    pub role: Option<String>,
    pub dedication: Option<u8>,
    pub start_date: String,
    pub end_date: Option<String>,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            assignment_id: assignment.assignment_id,
            consultant_id: assignment.consultant_id,
            project_id: assignment.project_id,
            role: assignment.role,
            dedication: assignment.dedication,
            start_date: render_date(assignment.start_date),
            end_date: assignment.end_date.map(render_date),
        }
    }
}

/// API response for a dry-run assignment validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAssignmentResponse {
    /// Always `true`; a failing candidate is reported as an error.
    pub valid: bool,
    /// Dedication committed over the candidate's interval, candidate included.
    pub resulting_dedication: u32,
    /// A human-readable summary.
    pub message: String,
}

/// API request to register worked hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterHoursRequest {
    /// The project worked on.
    pub project_id: i64,
    /// The consultant who worked.
    pub consultant_id: i64,
    /// Date or RFC 3339 timestamp of the work; only the calendar day is kept.
    pub work_date: String,
    /// Hours worked.
    pub hours: f64,
    /// Free-text activity description.
    pub description: String,
}

/// An hour log as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourLogResponse {
    pub hour_log_id: i64,
    pub project_id: i64,
    pub consultant_id: i64,
    pub work_date: String,
    pub hours: f64,
    pub description: String,
}

impl From<HourLog> for HourLogResponse {
    fn from(log: HourLog) -> Self {
        Self {
            hour_log_id: log.hour_log_id,
            project_id: log.project_id,
            consultant_id: log.consultant_id,
            work_date: render_date(log.work_date),
            hours: log.hours,
            description: log.description,
        }
    }
}

/// Filter for hour log listings. Absent fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourLogFilter {
    #[serde(default)]
    pub consultant_id: Option<i64>,
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Options for a validation-only assignment check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAssignmentQuery {
    /// The stored assignment the candidate would replace, when checking an
    /// update. It is not reported as a duplicate of the candidate.
    #[serde(default)]
    pub exclude_assignment_id: Option<i64>,
}

/// Window for a dedication query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedicationQuery {
    /// First day of the window (ISO 8601).
    pub start_date: String,
    /// Last day of the window (ISO 8601). Absent for an open window.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// A consultant's committed dedication over a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedicationResponse {
    pub consultant_id: i64,
    pub start_date: String,
    pub end_date: Option<String>,
    /// Sum of overlapping assignment dedications.
    pub committed: u32,
    /// Headroom left under the 100% ceiling.
    pub remaining: u32,
}

/// API response for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// A success message.
    pub message: String,
}
