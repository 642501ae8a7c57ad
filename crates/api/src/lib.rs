// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the staffing allocation engine.
//!
//! Callers hand in request DTOs and receive response DTOs or an
//! [`ApiError`]. Raw strings are parsed here, engine errors are translated
//! here, and no domain type crosses the boundary unconverted.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod input;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_assignment, create_consultant, create_project, delete_assignment, delete_hour_log,
    get_assignment, get_consultant, get_dedication, get_hour_log, get_project,
    list_consultant_assignments, list_consultants, list_hour_logs, list_project_assignments,
    list_projects, register_hours, update_assignment, validate_assignment,
};
pub use request_response::{
    AssignmentRequest, AssignmentResponse, ConsultantResponse, CreateAssignmentResponse,
    CreateConsultantRequest, CreateProjectRequest, DedicationQuery, DedicationResponse,
    DeleteResponse, HourLogFilter, HourLogResponse, ProjectResponse, RegisterHoursRequest,
    ValidateAssignmentQuery, ValidateAssignmentResponse,
};
