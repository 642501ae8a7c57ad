// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations.
//!
//! Each function parses its request, runs the engine or a directory lookup
//! against the persistence adapter, and translates every failure into an
//! `ApiError`.

use staffing::CreateAssignmentResult;
use staffing_domain::{
    Assignment, AssignmentDraft, Consultant, DomainError, HourLog, MAX_DEDICATION, NewHourLog,
    Project, ProjectState, parse_work_timestamp, validate_date_order,
};
use staffing_persistence::{NewConsultant, NewProject, Persistence};
use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::input::{
    parse_assignment_request, parse_availability, parse_date, parse_optional_date,
    parse_project_state, require_text,
};
use crate::request_response::{
    AssignmentRequest, AssignmentResponse, ConsultantResponse, CreateAssignmentResponse,
    CreateConsultantRequest, CreateProjectRequest, DedicationQuery, DedicationResponse,
    DeleteResponse, HourLogFilter, HourLogResponse, ProjectResponse, RegisterHoursRequest,
    ValidateAssignmentQuery, ValidateAssignmentResponse,
};

// ============================================================================
// Directory
// ============================================================================

/// Registers a consultant.
///
/// # Errors
///
/// Returns an error if:
/// - The name or specialty is empty
/// - The availability label is unknown
/// - The database write fails
pub fn create_consultant(
    persistence: &mut Persistence,
    request: &CreateConsultantRequest,
) -> Result<ConsultantResponse, ApiError> {
    let consultant: NewConsultant = NewConsultant {
        name: require_text("name", &request.name)?,
        specialty: require_text("specialty", &request.specialty)?,
        availability: parse_availability(request.availability.as_deref())?,
        email: request.email.clone(),
        phone: request.phone.clone(),
    };

    let consultant_id: i64 = persistence
        .create_consultant(&consultant)
        .map_err(translate_persistence_error)?;

    get_consultant(persistence, consultant_id)
}

/// Retrieves a consultant.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the consultant does not exist.
pub fn get_consultant(
    persistence: &mut Persistence,
    consultant_id: i64,
) -> Result<ConsultantResponse, ApiError> {
    load_consultant(persistence, consultant_id).map(ConsultantResponse::from)
}

/// Lists all consultants.
///
/// # Errors
///
/// Returns an error if the database read fails.
pub fn list_consultants(persistence: &mut Persistence) -> Result<Vec<ConsultantResponse>, ApiError> {
    let consultants: Vec<Consultant> = persistence
        .list_consultants()
        .map_err(translate_persistence_error)?;
    Ok(consultants.into_iter().map(ConsultantResponse::from).collect())
}

/// Registers a project.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or the state label is unknown
/// - A date is malformed or the end precedes the start
/// - A finished project has no end date
/// - The database write fails
pub fn create_project(
    persistence: &mut Persistence,
    request: &CreateProjectRequest,
) -> Result<ProjectResponse, ApiError> {
    let project: NewProject = NewProject {
        name: require_text("name", &request.name)?,
        state: parse_project_state(request.state.as_deref())?,
        start_date: parse_optional_date("start_date", request.start_date.as_deref())?,
        end_date: parse_optional_date("end_date", request.end_date.as_deref())?,
    };

    if let (Some(start_date), Some(end_date)) = (project.start_date, project.end_date) {
        validate_date_order(start_date, Some(end_date)).map_err(translate_domain_error)?;
    }

    if project.state == ProjectState::Finished && project.end_date.is_none() {
        return Err(ApiError::InvalidInput {
            field: String::from("end_date"),
            message: String::from("A finished project must have an end date"),
        });
    }

    let project_id: i64 = persistence
        .create_project(&project)
        .map_err(translate_persistence_error)?;

    get_project(persistence, project_id)
}

/// Retrieves a project.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the project does not exist.
pub fn get_project(
    persistence: &mut Persistence,
    project_id: i64,
) -> Result<ProjectResponse, ApiError> {
    load_project(persistence, project_id).map(ProjectResponse::from)
}

/// Lists all projects.
///
/// # Errors
///
/// Returns an error if the database read fails.
pub fn list_projects(persistence: &mut Persistence) -> Result<Vec<ProjectResponse>, ApiError> {
    let projects: Vec<Project> = persistence
        .list_projects()
        .map_err(translate_persistence_error)?;
    Ok(projects.into_iter().map(ProjectResponse::from).collect())
}

fn load_consultant(persistence: &mut Persistence, consultant_id: i64) -> Result<Consultant, ApiError> {
    persistence
        .get_consultant(consultant_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| translate_domain_error(DomainError::ConsultantNotFound(consultant_id)))
}

fn load_project(persistence: &mut Persistence, project_id: i64) -> Result<Project, ApiError> {
    persistence
        .get_project(project_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| translate_domain_error(DomainError::ProjectNotFound(project_id)))
}

// ============================================================================
// Assignments
// ============================================================================

/// Creates an assignment after running every consistency check.
///
/// # Errors
///
/// Returns an error if the input is malformed or any check fails. Nothing is
/// written on failure.
pub fn create_assignment(
    persistence: &mut Persistence,
    request: &AssignmentRequest,
) -> Result<CreateAssignmentResponse, ApiError> {
    let draft: AssignmentDraft = parse_assignment_request(request)?;

    let result: CreateAssignmentResult =
        staffing::create_assignment(persistence, draft).map_err(translate_core_error)?;

    Ok(CreateAssignmentResponse {
        assignment_id: result.assignment_id,
        message: result.message,
    })
}

/// Runs every consistency check on a candidate assignment without storing it.
///
/// With `exclude_assignment_id` set the candidate is checked as an update of
/// that assignment, the way `update_assignment` checks it.
///
/// # Errors
///
/// Returns the error `create_assignment` (or `update_assignment` when an
/// assignment is excluded) would return for the same request, and
/// `ApiError::ResourceNotFound` if the excluded assignment does not exist.
pub fn validate_assignment(
    persistence: &mut Persistence,
    request: &AssignmentRequest,
    query: &ValidateAssignmentQuery,
) -> Result<ValidateAssignmentResponse, ApiError> {
    let draft: AssignmentDraft = parse_assignment_request(request)?;

    if let Some(assignment_id) = query.exclude_assignment_id {
        staffing::get_assignment(persistence, assignment_id)
            .map_err(translate_core_error)?
            .ok_or_else(|| translate_domain_error(DomainError::AssignmentNotFound(assignment_id)))?;
    }

    staffing::validate_assignment(persistence, &draft, query.exclude_assignment_id)
        .map_err(translate_core_error)?;

    let committed: u32 =
        staffing::dedication(persistence, draft.consultant_id, draft.start_date, draft.end_date)
            .map_err(translate_core_error)?;
    let resulting_dedication: u32 = committed.saturating_add(draft.dedication_or_zero());

    debug!(
        consultant_id = draft.consultant_id,
        project_id = draft.project_id,
        resulting_dedication,
        "Assignment candidate is valid"
    );

    Ok(ValidateAssignmentResponse {
        valid: true,
        resulting_dedication,
        message: format!(
            "Assignment is valid: {resulting_dedication}% committed over {}",
            draft.interval()
        ),
    })
}

/// Retrieves an assignment.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the assignment does not exist.
pub fn get_assignment(
    persistence: &mut Persistence,
    assignment_id: i64,
) -> Result<AssignmentResponse, ApiError> {
    staffing::get_assignment(persistence, assignment_id)
        .map_err(translate_core_error)?
        .map(AssignmentResponse::from)
        .ok_or_else(|| translate_domain_error(DomainError::AssignmentNotFound(assignment_id)))
}

/// Replaces an assignment after re-running every consistency check.
///
/// # Errors
///
/// Returns an error if the assignment does not exist, the input is malformed
/// or any check fails. Nothing is written on failure.
pub fn update_assignment(
    persistence: &mut Persistence,
    assignment_id: i64,
    request: &AssignmentRequest,
) -> Result<AssignmentResponse, ApiError> {
    let draft: AssignmentDraft = parse_assignment_request(request)?;

    let updated: Assignment = staffing::update_assignment(persistence, assignment_id, draft)
        .map_err(translate_core_error)?;

    Ok(AssignmentResponse::from(updated))
}

/// Deletes an assignment.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the assignment does not exist.
pub fn delete_assignment(
    persistence: &mut Persistence,
    assignment_id: i64,
) -> Result<DeleteResponse, ApiError> {
    staffing::delete_assignment(persistence, assignment_id).map_err(translate_core_error)?;

    Ok(DeleteResponse {
        message: format!("Assignment {assignment_id} deleted"),
    })
}

/// Lists the assignments of a consultant.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the consultant does not exist.
pub fn list_consultant_assignments(
    persistence: &mut Persistence,
    consultant_id: i64,
) -> Result<Vec<AssignmentResponse>, ApiError> {
    load_consultant(persistence, consultant_id)?;

    let assignments: Vec<Assignment> =
        staffing::list_assignments_by_consultant(persistence, consultant_id)
            .map_err(translate_core_error)?;
    Ok(assignments.into_iter().map(AssignmentResponse::from).collect())
}

/// Lists the assignments on a project.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the project does not exist.
pub fn list_project_assignments(
    persistence: &mut Persistence,
    project_id: i64,
) -> Result<Vec<AssignmentResponse>, ApiError> {
    load_project(persistence, project_id)?;

    let assignments: Vec<Assignment> =
        staffing::list_assignments_by_project(persistence, project_id)
            .map_err(translate_core_error)?;
    Ok(assignments.into_iter().map(AssignmentResponse::from).collect())
}

/// Reports a consultant's committed dedication over a window.
///
/// # Errors
///
/// Returns an error if the consultant does not exist or the window is
/// malformed.
pub fn get_dedication(
    persistence: &mut Persistence,
    consultant_id: i64,
    query: &DedicationQuery,
) -> Result<DedicationResponse, ApiError> {
    load_consultant(persistence, consultant_id)?;

    let start_date: Date = parse_date("start_date", &query.start_date)?;
    let end_date: Option<Date> = parse_optional_date("end_date", query.end_date.as_deref())?;
    validate_date_order(start_date, end_date).map_err(translate_domain_error)?;

    let committed: u32 = staffing::dedication(persistence, consultant_id, start_date, end_date)
        .map_err(translate_core_error)?;

    Ok(DedicationResponse {
        consultant_id,
        start_date: start_date.to_string(),
        end_date: end_date.map(|date| date.to_string()),
        committed,
        remaining: MAX_DEDICATION.saturating_sub(committed),
    })
}

// ============================================================================
// Hour logs
// ============================================================================

/// Registers worked hours.
///
/// # Errors
///
/// Returns an error if the input is malformed or any registration check
/// fails. Nothing is written on failure.
pub fn register_hours(
    persistence: &mut Persistence,
    request: &RegisterHoursRequest,
) -> Result<HourLogResponse, ApiError> {
    let work_date: OffsetDateTime = parse_work_timestamp(&request.work_date).map_err(|err| {
        ApiError::InvalidInput {
            field: String::from("work_date"),
            message: err.to_string(),
        }
    })?;

    let entry: NewHourLog = NewHourLog {
        project_id: request.project_id,
        consultant_id: request.consultant_id,
        work_date,
        hours: request.hours,
        description: require_text("description", &request.description)?,
    };

    let log: HourLog = staffing::register_hours(persistence, entry).map_err(translate_core_error)?;

    Ok(HourLogResponse::from(log))
}

/// Lists hour logs, optionally filtered by consultant and project.
///
/// # Errors
///
/// Returns an error if the database read fails.
pub fn list_hour_logs(
    persistence: &mut Persistence,
    filter: &HourLogFilter,
) -> Result<Vec<HourLogResponse>, ApiError> {
    let logs: Vec<HourLog> = match (filter.consultant_id, filter.project_id) {
        (Some(consultant_id), Some(project_id)) => {
            staffing::list_hour_logs_for(persistence, consultant_id, project_id)
        }
        _ => staffing::list_hour_logs(persistence),
    }
    .map_err(translate_core_error)?;

    Ok(logs
        .into_iter()
        .filter(|log| filter.consultant_id.is_none_or(|id| log.consultant_id == id))
        .filter(|log| filter.project_id.is_none_or(|id| log.project_id == id))
        .map(HourLogResponse::from)
        .collect())
}

/// Retrieves an hour log.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the hour log does not exist.
pub fn get_hour_log(
    persistence: &mut Persistence,
    hour_log_id: i64,
) -> Result<HourLogResponse, ApiError> {
    staffing::get_hour_log(persistence, hour_log_id)
        .map_err(translate_core_error)?
        .map(HourLogResponse::from)
        .ok_or_else(|| translate_domain_error(DomainError::HourLogNotFound(hour_log_id)))
}

/// Deletes an hour log.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the hour log does not exist.
pub fn delete_hour_log(
    persistence: &mut Persistence,
    hour_log_id: i64,
) -> Result<DeleteResponse, ApiError> {
    staffing::delete_hour_log(persistence, hour_log_id).map_err(translate_core_error)?;

    info!(hour_log_id, "Hour log deleted via API");
    Ok(DeleteResponse {
        message: format!("Hour log {hour_log_id} deleted"),
    })
}
