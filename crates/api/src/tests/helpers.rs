// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use staffing_persistence::Persistence;

use crate::{
    AssignmentRequest, ConsultantResponse, CreateConsultantRequest, CreateProjectRequest,
    ProjectResponse, RegisterHoursRequest, create_consultant, create_project,
};

pub fn create_test_consultant_request(name: &str, availability: Option<&str>) -> CreateConsultantRequest {
    CreateConsultantRequest {
        name: name.to_string(),
        specialty: String::from("Backend"),
        availability: availability.map(str::to_string),
        email: None,
        phone: None,
    }
}

pub fn create_test_project_request(
    name: &str,
    state: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> CreateProjectRequest {
    CreateProjectRequest {
        name: name.to_string(),
        state: state.map(str::to_string),
        start_date: start_date.map(str::to_string),
        end_date: end_date.map(str::to_string),
    }
}

pub fn create_test_assignment_request(
    consultant_id: i64,
    project_id: i64,
    dedication: Option<i64>,
    start_date: &str,
    end_date: Option<&str>,
) -> AssignmentRequest {
    AssignmentRequest {
        consultant_id,
        project_id,
        role: None,
        dedication,
        start_date: start_date.to_string(),
        end_date: end_date.map(str::to_string),
    }
}

pub fn create_test_hours_request(
    consultant_id: i64,
    project_id: i64,
    work_date: &str,
    hours: f64,
    description: &str,
) -> RegisterHoursRequest {
    RegisterHoursRequest {
        project_id,
        consultant_id,
        work_date: work_date.to_string(),
        hours,
        description: description.to_string(),
    }
}

/// An in-memory database with one available consultant and one pending
/// project, registered through the API.
pub fn create_test_persistence() -> (Persistence, i64, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let consultant: ConsultantResponse = create_consultant(
        &mut persistence,
        &create_test_consultant_request("Ada Lovelace", None),
    )
    .unwrap();
    let project: ProjectResponse = create_project(
        &mut persistence,
        &create_test_project_request("Analytical Engine", None, None, None),
    )
    .unwrap();
    (persistence, consultant.consultant_id, project.project_id)
}
