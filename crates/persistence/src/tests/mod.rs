// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::{NewConsultant, NewProject, Persistence};
use staffing_domain::{AssignmentDraft, Availability, ProjectState};
use time::Date;

pub fn create_test_consultant(name: &str, availability: Availability) -> NewConsultant {
    NewConsultant {
        name: name.to_string(),
        specialty: String::from("Data engineering"),
        availability,
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        phone: None,
    }
}

pub fn create_test_project(
    name: &str,
    state: ProjectState,
    start_date: Option<Date>,
    end_date: Option<Date>,
) -> NewProject {
    NewProject {
        name: name.to_string(),
        state,
        start_date,
        end_date,
    }
}

pub fn create_test_draft(
    consultant_id: i64,
    project_id: i64,
    dedication: Option<u8>,
    start_date: Date,
    end_date: Option<Date>,
) -> AssignmentDraft {
    AssignmentDraft {
        consultant_id,
        project_id,
        role: None,
        dedication,
        start_date,
        end_date,
    }
}

/// An in-memory database with one available consultant and one pending
/// project.
pub fn create_seeded_persistence() -> (Persistence, i64, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let consultant_id: i64 = persistence
        .create_consultant(&create_test_consultant(
            "Ada Lovelace",
            Availability::Available,
        ))
        .unwrap();
    let project_id: i64 = persistence
        .create_project(&create_test_project(
            "Analytical Engine",
            ProjectState::Pending,
            None,
            None,
        ))
        .unwrap();
    (persistence, consultant_id, project_id)
}
