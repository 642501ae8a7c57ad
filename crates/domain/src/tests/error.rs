// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Availability, DomainError, ErrorKind};
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::ConsultantNotFound(7);
    assert_eq!(format!("{err}"), "Consultant 7 not found");

    let err: DomainError = DomainError::HoursNotPositive;
    assert_eq!(format!("{err}"), "Hours worked must be greater than 0");

    let err: DomainError = DomainError::HoursExceedDay;
    assert_eq!(format!("{err}"), "Hours worked cannot exceed 24");

    let err: DomainError = DomainError::EndBeforeStart {
        start_date: date!(2025 - 03 - 01),
        end_date: date!(2025 - 02 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "End date 2025-02-01 must be on or after start date 2025-03-01"
    );

    let err: DomainError = DomainError::ProjectWithoutStartDate {
        project_name: String::from("Apollo"),
    };
    assert_eq!(format!("{err}"), "Project 'Apollo' has no start date");
}

#[test]
fn test_dedication_exceeded_reports_all_figures() {
    let err: DomainError = DomainError::DedicationExceeded {
        previous: 60,
        requested: 50,
        total: 110,
    };
    let message: String = err.to_string();
    assert!(message.contains("60%"));
    assert!(message.contains("50%"));
    assert!(message.contains("110%"));
}

#[test]
fn test_unavailable_message_names_consultant_and_state() {
    let err: DomainError = DomainError::ConsultantUnavailable {
        name: String::from("Ada Lovelace"),
        availability: Availability::OnBreak,
    };
    assert_eq!(
        format!("{err}"),
        "Consultant 'Ada Lovelace' is not available (current state: on_break)"
    );
}

#[test]
fn test_duplicate_assignment_message_renders_null_role() {
    let err: DomainError = DomainError::DuplicateAssignment {
        consultant_id: 1,
        project_id: 2,
        role: None,
        existing_assignment_id: 3,
    };
    assert_eq!(
        format!("{err}"),
        "Consultant 1 is already assigned to project 2 with role (none) (assignment 3)"
    );
}

#[test]
fn test_outside_range_message_for_open_assignment() {
    let err: DomainError = DomainError::OutsideAssignmentRange {
        work_date: date!(2025 - 01 - 05),
        start_date: date!(2025 - 01 - 10),
        end_date: None,
    };
    assert_eq!(
        format!("{err}"),
        "Work date 2025-01-05 is outside assignment range starting 2025-01-10"
    );
}

#[test]
fn test_error_kinds() {
    assert_eq!(DomainError::ProjectNotFound(1).kind(), ErrorKind::NotFound);
    assert_eq!(DomainError::HourLogNotFound(1).kind(), ErrorKind::NotFound);
    assert_eq!(
        DomainError::ProjectFinished {
            project_name: String::from("Apollo")
        }
        .kind(),
        ErrorKind::Conflict
    );
    assert_eq!(
        DomainError::DuplicateHourLog {
            work_date: date!(2025 - 01 - 10),
            description: String::from("testing"),
        }
        .kind(),
        ErrorKind::Conflict
    );
    assert_eq!(
        DomainError::ConsultantUnavailable {
            name: String::from("Ada"),
            availability: Availability::Busy,
        }
        .kind(),
        ErrorKind::Conflict
    );
    assert_eq!(
        DomainError::DedicationExceeded {
            previous: 60,
            requested: 50,
            total: 110,
        }
        .kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        DomainError::NotAssigned {
            consultant_id: 1,
            project_id: 2,
        }
        .kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        DomainError::InvalidAvailability(String::from("asleep")).kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        DomainError::DateParseError {
            date_string: String::from("soon"),
            error: String::from("unrecognized format"),
        }
        .kind(),
        ErrorKind::InvalidInput
    );
}
