// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Assignment, Availability, Consultant, DomainError, HourLog, Project, ProjectState,
    check_assignment_not_duplicate, check_consultant_available, check_dedication_ceiling,
    check_hour_log_unique, check_project_admits, check_within_assignment, validate_date_order,
    validate_hours,
};
use time::Date;
use time::macros::date;

fn create_test_project(state: ProjectState, start: Option<Date>, end: Option<Date>) -> Project {
    Project {
        project_id: 10,
        name: String::from("Apollo"),
        state,
        start_date: start,
        end_date: end,
    }
}

fn create_test_consultant(availability: Availability) -> Consultant {
    Consultant {
        consultant_id: 1,
        name: String::from("Ada Lovelace"),
        specialty: String::from("Analytics"),
        availability,
        email: None,
        phone: None,
    }
}

fn create_test_assignment(start: Date, end: Option<Date>) -> Assignment {
    Assignment {
        assignment_id: 5,
        consultant_id: 1,
        project_id: 10,
        role: Some(String::from("architect")),
        dedication: Some(50),
        start_date: start,
        end_date: end,
    }
}

fn create_test_log(work_date: Date, description: &str) -> HourLog {
    HourLog {
        hour_log_id: 1,
        project_id: 10,
        consultant_id: 1,
        work_date,
        hours: 8.0,
        description: description.to_string(),
    }
}

#[test]
fn test_duplicate_assignment_is_rejected() {
    let existing: Assignment = create_test_assignment(date!(2025 - 01 - 01), None);
    let result: Result<(), DomainError> = check_assignment_not_duplicate(Some(&existing), None);
    assert!(matches!(
        result,
        Err(DomainError::DuplicateAssignment {
            existing_assignment_id: 5,
            ..
        })
    ));
}

#[test]
fn test_duplicate_assignment_excludes_itself() {
    let existing: Assignment = create_test_assignment(date!(2025 - 01 - 01), None);
    assert!(check_assignment_not_duplicate(Some(&existing), Some(5)).is_ok());
    assert!(check_assignment_not_duplicate(Some(&existing), Some(6)).is_err());
    assert!(check_assignment_not_duplicate(None, None).is_ok());
}

#[test]
fn test_date_order() {
    assert!(validate_date_order(date!(2025 - 01 - 01), None).is_ok());
    assert!(validate_date_order(date!(2025 - 01 - 01), Some(date!(2025 - 01 - 01))).is_ok());
    assert!(matches!(
        validate_date_order(date!(2025 - 01 - 02), Some(date!(2025 - 01 - 01))),
        Err(DomainError::EndBeforeStart { .. })
    ));
}

#[test]
fn test_finished_project_rejects_any_dates() {
    let project: Project = create_test_project(
        ProjectState::Finished,
        Some(date!(2024 - 01 - 01)),
        Some(date!(2024 - 12 - 31)),
    );
    assert!(matches!(
        check_project_admits(&project, date!(2024 - 02 - 01), Some(date!(2024 - 03 - 01))),
        Err(DomainError::ProjectFinished { .. })
    ));
}

#[test]
fn test_pending_project_skips_containment() {
    let project: Project = create_test_project(ProjectState::Pending, None, None);
    assert!(check_project_admits(&project, date!(1999 - 01 - 01), None).is_ok());
}

#[test]
fn test_active_project_requires_start_date() {
    let project: Project = create_test_project(ProjectState::Active, None, None);
    assert!(matches!(
        check_project_admits(&project, date!(2025 - 01 - 01), None),
        Err(DomainError::ProjectWithoutStartDate { .. })
    ));
}

#[test]
fn test_active_project_rejects_early_start() {
    let project: Project =
        create_test_project(ProjectState::Active, Some(date!(2025 - 02 - 01)), None);
    assert!(matches!(
        check_project_admits(&project, date!(2025 - 01 - 31), None),
        Err(DomainError::StartsBeforeProject { .. })
    ));
    assert!(check_project_admits(&project, date!(2025 - 02 - 01), None).is_ok());
}

#[test]
fn test_active_project_rejects_late_end() {
    let project: Project = create_test_project(
        ProjectState::Active,
        Some(date!(2025 - 01 - 01)),
        Some(date!(2025 - 06 - 30)),
    );
    assert!(matches!(
        check_project_admits(&project, date!(2025 - 02 - 01), Some(date!(2025 - 07 - 01))),
        Err(DomainError::EndsAfterProject { .. })
    ));
    assert!(
        check_project_admits(&project, date!(2025 - 02 - 01), Some(date!(2025 - 06 - 30))).is_ok()
    );
}

#[test]
fn test_active_project_accepts_open_ended_assignment() {
    let project: Project = create_test_project(
        ProjectState::Active,
        Some(date!(2025 - 01 - 01)),
        Some(date!(2025 - 06 - 30)),
    );
    assert!(check_project_admits(&project, date!(2025 - 02 - 01), None).is_ok());
}

#[test]
fn test_only_available_consultants_accept_assignments() {
    assert!(check_consultant_available(&create_test_consultant(Availability::Available)).is_ok());
    for availability in [
        Availability::Busy,
        Availability::OnBreak,
        Availability::Unavailable,
    ] {
        let result: Result<(), DomainError> =
            check_consultant_available(&create_test_consultant(availability));
        assert_eq!(
            result,
            Err(DomainError::ConsultantUnavailable {
                name: String::from("Ada Lovelace"),
                availability,
            })
        );
    }
}

#[test]
fn test_ceiling_allows_exactly_one_hundred() {
    assert_eq!(check_dedication_ceiling(60, 40), Ok(100));
    assert_eq!(check_dedication_ceiling(0, 0), Ok(0));
}

#[test]
fn test_ceiling_reports_previous_requested_total() {
    assert_eq!(
        check_dedication_ceiling(60, 50),
        Err(DomainError::DedicationExceeded {
            previous: 60,
            requested: 50,
            total: 110,
        })
    );
}

#[test]
fn test_hours_bounds() {
    assert_eq!(validate_hours(0.0), Err(DomainError::HoursNotPositive));
    assert_eq!(validate_hours(-1.5), Err(DomainError::HoursNotPositive));
    assert_eq!(validate_hours(f64::NAN), Err(DomainError::HoursNotPositive));
    assert_eq!(validate_hours(24.5), Err(DomainError::HoursExceedDay));
    assert!(validate_hours(0.25).is_ok());
    assert!(validate_hours(24.0).is_ok());
}

#[test]
fn test_work_date_within_assignment_window() {
    let assignment: Assignment =
        create_test_assignment(date!(2025 - 01 - 10), Some(date!(2025 - 01 - 20)));
    assert!(check_within_assignment(&assignment, date!(2025 - 01 - 15)).is_ok());
    assert!(check_within_assignment(&assignment, date!(2025 - 01 - 20)).is_ok());
    assert!(matches!(
        check_within_assignment(&assignment, date!(2025 - 01 - 25)),
        Err(DomainError::OutsideAssignmentRange { .. })
    ));
    assert!(matches!(
        check_within_assignment(&assignment, date!(2025 - 01 - 09)),
        Err(DomainError::OutsideAssignmentRange { .. })
    ));
}

#[test]
fn test_open_assignment_has_no_upper_bound() {
    let assignment: Assignment = create_test_assignment(date!(2025 - 01 - 10), None);
    assert!(check_within_assignment(&assignment, date!(2031 - 12 - 31)).is_ok());
}

#[test]
fn test_outside_range_reports_assignment_window() {
    let closed: Assignment =
        create_test_assignment(date!(2025 - 01 - 10), Some(date!(2025 - 01 - 20)));
    assert_eq!(
        check_within_assignment(&closed, date!(2025 - 01 - 25)),
        Err(DomainError::OutsideAssignmentRange {
            work_date: date!(2025 - 01 - 25),
            start_date: date!(2025 - 01 - 10),
            end_date: Some(date!(2025 - 01 - 20)),
        })
    );

    let open: Assignment = create_test_assignment(date!(2025 - 01 - 10), None);
    assert_eq!(
        check_within_assignment(&open, date!(2025 - 01 - 09)),
        Err(DomainError::OutsideAssignmentRange {
            work_date: date!(2025 - 01 - 09),
            start_date: date!(2025 - 01 - 10),
            end_date: None,
        })
    );
}

#[test]
fn test_hour_log_duplicate_ignores_case_and_whitespace() {
    let existing: Vec<HourLog> = vec![create_test_log(date!(2025 - 01 - 10), "Testing")];

    assert!(matches!(
        check_hour_log_unique(&existing, date!(2025 - 01 - 10), "testing "),
        Err(DomainError::DuplicateHourLog { .. })
    ));
    assert!(check_hour_log_unique(&existing, date!(2025 - 01 - 11), "Testing").is_ok());
    assert!(check_hour_log_unique(&existing, date!(2025 - 01 - 10), "Review").is_ok());
}
