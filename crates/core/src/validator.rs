// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment consistency validation.
//!
//! Checks run strictly in this order, and the first failure is returned:
//!
//! 1. consultant exists
//! 2. project exists
//! 3. no other assignment holds the same (consultant, project, role)
//! 4. end date is not before start date
//! 5. project state admits assignments (finished projects never do)
//! 6. active projects contain the assignment dates
//! 7. consultant is available
//! 8. cumulative dedication stays within 100%
//!
//! Later checks rely on earlier ones: containment needs the resolved project,
//! the ceiling needs ordered dates.

use crate::allocation::cumulative_dedication;
use crate::error::CoreError;
use crate::store::{AssignmentStore, ConsultantDirectory, ProjectDirectory};
use staffing_domain::{
    Assignment, AssignmentDraft, Consultant, DomainError, Project, check_assignment_not_duplicate,
    check_consultant_available, check_dedication_ceiling, check_project_admits,
    validate_date_order,
};
use tracing::debug;

/// Validates a candidate assignment against every consistency rule.
///
/// # Arguments
///
/// * `store` - The store to read consultants, projects and assignments from
/// * `candidate` - The assignment being created or updated
/// * `exclude_assignment_id` - On update, the assignment's own identifier so
///   its stored record is not reported as a duplicate
///
/// # Errors
///
/// Returns the first failing rule as `CoreError::DomainViolation`, or a store
/// error.
pub fn validate_assignment<S>(
    store: &mut S,
    candidate: &AssignmentDraft,
    exclude_assignment_id: Option<i64>,
) -> Result<(), CoreError>
where
    S: ConsultantDirectory + ProjectDirectory + AssignmentStore + ?Sized,
{
    debug!(
        consultant_id = candidate.consultant_id,
        project_id = candidate.project_id,
        ?exclude_assignment_id,
        "Validating assignment"
    );

    let consultant: Consultant = store
        .consultant_by_id(candidate.consultant_id)?
        .ok_or(DomainError::ConsultantNotFound(candidate.consultant_id))?;

    let project: Project = store
        .project_by_id(candidate.project_id)?
        .ok_or(DomainError::ProjectNotFound(candidate.project_id))?;

    let existing: Option<Assignment> = store.existing_match(
        candidate.consultant_id,
        candidate.project_id,
        candidate.role.as_deref(),
    )?;
    check_assignment_not_duplicate(existing.as_ref(), exclude_assignment_id)?;

    validate_date_order(candidate.start_date, candidate.end_date)?;

    check_project_admits(&project, candidate.start_date, candidate.end_date)?;

    check_consultant_available(&consultant)?;

    // The ceiling counts every overlapping record, including the stored
    // version of an assignment being updated.
    let previous: u32 = cumulative_dedication(
        store,
        candidate.consultant_id,
        candidate.start_date,
        candidate.end_date,
    )?;
    let total: u32 = check_dedication_ceiling(previous, candidate.dedication_or_zero())?;

    debug!(
        consultant_id = candidate.consultant_id,
        previous, total, "Assignment passed validation"
    );

    Ok(())
}
