// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment orchestration.
//!
//! Mutations validate and write inside a single serialized store section, so
//! two concurrent requests cannot both pass the allocation ceiling before
//! either commits. Reads are plain pass-throughs.

use crate::allocation;
use crate::error::CoreError;
use crate::store::{AssignmentStore, StaffingStore};
use crate::validator::validate_assignment;
use staffing_domain::{Assignment, AssignmentDraft, DomainError};
use time::Date;
use tracing::{info, warn};

/// The outcome of a successful assignment creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAssignmentResult {
    /// A human-readable confirmation.
    pub message: String,
    /// The identifier of the new assignment.
    pub assignment_id: i64,
}

/// Validates and persists a new assignment.
///
/// # Errors
///
/// Returns the first failing validation rule, or a store error. Nothing is
/// written when validation fails.
pub fn create_assignment<S>(
    store: &mut S,
    draft: AssignmentDraft,
) -> Result<CreateAssignmentResult, CoreError>
where
    S: StaffingStore,
{
    let result: Result<i64, CoreError> = store.serialized(|store| {
        validate_assignment(store, &draft, None)?;
        Ok(store.insert_assignment(&draft)?)
    });

    match result {
        Ok(assignment_id) => {
            info!(
                assignment_id,
                consultant_id = draft.consultant_id,
                project_id = draft.project_id,
                dedication = draft.dedication_or_zero(),
                "Assignment created"
            );
            Ok(CreateAssignmentResult {
                message: format!(
                    "Assignment {assignment_id} created for consultant {} on project {}",
                    draft.consultant_id, draft.project_id
                ),
                assignment_id,
            })
        }
        Err(err) => {
            warn!(
                consultant_id = draft.consultant_id,
                project_id = draft.project_id,
                error = %err,
                "Assignment creation rejected"
            );
            Err(err)
        }
    }
}

/// Re-validates and overwrites an existing assignment.
///
/// The assignment's own stored record never counts as a duplicate of the
/// new values.
///
/// # Errors
///
/// Returns `DomainError::AssignmentNotFound` if the identifier does not
/// resolve, otherwise the first failing validation rule or a store error.
pub fn update_assignment<S>(
    store: &mut S,
    assignment_id: i64,
    draft: AssignmentDraft,
) -> Result<Assignment, CoreError>
where
    S: StaffingStore,
{
    let result: Result<Assignment, CoreError> = store.serialized(|store| {
        if store.assignment_by_id(assignment_id)?.is_none() {
            return Err(DomainError::AssignmentNotFound(assignment_id).into());
        }

        validate_assignment(store, &draft, Some(assignment_id))?;

        let updated: Assignment = draft.into_assignment(assignment_id);
        store.update_assignment(&updated)?;
        Ok(updated)
    });

    match &result {
        Ok(updated) => info!(
            assignment_id,
            consultant_id = updated.consultant_id,
            project_id = updated.project_id,
            "Assignment updated"
        ),
        Err(err) => warn!(assignment_id, error = %err, "Assignment update rejected"),
    }

    result
}

/// Deletes an assignment.
///
/// # Errors
///
/// Returns `DomainError::AssignmentNotFound` if nothing was deleted, or a
/// store error.
pub fn delete_assignment<S>(store: &mut S, assignment_id: i64) -> Result<(), CoreError>
where
    S: AssignmentStore + ?Sized,
{
    if !store.delete_assignment(assignment_id)? {
        return Err(DomainError::AssignmentNotFound(assignment_id).into());
    }
    info!(assignment_id, "Assignment deleted");
    Ok(())
}

/// Looks up an assignment.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_assignment<S>(store: &mut S, assignment_id: i64) -> Result<Option<Assignment>, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    Ok(store.assignment_by_id(assignment_id)?)
}

/// Lists the assignments of a consultant.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_assignments_by_consultant<S>(
    store: &mut S,
    consultant_id: i64,
) -> Result<Vec<Assignment>, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    Ok(store.assignments_by_consultant(consultant_id)?)
}

/// Lists the assignments on a project.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_assignments_by_project<S>(
    store: &mut S,
    project_id: i64,
) -> Result<Vec<Assignment>, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    Ok(store.assignments_by_project(project_id)?)
}

/// Finds the assignment holding a (consultant, project, role) slot.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn find_existing_assignment<S>(
    store: &mut S,
    consultant_id: i64,
    project_id: i64,
    role: Option<&str>,
) -> Result<Option<Assignment>, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    Ok(store.existing_match(consultant_id, project_id, role)?)
}

/// Returns a consultant's committed dedication over a window.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn dedication<S>(
    store: &mut S,
    consultant_id: i64,
    window_start: Date,
    window_end: Option<Date>,
) -> Result<u32, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    allocation::cumulative_dedication(store, consultant_id, window_start, window_end)
}
