// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffing_domain::{Assignment, AssignmentDraft};
use tracing::{debug, info};

use crate::columns::{format_date, format_optional_date};
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

/// Inserts an assignment.
///
/// # Returns
///
/// The new assignment ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_assignment(
    conn: &mut SqliteConnection,
    draft: &AssignmentDraft,
) -> Result<i64, PersistenceError> {
    let assignment_id: i64 = diesel::insert_into(assignments::table)
        .values((
            assignments::consultant_id.eq(draft.consultant_id),
            assignments::project_id.eq(draft.project_id),
            assignments::role.eq(draft.role.as_deref()),
            assignments::dedication.eq(draft.dedication.map(i32::from)),
            assignments::start_date.eq(format_date(draft.start_date)),
            assignments::end_date.eq(format_optional_date(draft.end_date)),
        ))
        .returning(assignments::assignment_id)
        .get_result(conn)?;

    debug!(assignment_id, "Inserted assignment row");
    Ok(assignment_id)
}

/// Overwrites every field of an assignment.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row has the assignment ID, or
/// an error if the update fails.
pub fn update_assignment(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(assignments::table)
        .filter(assignments::assignment_id.eq(assignment.assignment_id))
        .set((
            assignments::consultant_id.eq(assignment.consultant_id),
            assignments::project_id.eq(assignment.project_id),
            assignments::role.eq(assignment.role.as_deref()),
            assignments::dedication.eq(assignment.dedication.map(i32::from)),
            assignments::start_date.eq(format_date(assignment.start_date)),
            assignments::end_date.eq(format_optional_date(assignment.end_date)),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Assignment {}",
            assignment.assignment_id
        )));
    }

    debug!(assignment_id = assignment.assignment_id, "Updated assignment row");
    Ok(())
}

/// Deletes an assignment.
///
/// # Returns
///
/// Whether a row was deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<bool, PersistenceError> {
    let deleted: usize = diesel::delete(assignments::table)
        .filter(assignments::assignment_id.eq(assignment_id))
        .execute(conn)?;

    if deleted > 0 {
        info!(assignment_id, "Deleted assignment row");
    }
    Ok(deleted > 0)
}
