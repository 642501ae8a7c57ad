// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment queries.
//!
//! Every list is ordered by `assignment_id` so callers see insertion order.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffing_domain::Assignment;
use tracing::debug;

use crate::columns::{parse_date, parse_dedication, parse_optional_date};
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

/// Diesel Queryable struct for assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = assignments)]
struct AssignmentRow {
    assignment_id: i64,
    consultant_id: i64,
    project_id: i64,
    role: Option<String>,
    dedication: Option<i32>,
    start_date: String,
    end_date: Option<String>,
}

impl AssignmentRow {
    fn into_assignment(self) -> Result<Assignment, PersistenceError> {
        Ok(Assignment {
            assignment_id: self.assignment_id,
            consultant_id: self.consultant_id,
            project_id: self.project_id,
            role: self.role,
            dedication: parse_dedication(self.dedication)?,
            start_date: parse_date("assignments.start_date", &self.start_date)?,
            end_date: parse_optional_date("assignments.end_date", self.end_date.as_deref())?,
        })
    }
}

fn collect(rows: Vec<AssignmentRow>) -> Result<Vec<Assignment>, PersistenceError> {
    rows.into_iter().map(AssignmentRow::into_assignment).collect()
}

/// Finds the assignment holding a (consultant, project, role) slot.
///
/// Uses SQL `IS` so that a `None` role matches only rows whose role is
/// `NULL`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_assignment_match(
    conn: &mut SqliteConnection,
    consultant_id: i64,
    project_id: i64,
    role: Option<&str>,
) -> Result<Option<Assignment>, PersistenceError> {
    debug!(consultant_id, project_id, ?role, "Looking up assignment slot");

    assignments::table
        .filter(assignments::consultant_id.eq(consultant_id))
        .filter(assignments::project_id.eq(project_id))
        .filter(assignments::role.is(role))
        .order(assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?
        .map(AssignmentRow::into_assignment)
        .transpose()
}

/// Finds the lowest-numbered assignment of a consultant on a project, any
/// role.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_assignment_for(
    conn: &mut SqliteConnection,
    consultant_id: i64,
    project_id: i64,
) -> Result<Option<Assignment>, PersistenceError> {
    debug!(consultant_id, project_id, "Looking up assignment for hours");

    assignments::table
        .filter(assignments::consultant_id.eq(consultant_id))
        .filter(assignments::project_id.eq(project_id))
        .order(assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?
        .map(AssignmentRow::into_assignment)
        .transpose()
}

/// Retrieves an assignment by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the assignment is not found.
pub fn get_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<Option<Assignment>, PersistenceError> {
    assignments::table
        .filter(assignments::assignment_id.eq(assignment_id))
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?
        .map(AssignmentRow::into_assignment)
        .transpose()
}

/// Lists every assignment of a consultant.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assignments_by_consultant(
    conn: &mut SqliteConnection,
    consultant_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::consultant_id.eq(consultant_id))
        .order(assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .load(conn)?;

    debug!(consultant_id, count = rows.len(), "Loaded consultant assignments");
    collect(rows)
}

/// Lists every assignment on a project.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assignments_by_project(
    conn: &mut SqliteConnection,
    project_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::project_id.eq(project_id))
        .order(assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .load(conn)?;

    collect(rows)
}
