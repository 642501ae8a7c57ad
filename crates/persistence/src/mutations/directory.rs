// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consultant and project registration.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::columns::format_optional_date;
use crate::data_models::{NewConsultant, NewProject};
use crate::diesel_schema::{consultants, projects};
use crate::error::PersistenceError;

/// Inserts a consultant.
///
/// # Returns
///
/// The new consultant ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_consultant(
    conn: &mut SqliteConnection,
    consultant: &NewConsultant,
) -> Result<i64, PersistenceError> {
    let consultant_id: i64 = diesel::insert_into(consultants::table)
        .values((
            consultants::name.eq(&consultant.name),
            consultants::specialty.eq(&consultant.specialty),
            consultants::availability.eq(consultant.availability.as_str()),
            consultants::email.eq(consultant.email.as_deref()),
            consultants::phone.eq(consultant.phone.as_deref()),
        ))
        .returning(consultants::consultant_id)
        .get_result(conn)?;

    info!(consultant_id, name = %consultant.name, "Created consultant");
    Ok(consultant_id)
}

/// Inserts a project.
///
/// # Returns
///
/// The new project ID.
///
/// # Errors
///
/// Returns an error if the insert fails, including a finished project
/// without an end date.
pub fn insert_project(
    conn: &mut SqliteConnection,
    project: &NewProject,
) -> Result<i64, PersistenceError> {
    let project_id: i64 = diesel::insert_into(projects::table)
        .values((
            projects::name.eq(&project.name),
            projects::state.eq(project.state.as_str()),
            projects::start_date.eq(format_optional_date(project.start_date)),
            projects::end_date.eq(format_optional_date(project.end_date)),
        ))
        .returning(projects::project_id)
        .get_result(conn)?;

    info!(project_id, name = %project.name, state = %project.state, "Created project");
    Ok(project_id)
}
