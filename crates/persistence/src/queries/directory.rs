// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consultant and project queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffing_domain::{Availability, Consultant, Project, ProjectState};
use tracing::debug;

use crate::columns::{parse_label, parse_optional_date};
use crate::diesel_schema::{consultants, projects};
use crate::error::PersistenceError;

/// Diesel Queryable struct for consultant rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = consultants)]
struct ConsultantRow {
    consultant_id: i64,
    name: String,
    specialty: String,
    availability: String,
    email: Option<String>,
    phone: Option<String>,
}

impl ConsultantRow {
    fn into_consultant(self) -> Result<Consultant, PersistenceError> {
        let availability: Availability =
            parse_label("consultants.availability", &self.availability)?;
        Ok(Consultant {
            consultant_id: self.consultant_id,
            name: self.name,
            specialty: self.specialty,
            availability,
            email: self.email,
            phone: self.phone,
        })
    }
}

/// Diesel Queryable struct for project rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = projects)]
struct ProjectRow {
    project_id: i64,
    name: String,
    state: String,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl ProjectRow {
    fn into_project(self) -> Result<Project, PersistenceError> {
        let state: ProjectState = parse_label("projects.state", &self.state)?;
        Ok(Project {
            project_id: self.project_id,
            name: self.name,
            state,
            start_date: parse_optional_date("projects.start_date", self.start_date.as_deref())?,
            end_date: parse_optional_date("projects.end_date", self.end_date.as_deref())?,
        })
    }
}

/// Retrieves a consultant by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the consultant is not found.
pub fn get_consultant(
    conn: &mut SqliteConnection,
    consultant_id: i64,
) -> Result<Option<Consultant>, PersistenceError> {
    debug!(consultant_id, "Looking up consultant");

    consultants::table
        .filter(consultants::consultant_id.eq(consultant_id))
        .select(ConsultantRow::as_select())
        .first(conn)
        .optional()?
        .map(ConsultantRow::into_consultant)
        .transpose()
}

/// Lists all consultants ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_consultants(conn: &mut SqliteConnection) -> Result<Vec<Consultant>, PersistenceError> {
    let rows: Vec<ConsultantRow> = consultants::table
        .order(consultants::consultant_id.asc())
        .select(ConsultantRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ConsultantRow::into_consultant).collect()
}

/// Retrieves a project by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the project is not found.
pub fn get_project(
    conn: &mut SqliteConnection,
    project_id: i64,
) -> Result<Option<Project>, PersistenceError> {
    debug!(project_id, "Looking up project");

    projects::table
        .filter(projects::project_id.eq(project_id))
        .select(ProjectRow::as_select())
        .first(conn)
        .optional()?
        .map(ProjectRow::into_project)
        .transpose()
}

/// Lists all projects ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_projects(conn: &mut SqliteConnection) -> Result<Vec<Project>, PersistenceError> {
    let rows: Vec<ProjectRow> = projects::table
        .order(projects::project_id.asc())
        .select(ProjectRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ProjectRow::into_project).collect()
}
