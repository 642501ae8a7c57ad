// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hour log queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use staffing_domain::HourLog;
use tracing::debug;

use crate::columns::parse_date;
use crate::diesel_schema::hour_logs;
use crate::error::PersistenceError;

/// Diesel Queryable struct for hour log rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = hour_logs)]
struct HourLogRow {
    hour_log_id: i64,
    project_id: i64,
    consultant_id: i64,
    work_date: String,
    hours: f64,
    description: String,
}

impl HourLogRow {
    fn into_hour_log(self) -> Result<HourLog, PersistenceError> {
        Ok(HourLog {
            hour_log_id: self.hour_log_id,
            project_id: self.project_id,
            consultant_id: self.consultant_id,
            work_date: parse_date("hour_logs.work_date", &self.work_date)?,
            hours: self.hours,
            description: self.description,
        })
    }
}

/// Lists the hour logs of a consultant on a project, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_hour_logs_for(
    conn: &mut SqliteConnection,
    consultant_id: i64,
    project_id: i64,
) -> Result<Vec<HourLog>, PersistenceError> {
    let rows: Vec<HourLogRow> = hour_logs::table
        .filter(hour_logs::consultant_id.eq(consultant_id))
        .filter(hour_logs::project_id.eq(project_id))
        .order(hour_logs::hour_log_id.asc())
        .select(HourLogRow::as_select())
        .load(conn)?;

    debug!(consultant_id, project_id, count = rows.len(), "Loaded hour logs");
    rows.into_iter().map(HourLogRow::into_hour_log).collect()
}

/// Retrieves an hour log by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the hour log is not found.
pub fn get_hour_log(
    conn: &mut SqliteConnection,
    hour_log_id: i64,
) -> Result<Option<HourLog>, PersistenceError> {
    hour_logs::table
        .filter(hour_logs::hour_log_id.eq(hour_log_id))
        .select(HourLogRow::as_select())
        .first(conn)
        .optional()?
        .map(HourLogRow::into_hour_log)
        .transpose()
}

/// Lists every hour log, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_hour_logs(conn: &mut SqliteConnection) -> Result<Vec<HourLog>, PersistenceError> {
    let rows: Vec<HourLogRow> = hour_logs::table
        .order(hour_logs::hour_log_id.asc())
        .select(HourLogRow::as_select())
        .load(conn)?;

    rows.into_iter().map(HourLogRow::into_hour_log).collect()
}
