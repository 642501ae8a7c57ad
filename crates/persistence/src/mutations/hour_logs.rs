// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hour log mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Date;
use tracing::{debug, info};

use crate::columns::format_date;
use crate::diesel_schema::hour_logs;
use crate::error::PersistenceError;

/// Inserts an hour log.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `consultant_id` - The consultant who worked
/// * `project_id` - The project worked on
/// * `work_date` - Calendar day of the work
/// * `hours` - Hours worked
/// * `description` - Trimmed activity description
///
/// # Returns
///
/// The new hour log ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_hour_log(
    conn: &mut SqliteConnection,
    consultant_id: i64,
    project_id: i64,
    work_date: Date,
    hours: f64,
    description: &str,
) -> Result<i64, PersistenceError> {
    let hour_log_id: i64 = diesel::insert_into(hour_logs::table)
        .values((
            hour_logs::consultant_id.eq(consultant_id),
            hour_logs::project_id.eq(project_id),
            hour_logs::work_date.eq(format_date(work_date)),
            hour_logs::hours.eq(hours),
            hour_logs::description.eq(description),
        ))
        .returning(hour_logs::hour_log_id)
        .get_result(conn)?;

    debug!(hour_log_id, "Inserted hour log row");
    Ok(hour_log_id)
}

/// Deletes an hour log.
///
/// # Returns
///
/// Whether a row was deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_hour_log(
    conn: &mut SqliteConnection,
    hour_log_id: i64,
) -> Result<bool, PersistenceError> {
    let deleted: usize = diesel::delete(hour_logs::table)
        .filter(hour_logs::hour_log_id.eq(hour_log_id))
        .execute(conn)?;

    if deleted > 0 {
        info!(hour_log_id, "Deleted hour log row");
    }
    Ok(deleted > 0)
}
