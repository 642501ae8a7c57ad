// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine store traits implemented over `SQLite`.

use staffing::{
    AssignmentStore, ConsultantDirectory, CoreError, HourLogStore, ProjectDirectory,
    StaffingStore, StoreError,
};
use staffing_domain::{Assignment, AssignmentDraft, Consultant, HourLog, Project};
use time::Date;
use tracing::warn;

use crate::Persistence;
use crate::backend::sqlite;
use crate::error::PersistenceError;
use crate::{mutations, queries};

impl ConsultantDirectory for Persistence {
    fn consultant_by_id(&mut self, consultant_id: i64) -> Result<Option<Consultant>, StoreError> {
        Ok(queries::get_consultant(&mut self.conn, consultant_id)?)
    }
}

impl ProjectDirectory for Persistence {
    fn project_by_id(&mut self, project_id: i64) -> Result<Option<Project>, StoreError> {
        Ok(queries::get_project(&mut self.conn, project_id)?)
    }
}

impl AssignmentStore for Persistence {
    fn existing_match(
        &mut self,
        consultant_id: i64,
        project_id: i64,
        role: Option<&str>,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(queries::find_assignment_match(
            &mut self.conn,
            consultant_id,
            project_id,
            role,
        )?)
    }

    fn assignment_for(
        &mut self,
        consultant_id: i64,
        project_id: i64,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(queries::find_assignment_for(
            &mut self.conn,
            consultant_id,
            project_id,
        )?)
    }

    fn assignment_by_id(&mut self, assignment_id: i64) -> Result<Option<Assignment>, StoreError> {
        Ok(queries::get_assignment(&mut self.conn, assignment_id)?)
    }

    fn assignments_by_consultant(
        &mut self,
        consultant_id: i64,
    ) -> Result<Vec<Assignment>, StoreError> {
        Ok(queries::list_assignments_by_consultant(
            &mut self.conn,
            consultant_id,
        )?)
    }

    fn assignments_by_project(&mut self, project_id: i64) -> Result<Vec<Assignment>, StoreError> {
        Ok(queries::list_assignments_by_project(
            &mut self.conn,
            project_id,
        )?)
    }

    fn insert_assignment(&mut self, draft: &AssignmentDraft) -> Result<i64, StoreError> {
        Ok(mutations::insert_assignment(&mut self.conn, draft)?)
    }

    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError> {
        Ok(mutations::update_assignment(&mut self.conn, assignment)?)
    }

    fn delete_assignment(&mut self, assignment_id: i64) -> Result<bool, StoreError> {
        Ok(mutations::delete_assignment(&mut self.conn, assignment_id)?)
    }
}

impl HourLogStore for Persistence {
    fn hour_logs_by_consultant_and_project(
        &mut self,
        consultant_id: i64,
        project_id: i64,
    ) -> Result<Vec<HourLog>, StoreError> {
        Ok(queries::list_hour_logs_for(
            &mut self.conn,
            consultant_id,
            project_id,
        )?)
    }

    fn hour_log_by_id(&mut self, hour_log_id: i64) -> Result<Option<HourLog>, StoreError> {
        Ok(queries::get_hour_log(&mut self.conn, hour_log_id)?)
    }

    fn list_hour_logs(&mut self) -> Result<Vec<HourLog>, StoreError> {
        Ok(queries::list_hour_logs(&mut self.conn)?)
    }

    fn insert_hour_log(
        &mut self,
        consultant_id: i64,
        project_id: i64,
        work_date: Date,
        hours: f64,
        description: &str,
    ) -> Result<i64, StoreError> {
        Ok(mutations::insert_hour_log(
            &mut self.conn,
            consultant_id,
            project_id,
            work_date,
            hours,
            description,
        )?)
    }

    fn delete_hour_log(&mut self, hour_log_id: i64) -> Result<bool, StoreError> {
        Ok(mutations::delete_hour_log(&mut self.conn, hour_log_id)?)
    }
}

impl StaffingStore for Persistence {
    fn serialized<T, F>(&mut self, operation: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Self) -> Result<T, CoreError>,
    {
        sqlite::begin_immediate(&mut self.conn).map_err(store_error)?;

        match operation(self) {
            Ok(value) => {
                sqlite::commit(&mut self.conn).map_err(store_error)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = sqlite::rollback(&mut self.conn) {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}

fn store_error(err: PersistenceError) -> CoreError {
    CoreError::Store(StoreError::from(err))
}
