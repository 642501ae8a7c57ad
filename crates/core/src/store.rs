// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store interfaces consumed by the engine.
//!
//! The engine never builds queries itself. Each trait is the narrow set of
//! reads and writes one part of the engine needs; `StaffingStore` bundles
//! them with a serialized section for read-then-write pipelines.

use crate::error::{CoreError, StoreError};
use staffing_domain::{Assignment, AssignmentDraft, Consultant, HourLog, Project};
use time::Date;

/// Consultant lookups.
pub trait ConsultantDirectory {
    /// Looks up a consultant.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails. A missing consultant is `Ok(None)`.
    fn consultant_by_id(&mut self, consultant_id: i64) -> Result<Option<Consultant>, StoreError>;
}

/// Project lookups.
pub trait ProjectDirectory {
    /// Looks up a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails. A missing project is `Ok(None)`.
    fn project_by_id(&mut self, project_id: i64) -> Result<Option<Project>, StoreError>;
}

/// Assignment reads and writes.
///
/// All methods return an error only when the store itself fails.
#[allow(clippy::missing_errors_doc)]
pub trait AssignmentStore {
    /// Finds the assignment with exactly this consultant, project and role.
    ///
    /// A `None` role only matches assignments without a role.
    fn existing_match(
        &mut self,
        consultant_id: i64,
        project_id: i64,
        role: Option<&str>,
    ) -> Result<Option<Assignment>, StoreError>;

    /// Finds any assignment of the consultant on the project, regardless of
    /// role. When several exist, the one with the lowest identifier is
    /// returned.
    fn assignment_for(
        &mut self,
        consultant_id: i64,
        project_id: i64,
    ) -> Result<Option<Assignment>, StoreError>;

    /// Looks up an assignment by identifier.
    fn assignment_by_id(&mut self, assignment_id: i64) -> Result<Option<Assignment>, StoreError>;

    /// Lists every assignment of a consultant.
    fn assignments_by_consultant(
        &mut self,
        consultant_id: i64,
    ) -> Result<Vec<Assignment>, StoreError>;

    /// Lists every assignment on a project.
    fn assignments_by_project(&mut self, project_id: i64) -> Result<Vec<Assignment>, StoreError>;

    /// Inserts a new assignment and returns its identifier.
    fn insert_assignment(&mut self, draft: &AssignmentDraft) -> Result<i64, StoreError>;

    /// Overwrites every field of an existing assignment.
    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError>;

    /// Deletes an assignment. Returns whether a record was removed.
    fn delete_assignment(&mut self, assignment_id: i64) -> Result<bool, StoreError>;
}

/// Hour log reads and writes.
///
/// All methods return an error only when the store itself fails.
#[allow(clippy::missing_errors_doc)]
pub trait HourLogStore {
    /// Lists the logs of a consultant on a project.
    fn hour_logs_by_consultant_and_project(
        &mut self,
        consultant_id: i64,
        project_id: i64,
    ) -> Result<Vec<HourLog>, StoreError>;

    /// Looks up a log by identifier.
    fn hour_log_by_id(&mut self, hour_log_id: i64) -> Result<Option<HourLog>, StoreError>;

    /// Lists every log.
    fn list_hour_logs(&mut self) -> Result<Vec<HourLog>, StoreError>;

    /// Inserts a log and returns its identifier.
    fn insert_hour_log(
        &mut self,
        consultant_id: i64,
        project_id: i64,
        work_date: Date,
        hours: f64,
        description: &str,
    ) -> Result<i64, StoreError>;

    /// Deletes a log. Returns whether a record was removed.
    fn delete_hour_log(&mut self, hour_log_id: i64) -> Result<bool, StoreError>;
}

/// The full store consumed by the engine's mutating pipelines.
pub trait StaffingStore: ConsultantDirectory + ProjectDirectory + AssignmentStore + HourLogStore {
    /// Runs `operation` so that no other writer interleaves with it.
    ///
    /// Implementations must discard every write made by `operation` when it
    /// returns an error.
    ///
    /// # Errors
    ///
    /// Returns the error of `operation`, or a store error if the section
    /// cannot be opened or committed.
    fn serialized<T, F>(&mut self, operation: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Self) -> Result<T, CoreError>;
}
