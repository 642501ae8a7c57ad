// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory store and fixtures for engine tests.

use crate::{
    AssignmentStore, ConsultantDirectory, CoreError, HourLogStore, ProjectDirectory,
    StaffingStore, StoreError,
};
use staffing_domain::{
    Assignment, AssignmentDraft, Availability, Consultant, HourLog, Project, ProjectState,
};
use time::Date;

/// A vector-backed store. `serialized` restores a snapshot on failure, the
/// same way a rolled-back transaction would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub consultants: Vec<Consultant>,
    pub projects: Vec<Project>,
    pub assignments: Vec<Assignment>,
    pub hour_logs: Vec<HourLog>,
    next_id: i64,
}

impl InMemoryStore {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn add_consultant(&mut self, name: &str, availability: Availability) -> i64 {
        let consultant_id: i64 = self.next_id();
        self.consultants.push(Consultant {
            consultant_id,
            name: name.to_string(),
            specialty: String::from("Backend"),
            availability,
            email: None,
            phone: None,
        });
        consultant_id
    }

    pub fn add_project(
        &mut self,
        state: ProjectState,
        start_date: Option<Date>,
        end_date: Option<Date>,
    ) -> i64 {
        let project_id: i64 = self.next_id();
        self.projects.push(Project {
            project_id,
            name: format!("Project {project_id}"),
            state,
            start_date,
            end_date,
        });
        project_id
    }

    /// Stores an assignment directly, bypassing validation.
    pub fn seed_assignment(&mut self, draft: AssignmentDraft) -> i64 {
        let assignment_id: i64 = self.next_id();
        self.assignments.push(draft.into_assignment(assignment_id));
        assignment_id
    }
}

impl ConsultantDirectory for InMemoryStore {
    fn consultant_by_id(&mut self, consultant_id: i64) -> Result<Option<Consultant>, StoreError> {
        Ok(self
            .consultants
            .iter()
            .find(|c| c.consultant_id == consultant_id)
            .cloned())
    }
}

impl ProjectDirectory for InMemoryStore {
    fn project_by_id(&mut self, project_id: i64) -> Result<Option<Project>, StoreError> {
        Ok(self
            .projects
            .iter()
            .find(|p| p.project_id == project_id)
            .cloned())
    }
}

impl AssignmentStore for InMemoryStore {
    fn existing_match(
        &mut self,
        consultant_id: i64,
        project_id: i64,
        role: Option<&str>,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(self
            .assignments
            .iter()
            .find(|a| {
                a.consultant_id == consultant_id
                    && a.project_id == project_id
                    && a.role.as_deref() == role
            })
            .cloned())
    }

    fn assignment_for(
        &mut self,
        consultant_id: i64,
        project_id: i64,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.consultant_id == consultant_id && a.project_id == project_id)
            .min_by_key(|a| a.assignment_id)
            .cloned())
    }

    fn assignment_by_id(&mut self, assignment_id: i64) -> Result<Option<Assignment>, StoreError> {
        Ok(self
            .assignments
            .iter()
            .find(|a| a.assignment_id == assignment_id)
            .cloned())
    }

    fn assignments_by_consultant(
        &mut self,
        consultant_id: i64,
    ) -> Result<Vec<Assignment>, StoreError> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.consultant_id == consultant_id)
            .cloned()
            .collect())
    }

    fn assignments_by_project(&mut self, project_id: i64) -> Result<Vec<Assignment>, StoreError> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.project_id == project_id)
            .cloned()
            .collect())
    }

    fn insert_assignment(&mut self, draft: &AssignmentDraft) -> Result<i64, StoreError> {
        Ok(self.seed_assignment(draft.clone()))
    }

    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError> {
        let slot: &mut Assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.assignment_id == assignment.assignment_id)
            .ok_or_else(|| StoreError::new("no such assignment"))?;
        *slot = assignment.clone();
        Ok(())
    }

    fn delete_assignment(&mut self, assignment_id: i64) -> Result<bool, StoreError> {
        let before: usize = self.assignments.len();
        self.assignments.retain(|a| a.assignment_id != assignment_id);
        Ok(self.assignments.len() != before)
    }
}

impl HourLogStore for InMemoryStore {
    fn hour_logs_by_consultant_and_project(
        &mut self,
        consultant_id: i64,
        project_id: i64,
    ) -> Result<Vec<HourLog>, StoreError> {
        Ok(self
            .hour_logs
            .iter()
            .filter(|l| l.consultant_id == consultant_id && l.project_id == project_id)
            .cloned()
            .collect())
    }

    fn hour_log_by_id(&mut self, hour_log_id: i64) -> Result<Option<HourLog>, StoreError> {
        Ok(self
            .hour_logs
            .iter()
            .find(|l| l.hour_log_id == hour_log_id)
            .cloned())
    }

    fn list_hour_logs(&mut self) -> Result<Vec<HourLog>, StoreError> {
        Ok(self.hour_logs.clone())
    }

    fn insert_hour_log(
        &mut self,
        consultant_id: i64,
        project_id: i64,
        work_date: Date,
        hours: f64,
        description: &str,
    ) -> Result<i64, StoreError> {
        let hour_log_id: i64 = self.next_id();
        self.hour_logs.push(HourLog {
            hour_log_id,
            project_id,
            consultant_id,
            work_date,
            hours,
            description: description.to_string(),
        });
        Ok(hour_log_id)
    }

    fn delete_hour_log(&mut self, hour_log_id: i64) -> Result<bool, StoreError> {
        let before: usize = self.hour_logs.len();
        self.hour_logs.retain(|l| l.hour_log_id != hour_log_id);
        Ok(self.hour_logs.len() != before)
    }
}

impl StaffingStore for InMemoryStore {
    fn serialized<T, F>(&mut self, operation: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Self) -> Result<T, CoreError>,
    {
        let snapshot: Self = self.clone();
        let result: Result<T, CoreError> = operation(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }
}

pub fn create_test_draft(
    consultant_id: i64,
    project_id: i64,
    dedication: Option<u8>,
    start_date: Date,
    end_date: Option<Date>,
) -> AssignmentDraft {
    AssignmentDraft {
        consultant_id,
        project_id,
        role: None,
        dedication,
        start_date,
        end_date,
    }
}

/// A store with one available consultant and one pending project.
pub fn create_test_store() -> (InMemoryStore, i64, i64) {
    let mut store: InMemoryStore = InMemoryStore::default();
    let consultant_id: i64 = store.add_consultant("Ada Lovelace", Availability::Available);
    let project_id: i64 = store.add_project(ProjectState::Pending, None, None);
    (store, consultant_id, project_id)
}
