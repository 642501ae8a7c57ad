// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `directory`: Consultant and project lookups
//! - `assignments`: Assignment lookups
//! - `hour_logs`: Hour log lookups

pub mod assignments;
pub mod directory;
pub mod hour_logs;

pub use assignments::{
    find_assignment_for, find_assignment_match, get_assignment, list_assignments_by_consultant,
    list_assignments_by_project,
};
pub use directory::{get_consultant, get_project, list_consultants, list_projects};
pub use hour_logs::{get_hour_log, list_hour_logs, list_hour_logs_for};
