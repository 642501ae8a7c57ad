// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resource-time allocation consistency engine.
//!
//! The engine guarantees that:
//!
//! - a consultant's committed dedication never exceeds 100% on any day
//! - assignments respect project lifecycle and project dates
//! - hour logs fall inside an assignment window and are never duplicated
//!
//! It reads and writes exclusively through the traits in [`store`], so any
//! persistence backend (or a test fake) can host it.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocation;
mod assignments;
mod error;
mod hours;
pub mod store;
mod validator;

#[cfg(test)]
mod tests;

pub use allocation::cumulative_dedication;
pub use assignments::{
    CreateAssignmentResult, create_assignment, dedication, delete_assignment,
    find_existing_assignment, get_assignment, list_assignments_by_consultant,
    list_assignments_by_project, update_assignment,
};
pub use error::{CoreError, StoreError};
pub use hours::{delete_hour_log, get_hour_log, list_hour_logs, list_hour_logs_for, register_hours};
pub use store::{AssignmentStore, ConsultantDirectory, HourLogStore, ProjectDirectory, StaffingStore};
pub use validator::validate_assignment;
