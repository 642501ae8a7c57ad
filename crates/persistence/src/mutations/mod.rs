// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `directory`: Consultant and project registration
//! - `assignments`: Assignment insert, update and delete
//! - `hour_logs`: Hour log insert and delete
//!
//! None of these enforce business rules; the engine validates before it
//! writes.

pub mod assignments;
pub mod directory;
pub mod hour_logs;

pub use assignments::{delete_assignment, insert_assignment, update_assignment};
pub use directory::{insert_consultant, insert_project};
pub use hour_logs::{delete_hour_log, insert_hour_log};
