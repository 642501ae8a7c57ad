// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the staffing allocation engine.
//!
//! This crate stores consultants, projects, assignments and hour logs in
//! `SQLite` through Diesel, and implements the engine's store traits on
//! [`Persistence`].
//!
//! ## Storage
//!
//! - Migrations are embedded and applied on every connection
//! - Foreign key enforcement is verified at startup
//! - File databases run in WAL mode
//! - Dates are stored as ISO 8601 `TEXT`
//!
//! ## Serialized sections
//!
//! `StaffingStore::serialized` runs inside a `BEGIN IMMEDIATE` transaction.
//! The write lock is held from the first read, so validation and the write
//! that follows it see the same committed state. Any error rolls back.
//!
//! ## Testing
//!
//! Every test opens its own shared-cache in-memory database through
//! [`Persistence::new_in_memory`].

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use staffing_domain::{Consultant, Project};
use std::path::Path;
use std::time::Duration;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod columns;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use data_models::{NewConsultant, NewProject};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` persistence adapter.
///
/// Implements [`staffing::StaffingStore`], so every engine operation can run
/// directly against it.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_staffing_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::open_connection(
            &shared_memory_url,
            backend::sqlite::DEFAULT_BUSY_TIMEOUT,
        )?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::open_connection(
            path_str,
            backend::sqlite::DEFAULT_BUSY_TIMEOUT,
        )?;

        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        info!(path = path_str, "Opened staffing database");
        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Sets how long this connection waits for another writer before a
    /// serialized section fails with a store error.
    ///
    /// # Errors
    ///
    /// Returns an error if the pragma fails.
    pub fn set_busy_timeout(&mut self, timeout: Duration) -> Result<(), PersistenceError> {
        backend::sqlite::set_busy_timeout(&mut self.conn, timeout)
    }

    // ========================================================================
    // Directory
    // ========================================================================

    /// Registers a consultant.
    ///
    /// # Returns
    ///
    /// The new consultant ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_consultant(&mut self, consultant: &NewConsultant) -> Result<i64, PersistenceError> {
        mutations::insert_consultant(&mut self.conn, consultant)
    }

    /// Retrieves a consultant by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_consultant(&mut self, consultant_id: i64) -> Result<Option<Consultant>, PersistenceError> {
        queries::get_consultant(&mut self.conn, consultant_id)
    }

    /// Lists all consultants.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_consultants(&mut self) -> Result<Vec<Consultant>, PersistenceError> {
        queries::list_consultants(&mut self.conn)
    }

    /// Registers a project.
    ///
    /// # Returns
    ///
    /// The new project ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_project(&mut self, project: &NewProject) -> Result<i64, PersistenceError> {
        mutations::insert_project(&mut self.conn, project)
    }

    /// Retrieves a project by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_project(&mut self, project_id: i64) -> Result<Option<Project>, PersistenceError> {
        queries::get_project(&mut self.conn, project_id)
    }

    /// Lists all projects.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_projects(&mut self) -> Result<Vec<Project>, PersistenceError> {
        queries::list_projects(&mut self.conn)
    }
}
