// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup and write locking.
//!
//! Every connection goes through [`open_connection`], which applies the
//! pragmas the store depends on and brings the schema up to date. Pragmas
//! and transaction control are raw SQL because Diesel has no DSL for them.

use std::time::Duration;

use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Embedded schema migrations.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How long a connection waits for another writer's lock before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

fn apply_pragma(conn: &mut SqliteConnection, pragma: &str) -> Result<(), PersistenceError> {
    debug!(pragma, "Applying PRAGMA");
    diesel::sql_query(format!("PRAGMA {pragma}"))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("PRAGMA {pragma}: {e}")))?;
    Ok(())
}

/// Opens a connection, enables foreign keys and runs pending migrations.
///
/// # Arguments
///
/// * `database_url` - A file path or an `SQLite` URI such as
///   `file:name?mode=memory&cache=shared`
/// * `busy_timeout` - How long to wait on a locked database
///
/// # Errors
///
/// Returns an error if the connection cannot be established, a pragma fails
/// or a migration fails.
pub fn open_connection(
    database_url: &str,
    busy_timeout: Duration,
) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Opening SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    apply_pragma(&mut conn, "foreign_keys = ON")?;
    set_busy_timeout(&mut conn, busy_timeout)?;

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    info!(applied, "Schema migrations up to date");

    Ok(conn)
}

/// Sets how long the connection waits for a competing lock.
///
/// # Errors
///
/// Returns an error if the pragma fails.
pub fn set_busy_timeout(
    conn: &mut SqliteConnection,
    timeout: Duration,
) -> Result<(), PersistenceError> {
    apply_pragma(conn, &format!("busy_timeout = {}", timeout.as_millis()))
}

/// Switches a file database to write-ahead logging.
///
/// # Errors
///
/// Returns an error if the pragma fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    apply_pragma(conn, "journal_mode = WAL")
}

/// Fails unless `PRAGMA foreign_keys` reports enforcement on this connection.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyEnforcementNotEnabled` if it is off,
/// or an error if the pragma cannot be read.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: ForeignKeysPragma =
        diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;

    if pragma.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }
    Ok(())
}

/// Opens a transaction that takes the database write lock up front.
///
/// A deferred transaction only locks on its first write, which would let two
/// connections read the same committed dedication before either inserts.
///
/// # Errors
///
/// Returns an error if the lock cannot be acquired within the busy timeout.
pub fn begin_immediate(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    debug!("BEGIN IMMEDIATE");
    AnsiTransactionManager::begin_transaction_sql(conn, "BEGIN IMMEDIATE")?;
    Ok(())
}

/// Commits the transaction opened by [`begin_immediate`].
///
/// # Errors
///
/// Returns an error if the commit fails.
pub fn commit(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    AnsiTransactionManager::commit_transaction(conn)?;
    Ok(())
}

/// Rolls back the transaction opened by [`begin_immediate`].
///
/// # Errors
///
/// Returns an error if the rollback fails.
pub fn rollback(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    debug!("ROLLBACK");
    AnsiTransactionManager::rollback_transaction(conn)?;
    Ok(())
}
