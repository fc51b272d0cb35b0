//! Schema versioning.
//!
//! The version lives in `PRAGMA user_version`. Version 1 is the layout
//! below; it must stay compatible with already existing local data.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema version this build reads and writes.
pub const SCHEMA_VERSION: i32 = 1;

const SCHEMA_V1: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id     TEXT PRIMARY KEY NOT NULL,
        name   TEXT NOT NULL,
        alias  TEXT NOT NULL,
        folder TEXT
    );
    CREATE UNIQUE INDEX IF NOT EXISTS tasks_alias ON tasks(alias);

    CREATE TABLE IF NOT EXISTS timeEntries (
        id        TEXT PRIMARY KEY NOT NULL,
        taskAlias TEXT NOT NULL,
        startTime TEXT NOT NULL,
        endTime   TEXT
    );
    CREATE INDEX IF NOT EXISTS timeEntries_taskAlias ON timeEntries(taskAlias);
"#;

/// Ensure that the audit `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Read the stored schema version (0 for a brand new file).
pub fn schema_version(conn: &Connection) -> Result<i32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Provision both collections and their indexes, then stamp version 1.
fn migrate_to_v1(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(SCHEMA_V1)?;
    tx.pragma_update(None, "user_version", 1)?;
    tx.commit()
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Refuse layouts written by a newer build
    let current = schema_version(conn)?;
    if current > SCHEMA_VERSION {
        return Err(AppError::StorageUnavailable(format!(
            "database schema version {} is newer than supported version {}",
            current, SCHEMA_VERSION
        )));
    }

    // 3) Provision collections
    if current < 1 {
        let had_data = table_exists(conn, "tasks")? || table_exists(conn, "timeEntries")?;
        if had_data {
            warning("Unversioned schema detected, upgrading in place (records are kept).");
        }

        migrate_to_v1(conn)?;

        if let Err(e) = ttlog(
            conn,
            "migration_applied",
            "schema_v1",
            "Created tasks and timeEntries collections",
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
        success("Database schema ready (version 1).");
    }

    Ok(())
}
