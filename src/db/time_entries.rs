//! `timeEntries` collection.

use crate::db::db_utils::{conversion_error, map_constraint};
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::{parse_iso, to_iso};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, Row, params};

fn parse_column(col: usize, raw: &str) -> Result<DateTime<Utc>> {
    parse_iso(raw).ok_or_else(|| conversion_error(col, AppError::InvalidTimestamp(raw.to_string())))
}

pub fn map_row(row: &Row) -> Result<TimeEntry> {
    let start_str: String = row.get("startTime")?;
    let end_str: Option<String> = row.get("endTime")?;

    let start_time = parse_column(2, &start_str)?;
    let end_time = match end_str {
        Some(s) => Some(parse_column(3, &s)?),
        None => None,
    };

    Ok(TimeEntry {
        id: row.get("id")?,
        task_alias: row.get("taskAlias")?,
        start_time,
        end_time,
    })
}

pub fn list_time_entries(conn: &Connection) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, taskAlias, startTime, endTime FROM timeEntries ORDER BY id",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries logged against one alias, using the `taskAlias` index.
pub fn list_by_alias(conn: &Connection, alias: &str) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, taskAlias, startTime, endTime FROM timeEntries
         WHERE taskAlias = ?1
         ORDER BY startTime DESC",
    )?;
    let rows = stmt.query_map([alias], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_time_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO timeEntries (id, taskAlias, startTime, endTime) VALUES (?1, ?2, ?3, ?4)",
        params![
            entry.id,
            entry.task_alias,
            to_iso(&entry.start_time),
            entry.end_time.as_ref().map(to_iso),
        ],
    )
    .map_err(|e| map_constraint(e, &format!("time entry '{}'", entry.id)))?;
    Ok(())
}

/// Upsert by id.
pub fn upsert_time_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO timeEntries (id, taskAlias, startTime, endTime) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
             taskAlias = excluded.taskAlias,
             startTime = excluded.startTime,
             endTime = excluded.endTime",
        params![
            entry.id,
            entry.task_alias,
            to_iso(&entry.start_time),
            entry.end_time.as_ref().map(to_iso),
        ],
    )?;
    Ok(())
}

/// Remove by id; an unknown id is not an error.
pub fn delete_time_entry(conn: &Connection, id: &str) -> AppResult<()> {
    conn.execute("DELETE FROM timeEntries WHERE id = ?1", [id])?;
    Ok(())
}

pub fn count_time_entries(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM timeEntries", [], |row| row.get(0))
}

pub fn count_running(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM timeEntries WHERE endTime IS NULL",
        [],
        |row| row.get(0),
    )
}
