//! `tasks` collection.

use crate::db::db_utils::map_constraint;
use crate::errors::AppResult;
use crate::models::task::Task;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        name: row.get("name")?,
        alias: row.get("alias")?,
        folder: row.get("folder")?,
    })
}

pub fn list_tasks(conn: &Connection) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, alias, folder FROM tasks ORDER BY id")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new task; a taken id or alias is reported as `DuplicateKey`.
pub fn insert_task(conn: &Connection, task: &Task) -> AppResult<()> {
    conn.execute(
        "INSERT INTO tasks (id, name, alias, folder) VALUES (?1, ?2, ?3, ?4)",
        params![task.id, task.name, task.alias, task.folder],
    )
    .map_err(|e| map_constraint(e, &format!("task '{}' ({})", task.alias, task.id)))?;
    Ok(())
}

/// Upsert by id. The alias index still applies against other tasks.
pub fn upsert_task(conn: &Connection, task: &Task) -> AppResult<()> {
    conn.execute(
        "INSERT INTO tasks (id, name, alias, folder) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             alias = excluded.alias,
             folder = excluded.folder",
        params![task.id, task.name, task.alias, task.folder],
    )
    .map_err(|e| map_constraint(e, &format!("task alias '{}'", task.alias)))?;
    Ok(())
}

/// Remove by id; an unknown id is not an error.
pub fn delete_task(conn: &Connection, id: &str) -> AppResult<()> {
    conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    Ok(())
}

pub fn count_tasks(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
}
