//! Lazily opened SQLite handle shared by every store operation.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    path: String,
    conn: Option<Connection>,
}

impl DbPool {
    /// Prepare a handle for the database at `path`. Nothing is opened yet.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            conn: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Open (or create) the database and bring its schema up to date.
    ///
    /// The first successful call keeps the connection; later calls return
    /// that same connection without reopening the file.
    pub fn initialize(&mut self) -> AppResult<&Connection> {
        if self.conn.is_none() {
            let conn = Self::open(&self.path)?;
            self.conn = Some(conn);
        }

        self.conn
            .as_ref()
            .ok_or_else(|| AppError::StorageUnavailable(self.path.clone()))
    }

    fn open(path: &str) -> AppResult<Connection> {
        let conn = Connection::open(Path::new(path)).map_err(|e| {
            AppError::StorageUnavailable(format!("cannot open '{}': {}", path, e))
        })?;

        init_db(&conn).map_err(|e| match e {
            AppError::StorageUnavailable(msg) => AppError::StorageUnavailable(msg),
            other => AppError::StorageUnavailable(format!(
                "cannot provision '{}': {}",
                path, other
            )),
        })?;

        Ok(conn)
    }
}
