//! Unified application error type.
//! Store, controller and CLI layers all return AppError so that a failed
//! action surfaces the same way no matter where it originated.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Timer / state
    // ---------------------------
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid time range: end {end} is before start {start}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // IO / config / export
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
