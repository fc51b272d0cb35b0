//! Helpers shared by the collection query modules.

use crate::errors::AppError;
use rusqlite::ErrorCode;

/// Translate a constraint violation raised by an insert into `DuplicateKey`.
///
/// Both the primary key and the `tasks_alias` unique index surface as
/// `SQLITE_CONSTRAINT`; anything else is passed through as a database error.
pub fn map_constraint(err: rusqlite::Error, what: &str) -> AppError {
    if let rusqlite::Error::SqliteFailure(inner, msg) = &err
        && inner.code == ErrorCode::ConstraintViolation
    {
        let detail = msg.clone().unwrap_or_else(|| inner.to_string());
        return AppError::DuplicateKey(format!("{}: {}", what, detail));
    }
    AppError::Db(err)
}

/// Build a row conversion error carrying an `AppError`.
pub fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}
