use crate::errors::{AppError, AppResult};
use crate::export::model::{EntryExport, Snapshot};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

/// Write tasks and entries as one pretty-printed JSON document.
pub(crate) fn export_json(path: &Path, snapshot: &Snapshot) -> AppResult<()> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}

/// Write one CSV row per time entry.
pub(crate) fn export_csv(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("cannot create CSV file: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write failed: {e}")))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
