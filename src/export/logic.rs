// src/export/logic.rs

use crate::core::Controller;
use crate::core::duration::elapsed;
use crate::db::Store;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EntryExport, Snapshot};
use crate::ui::messages::warning;
use crate::utils::time::to_iso;
use std::path::Path;

/// High level export of the mirrored collections.
pub struct ExportLogic;

impl ExportLogic {
    /// Export tasks and time entries.
    ///
    /// - `json`: `{ "tasks": [...], "timeEntries": [...] }` in stored record form
    /// - `csv`: one row per entry with task name and duration in seconds
    pub fn export<S: Store>(
        ctl: &Controller<S>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if ctl.time_entries().is_empty() {
            warning("No time entries to export.");
        }

        match format {
            ExportFormat::Json => {
                let snapshot = Snapshot {
                    tasks: ctl.tasks(),
                    time_entries: ctl.entries_by_recent(),
                };
                export_json(path, &snapshot)
            }
            ExportFormat::Csv => {
                let rows = build_rows(ctl);
                export_csv(path, &rows)
            }
        }
    }
}

fn build_rows<S: Store>(ctl: &Controller<S>) -> Vec<EntryExport> {
    let now = ctl.now();
    ctl.entries_by_recent()
        .into_iter()
        .map(|e| EntryExport {
            id: e.id.clone(),
            task_alias: e.task_alias.clone(),
            task_name: ctl.display_name(&e.task_alias).to_string(),
            start_time: to_iso(&e.start_time),
            end_time: e.end_time.as_ref().map(to_iso).unwrap_or_default(),
            duration_seconds: elapsed(e, now).num_seconds(),
        })
        .collect()
}
