use crate::models::task::Task;
use crate::models::time_entry::TimeEntry;
use serde::Serialize;

/// Full dump of both collections, in stored record form.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub tasks: &'a [Task],
    pub time_entries: Vec<&'a TimeEntry>,
}

/// Flat row for CSV: one time entry with its resolved task name.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub task_alias: String,
    pub task_name: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_seconds: i64,
}
