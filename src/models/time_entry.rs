use crate::utils::time::{iso_millis, iso_millis_opt};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One interval logged against a task alias.
///
/// An entry without `end_time` is the running one. `task_alias` is a plain
/// lookup key: the referenced task may have been renamed or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,                      // ⇔ timeEntries.id (TEXT PRIMARY KEY)
    pub task_alias: String,              // ⇔ timeEntries.taskAlias (INDEX)
    #[serde(with = "iso_millis")]
    pub start_time: DateTime<Utc>,       // ⇔ timeEntries.startTime (ISO 8601, ms, Z)
    #[serde(
        default,
        with = "iso_millis_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>, // ⇔ timeEntries.endTime (NULL while running)
}

impl TimeEntry {
    /// Open a new running entry for `task_alias` starting at `start`.
    pub fn start(task_alias: &str, start: DateTime<Utc>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            task_alias: task_alias.to_string(),
            start_time: start,
            end_time: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.end_time.is_none()
    }

    /// Copy of this entry closed at `end`, never earlier than its start.
    pub fn stopped_at(&self, end: DateTime<Utc>) -> Self {
        Self {
            end_time: Some(end.max(self.start_time)),
            ..self.clone()
        }
    }
}
