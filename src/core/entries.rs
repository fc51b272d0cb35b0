use crate::core::controller::Controller;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::to_iso;

impl<S: Store> Controller<S> {
    /// Replace a finished entry (task reassignment, start/end correction).
    ///
    /// Running entries cannot be edited: the stop transition relies on the
    /// open entry being exactly what it started as.
    pub fn edit_time_entry(&mut self, entry: TimeEntry) -> AppResult<()> {
        let idx = self
            .time_entries
            .iter()
            .position(|e| e.id == entry.id)
            .ok_or_else(|| AppError::NotFound(format!("time entry '{}'", entry.id)))?;

        if self.time_entries[idx].is_running() {
            return Err(AppError::InvalidState(format!(
                "time entry '{}' is running; stop it before editing",
                entry.id
            )));
        }

        let Some(end) = entry.end_time else {
            return Err(AppError::InvalidState(format!(
                "time entry '{}' must keep an end time",
                entry.id
            )));
        };

        if end < entry.start_time {
            return Err(AppError::InvalidTimeRange {
                start: to_iso(&entry.start_time),
                end: to_iso(&end),
            });
        }

        self.store.update_time_entry(&entry)?;

        let message = format!(
            "Entry {} → {} {}..{}",
            entry.id,
            entry.task_alias,
            to_iso(&entry.start_time),
            to_iso(&end)
        );
        let alias = entry.task_alias.clone();
        self.time_entries[idx] = entry;
        self.store.audit("edit", &alias, &message);
        Ok(())
    }

    /// Delete a finished entry. Unknown ids are a no-op.
    pub fn delete_time_entry(&mut self, id: &str) -> AppResult<()> {
        if self.time_entries.iter().any(|e| e.id == id && e.is_running()) {
            return Err(AppError::InvalidState(format!(
                "time entry '{}' is running; stop it before deleting",
                id
            )));
        }

        self.store.delete_time_entry(id)?;

        let removed = self
            .time_entries
            .iter()
            .position(|e| e.id == id)
            .map(|idx| self.time_entries.remove(idx));
        if let Some(entry) = removed {
            self.store.audit(
                "del",
                &entry.task_alias,
                &format!("Deleted entry {}", entry.id),
            );
        }
        Ok(())
    }
}
