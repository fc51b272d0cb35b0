//! Start/stop state machine.
//!
//! States are Idle and Running(task). The running entry is always derived
//! from the mirrored entries, never kept as a separate pointer.

use crate::core::controller::Controller;
use crate::db::Store;
use crate::errors::AppResult;
use crate::models::task::Task;
use crate::models::time_entry::TimeEntry;

/// What a call to `toggle_timer` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new entry was opened; `stopped` holds entries closed first.
    Started {
        entry: TimeEntry,
        stopped: Vec<TimeEntry>,
    },
    /// The task's own running entry was closed.
    Stopped(TimeEntry),
}

impl<S: Store> Controller<S> {
    /// Stop `task` if it is the active one, otherwise start it.
    ///
    /// Starting always closes any open entry first, so committed state
    /// never holds two running entries.
    pub fn toggle_timer(&mut self, task: &Task) -> AppResult<Transition> {
        let is_active = self.active_task_id() == Some(task.id.as_str());

        if is_active && let Some(running) = self.find_running_entry().cloned() {
            let stopped = self.stop_entry(&running)?;
            return Ok(Transition::Stopped(stopped));
        }

        let stopped = self.stop()?;

        let entry = TimeEntry::start(&task.alias, self.now());
        self.store.add_time_entry(&entry)?;
        self.time_entries.push(entry.clone());

        self.store.audit(
            "start",
            &task.alias,
            &format!("Started entry {} for '{}'", entry.id, task.name),
        );

        Ok(Transition::Started { entry, stopped })
    }

    /// Close every open entry. Returns the closed entries, empty when idle.
    pub fn stop(&mut self) -> AppResult<Vec<TimeEntry>> {
        let running: Vec<TimeEntry> = self.running_entries().into_iter().cloned().collect();

        let mut stopped = Vec::with_capacity(running.len());
        for entry in &running {
            stopped.push(self.stop_entry(entry)?);
        }
        Ok(stopped)
    }

    /// Stop transition for a single entry: set `end_time` to now and persist.
    fn stop_entry(&mut self, entry: &TimeEntry) -> AppResult<TimeEntry> {
        let stopped = entry.stopped_at(self.now());
        self.store.update_time_entry(&stopped)?;

        if let Some(slot) = self.time_entries.iter_mut().find(|e| e.id == stopped.id) {
            *slot = stopped.clone();
        }

        self.store.audit(
            "stop",
            &stopped.task_alias,
            &format!("Stopped entry {}", stopped.id),
        );
        Ok(stopped)
    }
}
