//! Store Adapter boundary used by the controller.

use crate::db::pool::DbPool;
use crate::db::{log, tasks, time_entries};
use crate::errors::AppResult;
use crate::models::task::Task;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::warning;

/// Durable CRUD over the two collections.
///
/// Each call is its own atomic unit. Listing order is unspecified.
pub trait Store {
    fn list_tasks(&mut self) -> AppResult<Vec<Task>>;
    fn add_task(&mut self, task: &Task) -> AppResult<()>;
    fn update_task(&mut self, task: &Task) -> AppResult<()>;
    fn delete_task(&mut self, id: &str) -> AppResult<()>;

    fn list_time_entries(&mut self) -> AppResult<Vec<TimeEntry>>;
    fn add_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()>;
    fn update_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()>;
    fn delete_time_entry(&mut self, id: &str) -> AppResult<()>;

    /// Record an audit line for a committed mutation. Never fails the caller.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}
}

impl Store for DbPool {
    fn list_tasks(&mut self) -> AppResult<Vec<Task>> {
        tasks::list_tasks(self.initialize()?)
    }

    fn add_task(&mut self, task: &Task) -> AppResult<()> {
        tasks::insert_task(self.initialize()?, task)
    }

    fn update_task(&mut self, task: &Task) -> AppResult<()> {
        tasks::upsert_task(self.initialize()?, task)
    }

    fn delete_task(&mut self, id: &str) -> AppResult<()> {
        tasks::delete_task(self.initialize()?, id)
    }

    fn list_time_entries(&mut self) -> AppResult<Vec<TimeEntry>> {
        time_entries::list_time_entries(self.initialize()?)
    }

    fn add_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()> {
        time_entries::insert_time_entry(self.initialize()?, entry)
    }

    fn update_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()> {
        time_entries::upsert_time_entry(self.initialize()?, entry)
    }

    fn delete_time_entry(&mut self, id: &str) -> AppResult<()> {
        time_entries::delete_time_entry(self.initialize()?, id)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        let res = self
            .initialize()
            .and_then(|conn| log::ttlog(conn, operation, target, message));
        if let Err(e) = res {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
