//! In-memory mirror of both collections plus task operations.
//!
//! The controller is the only place that sequences store calls. A store
//! call that fails leaves the mirror exactly as it was; a call that
//! succeeds is mirrored before the next one is issued.

use crate::core::clock::{Clock, SystemClock};
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, SubsecRound, Utc};

pub struct Controller<S: Store> {
    pub(crate) store: S,
    clock: Box<dyn Clock>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) time_entries: Vec<TimeEntry>,
}

impl<S: Store> Controller<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }

    pub fn with_clock(store: S, clock: impl Clock + 'static) -> Self {
        Self {
            store,
            clock: Box::new(clock),
            tasks: Vec::new(),
            time_entries: Vec::new(),
        }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Current time at the precision timestamps are stored with.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.time().trunc_subsecs(3)
    }

    // ------------------------------------------------
    // Snapshots
    // ------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn time_entries(&self) -> &[TimeEntry] {
        &self.time_entries
    }

    /// Entries newest first, as they are listed to the user.
    pub fn entries_by_recent(&self) -> Vec<&TimeEntry> {
        let mut out: Vec<&TimeEntry> = self.time_entries.iter().collect();
        out.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        out
    }

    pub fn entries_for_alias(&self, alias: &str) -> Vec<&TimeEntry> {
        self.entries_by_recent()
            .into_iter()
            .filter(|e| e.task_alias == alias)
            .collect()
    }

    /// Every entry without an end time. More than one means the stored data
    /// was left inconsistent by something other than this controller.
    pub fn running_entries(&self) -> Vec<&TimeEntry> {
        self.time_entries.iter().filter(|e| e.is_running()).collect()
    }

    /// The running entry, when exactly one exists.
    pub fn find_running_entry(&self) -> Option<&TimeEntry> {
        let mut running = self.time_entries.iter().filter(|e| e.is_running());
        match (running.next(), running.next()) {
            (Some(entry), None) => Some(entry),
            _ => None,
        }
    }

    /// Task owning the running entry, resolved by alias.
    pub fn active_task(&self) -> Option<&Task> {
        let entry = self.find_running_entry()?;
        self.tasks.iter().find(|t| t.alias == entry.task_alias)
    }

    pub fn active_task_id(&self) -> Option<&str> {
        self.active_task().map(|t| t.id.as_str())
    }

    /// Look a task up by id or alias.
    pub fn find_task(&self, key: &str) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == key)
            .or_else(|| self.tasks.iter().find(|t| t.alias == key))
    }

    /// Name to show for an alias; orphaned aliases are shown raw.
    pub fn display_name<'a>(&'a self, alias: &'a str) -> &'a str {
        self.tasks
            .iter()
            .find(|t| t.alias == alias)
            .map(|t| t.name.as_str())
            .unwrap_or(alias)
    }

    // ------------------------------------------------
    // Loading
    // ------------------------------------------------

    /// Replace the mirror with the stored contents of both collections.
    pub fn load_all(&mut self) -> AppResult<()> {
        let tasks = self.store.list_tasks()?;
        let time_entries = self.store.list_time_entries()?;

        self.tasks = tasks;
        self.time_entries = time_entries;
        Ok(())
    }

    // ------------------------------------------------
    // Tasks
    // ------------------------------------------------

    pub fn add_task(&mut self, name: &str, alias: &str, folder: Option<&str>) -> AppResult<Task> {
        let (name, alias) = validate_task_fields(name, alias)?;

        if self.tasks.iter().any(|t| t.alias == alias) {
            return Err(AppError::DuplicateKey(format!(
                "a task with alias '{}' already exists",
                alias
            )));
        }

        let folder = folder.map(str::trim).filter(|f| !f.is_empty());
        let task = Task::new(name, alias, folder);
        self.store.add_task(&task)?;
        self.tasks.push(task.clone());

        self.store.audit(
            "add",
            &task.alias,
            &format!("Added task '{}' ({})", task.name, task.id),
        );
        Ok(task)
    }

    /// Rename a task. Time entries keep whatever alias they were logged with.
    pub fn edit_task(&mut self, id: &str, new_name: &str, new_alias: &str) -> AppResult<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("task '{}'", id)))?;

        let (name, alias) = validate_task_fields(new_name, new_alias)?;

        if self.tasks.iter().any(|t| t.id != id && t.alias == alias) {
            return Err(AppError::DuplicateKey(format!(
                "a task with alias '{}' already exists",
                alias
            )));
        }

        let updated = Task {
            name: name.to_string(),
            alias: alias.to_string(),
            ..self.tasks[idx].clone()
        };
        self.store.update_task(&updated)?;

        let previous = std::mem::replace(&mut self.tasks[idx], updated.clone());
        self.store.audit(
            "edit",
            &updated.alias,
            &format!(
                "Task {} renamed '{}' ({}) → '{}' ({})",
                updated.id, previous.name, previous.alias, updated.name, updated.alias
            ),
        );
        Ok(updated)
    }

    /// Delete a task. Entries logged against its alias are left untouched.
    pub fn delete_task(&mut self, id: &str) -> AppResult<()> {
        self.store.delete_task(id)?;

        let removed = self.tasks.iter().position(|t| t.id == id).map(|idx| self.tasks.remove(idx));
        if let Some(task) = removed {
            self.store.audit(
                "del",
                &task.alias,
                &format!("Deleted task '{}' ({})", task.name, task.id),
            );
        }
        Ok(())
    }
}

fn validate_task_fields<'a>(name: &'a str, alias: &'a str) -> AppResult<(&'a str, &'a str)> {
    let name = name.trim();
    let alias = alias.trim();

    if name.is_empty() {
        return Err(AppError::InvalidInput("task name must not be empty".into()));
    }
    if alias.is_empty() {
        return Err(AppError::InvalidInput("task alias must not be empty".into()));
    }
    Ok((name, alias))
}
