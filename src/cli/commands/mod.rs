pub mod config;
pub mod db;
pub mod entry;
pub mod export;
pub mod init;
pub mod log;
pub mod status;
pub mod task;
pub mod timer;

use crate::config::Config;
use crate::core::Controller;
use crate::db::{DbPool, Store};
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use crate::ui::messages::{confirm, warning};

/// Open the configured store and load both collections.
pub(crate) fn open_controller(cfg: &Config) -> AppResult<Controller<DbPool>> {
    let mut ctl = Controller::new(DbPool::new(&cfg.database));
    ctl.load_all()?;

    let running = ctl.running_entries().len();
    if running > 1 {
        warning(format!(
            "{} time entries are running at once; no task is active. \
             The next toggle or `stop` closes all of them.",
            running
        ));
    }

    Ok(ctl)
}

/// Resolve a task by id or alias, cloned so the controller can be mutated.
pub(crate) fn resolve_task<S: Store>(ctl: &Controller<S>, key: &str) -> AppResult<Task> {
    ctl.find_task(key)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no task with id or alias '{}'", key)))
}

/// Ask before an irreversible delete unless skipped by flag or config.
pub(crate) fn confirm_delete(cfg: &Config, yes: bool, prompt: &str) -> bool {
    yes || !cfg.confirm_delete || confirm(prompt)
}
