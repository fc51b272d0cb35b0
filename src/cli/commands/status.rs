use crate::cli::commands::open_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::duration::elapsed;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RESET};
use crate::utils::formatting::{bold, task_label};
use crate::utils::time::format_local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Status) {
        let ctl = open_controller(cfg)?;
        let now = ctl.now();

        let running = ctl.running_entries();
        if running.is_empty() {
            info("Idle: no timer is running.");
            return Ok(());
        }

        for entry in running {
            let name = ctl.display_name(&entry.task_alias);
            println!(
                "{}▶ {}{} since {} ({})",
                GREEN,
                RESET,
                bold(&task_label(name, &entry.task_alias)),
                format_local(&entry.start_time),
                cfg.duration_style.render(elapsed(entry, now))
            );
        }
    }

    Ok(())
}
