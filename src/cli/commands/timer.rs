use crate::cli::commands::{open_controller, resolve_task};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::duration::elapsed;
use crate::core::timer::Transition;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// `toggle <task>` and `stop`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut ctl = open_controller(cfg)?;
    let style = cfg.duration_style;

    match cmd {
        Commands::Toggle { task } => {
            let task = resolve_task(&ctl, task)?;

            match ctl.toggle_timer(&task)? {
                Transition::Stopped(entry) => {
                    success(format!(
                        "Stopped '{}' after {}.",
                        task.name,
                        style.render(elapsed(&entry, ctl.now()))
                    ));
                }
                Transition::Started { entry, stopped } => {
                    for prev in &stopped {
                        info(format!(
                            "Stopped '{}' after {}.",
                            ctl.display_name(&prev.task_alias),
                            style.render(elapsed(prev, ctl.now()))
                        ));
                    }
                    success(format!("Started '{}' (entry {}).", task.name, entry.id));
                }
            }
        }

        Commands::Stop => {
            let stopped = ctl.stop()?;
            if stopped.is_empty() {
                info("No timer is running.");
            }
            for entry in &stopped {
                success(format!(
                    "Stopped '{}' after {}.",
                    ctl.display_name(&entry.task_alias),
                    style.render(elapsed(entry, ctl.now()))
                ));
            }
        }

        _ => {}
    }

    Ok(())
}
