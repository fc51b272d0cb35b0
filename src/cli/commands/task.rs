use crate::cli::commands::{confirm_delete, open_controller, resolve_task};
use crate::cli::parser::{Commands, TaskAction};
use crate::config::Config;
use crate::core::duration::total_elapsed;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREEN, RESET};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task { action } = cmd {
        let mut ctl = open_controller(cfg)?;

        match action {
            TaskAction::Add {
                name,
                alias,
                folder,
            } => {
                let task = ctl.add_task(name, alias, folder.as_deref())?;
                success(format!("Task '{}' added with alias '{}'.", task.name, task.alias));
            }

            TaskAction::Edit { task, name, alias } => {
                let current = resolve_task(&ctl, task)?;

                // missing fields keep their current value
                let new_name = name.as_deref().unwrap_or(&current.name);
                let new_alias = alias.as_deref().unwrap_or(&current.alias);

                let updated = ctl.edit_task(&current.id, new_name, new_alias)?;
                success(format!(
                    "Task updated: '{}' ({}).",
                    updated.name, updated.alias
                ));

                if updated.alias != current.alias {
                    let kept = ctl.entries_for_alias(&current.alias).len();
                    if kept > 0 {
                        info(format!(
                            "{} time entries still reference the old alias '{}'.",
                            kept, current.alias
                        ));
                    }
                }
            }

            TaskAction::Del { task, yes } => {
                let target = resolve_task(&ctl, task)?;

                let prompt = format!(
                    "Delete task '{}' ({})? Its time entries are kept.",
                    target.name, target.alias
                );
                if !confirm_delete(cfg, *yes, &prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                ctl.delete_task(&target.id)?;
                success(format!("Task '{}' has been deleted.", target.name));
            }

            TaskAction::List => {
                if ctl.tasks().is_empty() {
                    info("No tasks yet. Add one with `task add <name> <alias>`.");
                    return Ok(());
                }

                let now = ctl.now();
                let active = ctl.active_task_id().map(str::to_string);

                let mut table = Table::new(&["", "ALIAS", "NAME", "FOLDER", "TOTAL", "ID"]);
                for t in ctl.tasks() {
                    let total = total_elapsed(ctl.entries_for_alias(&t.alias), now);
                    let marker = if active.as_deref() == Some(t.id.as_str()) {
                        "▶"
                    } else {
                        ""
                    };
                    table.add_row(vec![
                        marker.to_string(),
                        t.alias.clone(),
                        t.name.clone(),
                        t.folder.clone().unwrap_or_default(),
                        cfg.duration_style.render(total),
                        t.id.clone(),
                    ]);
                }
                print!("{}", table.render());

                if let Some(task) = ctl.active_task() {
                    println!("\n{}▶ running:{} {}", GREEN, RESET, task.name);
                }
            }
        }
    }

    Ok(())
}
