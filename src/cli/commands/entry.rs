use crate::cli::commands::{confirm_delete, open_controller, resolve_task};
use crate::cli::parser::{Commands, EntryAction};
use crate::config::Config;
use crate::core::duration::elapsed;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::task_label;
use crate::utils::table::Table;
use crate::utils::time::{format_local, parse_optional_timestamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry { action } = cmd {
        let mut ctl = open_controller(cfg)?;

        match action {
            EntryAction::List { task } => {
                let entries = match task {
                    Some(alias) => ctl.entries_for_alias(alias),
                    None => ctl.entries_by_recent(),
                };

                if entries.is_empty() {
                    info("No time entries.");
                    return Ok(());
                }

                let now = ctl.now();
                let mut table = Table::new(&["ID", "TASK", "START", "END", "DURATION"]);
                for e in entries {
                    let end = match &e.end_time {
                        Some(t) => format_local(t),
                        None => "Running".to_string(),
                    };
                    table.add_row(vec![
                        e.id.clone(),
                        task_label(ctl.display_name(&e.task_alias), &e.task_alias),
                        format_local(&e.start_time),
                        end,
                        cfg.duration_style.render(elapsed(e, now)),
                    ]);
                }
                print!("{}", table.render());
            }

            EntryAction::Edit {
                id,
                task,
                start,
                end,
            } => {
                let mut entry = ctl
                    .time_entries()
                    .iter()
                    .find(|e| e.id == *id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("time entry '{}'", id)))?;

                if let Some(key) = task {
                    entry.task_alias = resolve_task(&ctl, key)?.alias;
                }
                if let Some(s) = parse_optional_timestamp(start.as_ref())? {
                    entry.start_time = s;
                }
                if let Some(e) = parse_optional_timestamp(end.as_ref())? {
                    entry.end_time = Some(e);
                }

                ctl.edit_time_entry(entry)?;
                success(format!("Time entry {} updated.", id));
            }

            EntryAction::Del { id, yes } => {
                let prompt = format!("Delete time entry {}? This action is irreversible.", id);
                if !confirm_delete(cfg, *yes, &prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                ctl.delete_time_entry(id)?;
                success(format!("Time entry {} has been deleted.", id));
            }
        }
    }

    Ok(())
}
