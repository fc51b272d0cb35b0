//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Task label for an entry: the task name, plus the raw alias when it differs.
pub fn task_label(name: &str, alias: &str) -> String {
    if name == alias {
        alias.to_string()
    } else {
        format!("{} [{}]", name, alias)
    }
}
