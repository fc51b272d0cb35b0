use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour for an audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "start" => Colour::Cyan,
        "stop" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(pool.initialize()?)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|r| op_target(r).width())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for row in &entries {
            let visible = truncate(&op_target(row), op_w);
            let padding = " ".repeat(op_w.saturating_sub(visible.width()));

            // only the operation word is coloured
            let color = color_for_operation(&row.operation);
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                row.date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
