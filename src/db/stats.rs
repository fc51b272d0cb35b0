use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::db::{tasks, time_entries};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool) -> AppResult<()> {
    let db_path = pool.path().to_string();
    let conn = pool.initialize()?;

    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        schema_version(conn)?
    );

    //
    // 2) COUNTS
    //
    let task_count = tasks::count_tasks(conn)?;
    let entry_count = time_entries::count_time_entries(conn)?;
    let running = time_entries::count_running(conn)?;

    println!("{}• Tasks:{} {}{}{}", CYAN, RESET, GREEN, task_count, RESET);
    println!(
        "{}• Time entries:{} {}{}{}",
        CYAN, RESET, GREEN, entry_count, RESET
    );
    println!("{}• Running:{} {}", CYAN, RESET, running);

    println!();
    Ok(())
}
