use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{SCHEMA_VERSION, run_pending_migrations, schema_version};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // one lazily opened handle for every requested action
        let mut pool = DbPool::new(&cfg.database);

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let conn = pool.initialize()?;
            run_pending_migrations(conn)?;
            println!(
                "{}✔ Schema at version {} (supported: {}).{}\n",
                GREEN,
                schema_version(conn)?,
                SCHEMA_VERSION,
                RESET
            );
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&mut pool)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .initialize()?
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.initialize()?.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
