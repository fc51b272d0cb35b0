//! rTaskTracker library root.
//! Exposes the store adapter, the timer controller, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Task { .. } => cli::commands::task::handle(&cli.command, cfg),
        Commands::Toggle { .. } | Commands::Stop => {
            cli::commands::timer::handle(&cli.command, cfg)
        }
        Commands::Status => cli::commands::status::handle(&cli.command, cfg),
        Commands::Entry { .. } => cli::commands::entry::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db wins over the configured database
    let cfg = Config::load()?.with_database(cli.db.as_deref());

    dispatch(&cli, &cfg)
}
