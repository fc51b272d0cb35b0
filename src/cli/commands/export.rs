use crate::cli::commands::open_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let ctl = open_controller(cfg)?;
        ExportLogic::export(&ctl, *format, file, *force)?;
    }
    Ok(())
}
