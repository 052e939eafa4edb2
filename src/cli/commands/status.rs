use crate::cli::parser::Commands;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Show the metrics snapshot.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Status { today, at } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        StatusLogic::run(&mut pool, cfg, *today, at.as_deref())?;
    }

    Ok(())
}
