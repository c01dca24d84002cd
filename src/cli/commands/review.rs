use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::review::ReviewLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// `submit`, `approve` and `reject` share one handler.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open_initialized(&cfg.database)?;

    match cmd {
        Commands::Submit { id } => {
            ReviewLogic::submit(&mut pool, *id)?;
        }
        Commands::Approve { id, by } => {
            ReviewLogic::approve(&mut pool, *id, by)?;
        }
        Commands::Reject { id, reason } => {
            ReviewLogic::reject(&mut pool, *id, reason.as_deref())?;
        }
        _ => {}
    }
    Ok(())
}
