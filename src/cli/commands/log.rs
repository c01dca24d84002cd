use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = cmd else {
        return Ok(());
    };

    if !*print {
        info("Nothing to do: use --print.");
        return Ok(());
    }

    let pool = DbPool::open_initialized(&cfg.database)?;
    LogLogic::print_log(&pool)
}
