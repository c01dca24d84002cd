use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, TimeEntry};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Log a time range into the weekly timesheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        contractor,
        contract,
        from_time,
        to_time,
        description,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let entry = TimeEntry {
            contractor_id: contractor.clone(),
            contract_id: contract.clone(),
            date: d,
            from_time: from_time.clone(),
            to_time: to_time.clone(),
            description: description.clone().unwrap_or_default(),
        };

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        AddLogic::apply(&mut pool, cfg, &entry)?;
    }
    Ok(())
}
