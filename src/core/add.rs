use crate::config::Config;
use crate::core::calculator::{NormalizedEntry, OvernightPolicy, normalize_entry};
use crate::core::timesheet::{HoursLimits, TimesheetLogic};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{Timesheet, TimesheetDraft};
use crate::ui::messages::success;
use crate::utils::date::weekday_name;
use chrono::NaiveDate;

/// One day's time range as typed by the contractor.
#[derive(Debug, Clone)]
pub struct TimeEntry {
    pub contractor_id: String,
    pub contract_id: String,
    pub date: NaiveDate,
    pub from_time: String,
    pub to_time: String,
    pub description: String,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Normalize the entry into a weekly draft without touching the database.
    pub fn prepare(entry: &TimeEntry, policy: OvernightPolicy) -> AppResult<(NormalizedEntry, TimesheetDraft)> {
        let contractor_id = entry.contractor_id.trim();
        let contract_id = entry.contract_id.trim();
        if contractor_id.is_empty() || contract_id.is_empty() {
            return Err(AppError::Other("contractor and contract ids are required".into()));
        }

        let normalized = normalize_entry(&entry.from_time, &entry.to_time, entry.date, policy)?;

        let draft = TimesheetDraft {
            contractor_id: contractor_id.to_string(),
            contract_id: contract_id.to_string(),
            week_start: normalized.week_start,
            week_end: normalized.week_end,
            hours: normalized.week,
            task_description: entry.description.trim().to_string(),
        };

        Ok((normalized, draft))
    }

    pub fn apply(pool: &mut DbPool, cfg: &Config, entry: &TimeEntry) -> AppResult<Timesheet> {
        let policy = OvernightPolicy::from_config(cfg.allow_overnight);
        let (normalized, draft) = Self::prepare(entry, policy)?;

        let saved = TimesheetLogic::save(pool, draft, HoursLimits::from_config(cfg))?;

        audit(
            &pool.conn,
            "add",
            &format!("timesheet #{}", saved.id),
            &format!(
                "{} {} → {} = {:.1}h ({})",
                entry.date, entry.from_time, entry.to_time, normalized.hours, saved.contractor_id
            ),
        );

        success(format!(
            "Logged {:.1}h on {} {} for {} / {} (timesheet #{}, week {}, total {:.1}h).",
            normalized.hours,
            weekday_name(normalized.weekday),
            normalized.date,
            saved.contractor_id,
            saved.contract_id,
            saved.id,
            saved.week_label(),
            saved.total_hours()
        ));

        Ok(saved)
    }
}
