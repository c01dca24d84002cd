use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{find_by_week, insert_timesheet, list_timesheets, load_timesheet, update_timesheet};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{Timesheet, TimesheetDraft, TimesheetFilter};
use crate::utils::date::weekday_name;
use chrono::Local;

/// Upper bounds applied when hours are merged into a weekly sheet.
#[derive(Debug, Clone, Copy)]
pub struct HoursLimits {
    pub max_daily: f64,
    pub max_weekly: f64,
}

impl HoursLimits {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            max_daily: cfg.max_daily_hours,
            max_weekly: cfg.max_weekly_hours,
        }
    }

    fn check(&self, ts: &Timesheet) -> AppResult<()> {
        if let Some((day, hours)) = ts.hours.max_day()
            && hours > self.max_daily
        {
            return Err(AppError::HoursLimit(format!(
                "{} would reach {:.1}h (max {:.1}h per day)",
                weekday_name(day),
                hours,
                self.max_daily
            )));
        }

        let total = ts.total_hours();
        if total > self.max_weekly {
            return Err(AppError::HoursLimit(format!(
                "week {} would reach {:.1}h (max {:.1}h per week)",
                ts.week_start, total, self.max_weekly
            )));
        }
        Ok(())
    }
}

/// Persistence of weekly timesheets (the `saveTimesheet` collaborator).
pub struct TimesheetLogic;

impl TimesheetLogic {
    /// Create the weekly sheet for the draft's key, or merge the draft's
    /// hours into the existing one.
    ///
    /// Only draft sheets accept hours.
    pub fn save(pool: &mut DbPool, draft: TimesheetDraft, limits: HoursLimits) -> AppResult<Timesheet> {
        pool.in_transaction(|tx| {
            let existing = find_by_week(tx, &draft.contractor_id, &draft.contract_id, &draft.week_start)?;

            match existing {
                None => {
                    let mut ts = draft.into_timesheet();
                    limits.check(&ts)?;
                    ts.id = insert_timesheet(tx, &ts)?;
                    Ok(ts)
                }
                Some(mut ts) => {
                    if !ts.status.is_editable() {
                        return Err(AppError::InvalidStatus(format!(
                            "timesheet #{} is {} and can no longer be edited",
                            ts.id,
                            ts.status.to_db_str()
                        )));
                    }

                    ts.hours.merge(&draft.hours);
                    ts.task_description = merge_description(&ts.task_description, &draft.task_description);
                    limits.check(&ts)?;

                    ts.updated_at = Some(Local::now().to_rfc3339());

                    update_timesheet(tx, &ts)?;
                    Ok(ts)
                }
            }
        })
    }

    pub fn get(pool: &DbPool, id: i64) -> AppResult<Timesheet> {
        load_timesheet(&pool.conn, id)?.ok_or(AppError::TimesheetNotFound(id))
    }

    pub fn list(pool: &DbPool, filter: &TimesheetFilter) -> AppResult<Vec<Timesheet>> {
        list_timesheets(&pool.conn, filter)
    }
}

fn merge_description(current: &str, addition: &str) -> String {
    let addition = addition.trim();
    match (current.is_empty(), addition.is_empty()) {
        (_, true) => current.to_string(),
        (true, false) => addition.to_string(),
        (false, false) => format!("{current}\n{addition}"),
    }
}
