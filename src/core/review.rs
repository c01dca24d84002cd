use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_timesheet, update_timesheet};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use crate::models::timesheet_status::TimesheetStatus;
use crate::ui::messages::success;
use chrono::Local;

/// Approval workflow: submit, approve, reject.
pub struct ReviewLogic;

impl ReviewLogic {
    /// draft → submitted
    pub fn submit(pool: &mut DbPool, id: i64) -> AppResult<Timesheet> {
        let ts = Self::transition(pool, id, TimesheetStatus::Submitted, |ts, now| {
            ts.submitted_at = Some(now.to_string());
        })?;

        audit(
            &pool.conn,
            "submit",
            &format!("timesheet #{id}"),
            &format!("{} hours submitted for week {}", ts.total_hours(), ts.week_start),
        );
        success(format!(
            "Timesheet #{} submitted for approval ({:.1}h, week {}).",
            id,
            ts.total_hours(),
            ts.week_label()
        ));
        Ok(ts)
    }

    /// submitted → approved
    pub fn approve(pool: &mut DbPool, id: i64, approver: &str) -> AppResult<Timesheet> {
        let approver = approver.trim();
        if approver.is_empty() {
            return Err(AppError::Other("approver id is required".into()));
        }

        let ts = Self::transition(pool, id, TimesheetStatus::Approved, |ts, now| {
            ts.approved_by = Some(approver.to_string());
            ts.approved_at = Some(now.to_string());
        })?;

        audit(
            &pool.conn,
            "approve",
            &format!("timesheet #{id}"),
            &format!("approved by {approver}"),
        );
        success(format!("Timesheet #{} approved by {}.", id, approver));
        Ok(ts)
    }

    /// submitted → rejected
    pub fn reject(pool: &mut DbPool, id: i64, reason: Option<&str>) -> AppResult<Timesheet> {
        let reason = reason.map(str::trim).filter(|r| !r.is_empty());

        let ts = Self::transition(pool, id, TimesheetStatus::Rejected, |ts, _| {
            ts.rejection_reason = reason.map(str::to_string);
        })?;

        audit(
            &pool.conn,
            "reject",
            &format!("timesheet #{id}"),
            reason.unwrap_or("no reason given"),
        );
        success(format!("Timesheet #{} rejected.", id));
        Ok(ts)
    }

    fn transition<F>(pool: &mut DbPool, id: i64, next: TimesheetStatus, apply: F) -> AppResult<Timesheet>
    where
        F: FnOnce(&mut Timesheet, &str),
    {
        pool.in_transaction(|tx| {
            let mut ts = load_timesheet(tx, id)?.ok_or(AppError::TimesheetNotFound(id))?;

            if !ts.status.can_transition_to(next) {
                return Err(AppError::StatusTransition {
                    id,
                    from: ts.status.to_db_str().to_string(),
                    to: next.to_db_str().to_string(),
                });
            }

            let now = Local::now().to_rfc3339();
            ts.status = next;
            ts.updated_at = Some(now.clone());
            apply(&mut ts, &now);

            update_timesheet(tx, &ts)?;
            Ok(ts)
        })
    }
}
