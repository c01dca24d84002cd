use super::{timesheet_status::TimesheetStatus, week_hours::WeekHours};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Timesheet {
    pub id: i64,
    pub contractor_id: String,    // ⇔ timesheets.contractor_id
    pub contract_id: String,      // ⇔ timesheets.contract_id
    pub week_start: NaiveDate,    // ⇔ timesheets.week_start_date (Monday)
    pub week_end: NaiveDate,      // ⇔ timesheets.week_end_date (Sunday)
    pub hours: WeekHours,         // ⇔ timesheets.monday_hours .. sunday_hours
    pub task_description: String, // ⇔ timesheets.task_description
    pub status: TimesheetStatus,  // ⇔ timesheets.status

    pub rejection_reason: Option<String>,
    pub approved_by: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub submitted_at: Option<String>,
    pub approved_at: Option<String>,
}

impl Timesheet {
    pub fn total_hours(&self) -> f64 {
        self.hours.total()
    }

    pub fn week_label(&self) -> String {
        format!("{} → {}", self.week_start, self.week_end)
    }
}

/// A normalized weekly record ready to be saved: the output of the
/// time-range normalizer plus the keys it belongs to.
#[derive(Debug, Clone)]
pub struct TimesheetDraft {
    pub contractor_id: String,
    pub contract_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub hours: WeekHours,
    pub task_description: String,
}

impl TimesheetDraft {
    /// Fresh row in `draft` status, stamped now.
    pub fn into_timesheet(self) -> Timesheet {
        Timesheet {
            id: 0,
            contractor_id: self.contractor_id,
            contract_id: self.contract_id,
            week_start: self.week_start,
            week_end: self.week_end,
            hours: self.hours,
            task_description: self.task_description,
            status: TimesheetStatus::Draft,
            rejection_reason: None,
            approved_by: None,
            created_at: Local::now().to_rfc3339(),
            updated_at: None,
            submitted_at: None,
            approved_at: None,
        }
    }
}

/// Filters accepted by the timesheet listing.
#[derive(Debug, Clone, Default)]
pub struct TimesheetFilter {
    pub contractor_id: Option<String>,
    pub status: Option<TimesheetStatus>,
    pub week_bounds: Option<(NaiveDate, NaiveDate)>,
}
