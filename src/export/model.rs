// src/export/model.rs

use crate::models::timesheet::Timesheet;
use serde::Serialize;

/// Flat timesheet row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TimesheetExport {
    pub id: i64,
    pub contractor_id: String,
    pub contract_id: String,
    pub week_start_date: String,
    pub week_end_date: String,
    pub monday_hours: f64,
    pub tuesday_hours: f64,
    pub wednesday_hours: f64,
    pub thursday_hours: f64,
    pub friday_hours: f64,
    pub saturday_hours: f64,
    pub sunday_hours: f64,
    pub total_hours: f64,
    pub status: String,
    pub task_description: String,
    pub rejection_reason: String,
    pub approved_by: String,
}

impl From<&Timesheet> for TimesheetExport {
    fn from(ts: &Timesheet) -> Self {
        let h = &ts.hours;
        Self {
            id: ts.id,
            contractor_id: ts.contractor_id.clone(),
            contract_id: ts.contract_id.clone(),
            week_start_date: ts.week_start.format("%Y-%m-%d").to_string(),
            week_end_date: ts.week_end.format("%Y-%m-%d").to_string(),
            monday_hours: h.monday,
            tuesday_hours: h.tuesday,
            wednesday_hours: h.wednesday,
            thursday_hours: h.thursday,
            friday_hours: h.friday,
            saturday_hours: h.saturday,
            sunday_hours: h.sunday,
            total_hours: ts.total_hours(),
            status: ts.status.to_db_str().to_string(),
            task_description: ts.task_description.clone(),
            rejection_reason: ts.rejection_reason.clone().unwrap_or_default(),
            approved_by: ts.approved_by.clone().unwrap_or_default(),
        }
    }
}
