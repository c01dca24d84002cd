//! Formatting utilities used for CLI and export outputs.

use crate::models::timesheet_status::TimesheetStatus;
use crate::utils::colors::{BLUE, GREEN, GREY, RED, RESET};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}


/// Hours shown in a weekly grid: blank days render as "-".
pub fn hours_cell(hours: f64) -> String {
    if hours == 0.0 {
        "-".to_string()
    } else {
        format!("{:.1}", hours)
    }
}

/// Human-readable label and ANSI color for a timesheet status.
pub fn describe_status(status: TimesheetStatus) -> (String, &'static str) {
    match status {
        TimesheetStatus::Draft => ("Draft".into(), GREY),
        TimesheetStatus::Submitted => ("Submitted".into(), BLUE),
        TimesheetStatus::Approved => ("Approved".into(), GREEN),
        TimesheetStatus::Rejected => ("Rejected".into(), RED),
    }
}

pub fn colorize_status(status: TimesheetStatus) -> String {
    let (label, color) = describe_status(status);
    format!("{color}{label}{RESET}")
}
