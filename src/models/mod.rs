pub mod form;
pub mod submission;
pub mod timesheet;
pub mod timesheet_status;
pub mod week_hours;
