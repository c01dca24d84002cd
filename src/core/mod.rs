pub mod add;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod log;
pub mod onboard;
pub mod review;
pub mod timesheet;
pub mod wizard;
