//! Unified application error type.
//! Every module (db, core, cli, utils) returns AppError so failures are
//! reported the same way regardless of where they originate.

use crate::models::form::FieldError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: '{0}' (expected H:MM AM/PM)")]
    InvalidTime(String),

    #[error("Invalid timesheet status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Time entry policy
    // ---------------------------
    #[error("Zero-length time range: {0}")]
    ZeroDuration(String),

    #[error("Time range crosses midnight and overnight shifts are disabled: {0}")]
    OvernightNotAllowed(String),

    #[error("Hours limit exceeded: {0}")]
    HoursLimit(String),

    // ---------------------------
    // Timesheet lifecycle
    // ---------------------------
    #[error("Timesheet #{0} not found")]
    TimesheetNotFound(i64),

    #[error("Cannot move timesheet #{id} from '{from}' to '{to}'")]
    StatusTransition {
        id: i64,
        from: String,
        to: String,
    },

    // ---------------------------
    // Onboarding wizard
    // ---------------------------
    #[error("Validation failed: {}", describe_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Step {0} is not reachable yet")]
    StepLocked(usize),

    #[error("Submission failed: {0}")]
    Submission(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

fn describe_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type AppResult<T> = Result<T, AppError>;
