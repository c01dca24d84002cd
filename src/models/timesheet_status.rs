use serde::Serialize;

/// Lifecycle of a weekly timesheet: draft → submitted → approved | rejected.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Draft => "draft",
            TimesheetStatus::Submitted => "submitted",
            TimesheetStatus::Approved => "approved",
            TimesheetStatus::Rejected => "rejected",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(TimesheetStatus::Draft),
            "submitted" => Some(TimesheetStatus::Submitted),
            "approved" => Some(TimesheetStatus::Approved),
            "rejected" => Some(TimesheetStatus::Rejected),
            _ => None,
        }
    }

    /// Helper: convert user input (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.trim().to_lowercase())
    }

    /// Hours can only be added while the sheet is a draft.
    pub fn is_editable(&self) -> bool {
        matches!(self, TimesheetStatus::Draft)
    }

    /// Approved and rejected sheets never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TimesheetStatus::Approved | TimesheetStatus::Rejected)
    }

    /// Whether the review workflow allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: TimesheetStatus) -> bool {
        use TimesheetStatus::*;
        matches!(
            (self, next),
            (Draft, Submitted) | (Submitted, Approved) | (Submitted, Rejected)
        )
    }
}
