use serde::Serialize;

/// A persisted onboarding wizard submission (`onboarding_submissions` row).
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: i64,
    pub flow: String,
    pub payload: serde_json::Value,
    pub status: String,
    pub created_at: String,
}
