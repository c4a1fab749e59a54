use serde::{Deserialize, Serialize};

/// Reference data for estimating the clinic wait.
///
/// The backend reports which ticket number is currently being served and the
/// clinic's running average examination time in minutes. Wire field names are
/// camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitingTimeInfo {
    #[serde(rename = "currentTreatment")]
    pub current_treatment: u32,
    #[serde(rename = "averageExaminationTime")]
    pub average_examination_minutes: f64,
}

/// Derived wait estimate. Never persisted and never sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitEstimate {
    pub people_ahead: u32,
    pub estimated_minutes: f64,
    pub current_treatment: u32,
}
