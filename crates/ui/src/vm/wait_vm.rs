//! Display mapping for wait estimates.

use clinic_core::WaitEstimate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitEstimateVm {
    pub current_treatment: u32,
    pub summary: String,
}

impl From<WaitEstimate> for WaitEstimateVm {
    fn from(estimate: WaitEstimate) -> Self {
        Self {
            current_treatment: estimate.current_treatment,
            summary: summarize(&estimate),
        }
    }
}

fn summarize(estimate: &WaitEstimate) -> String {
    match estimate.people_ahead {
        0 => "It is your turn. Please head to the reception.".into(),
        1 => format!(
            "1 person ahead of you, about {:.0} minutes to go.",
            estimate.estimated_minutes
        ),
        n => format!(
            "{n} people ahead of you, about {:.0} minutes to go.",
            estimate.estimated_minutes
        ),
    }
}
