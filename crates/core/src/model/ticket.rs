use serde::{Deserialize, Serialize};

/// Queue ticket issued through the messaging platform.
///
/// `ticket_number` is absent when the patient has not taken a ticket yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketInfo {
    pub ticket_number: Option<u32>,
}

impl TicketInfo {
    #[must_use]
    pub fn issued(number: u32) -> Self {
        Self {
            ticket_number: Some(number),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self {
            ticket_number: None,
        }
    }
}
