use serde::{Deserialize, Serialize};

/// The patient's clinic-assigned examination (medical record) number.
///
/// Registered independently of the queue ticket; absent until the patient
/// submits one through the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExaminationInfo {
    pub examination_number: Option<u32>,
}

impl ExaminationInfo {
    #[must_use]
    pub fn registered(number: u32) -> Self {
        Self {
            examination_number: Some(number),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self {
            examination_number: None,
        }
    }
}
