//! Submission flow for the examination-number form.

use clinic_core::validate_examination_number;
use services::ClinicBackend;

use crate::views::{FETCH_FAILED_MESSAGE, RELOGIN_MESSAGE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Accepted by the backend; holds the backend's confirmation message.
    Saved(String),
    /// Rejected locally before any network call.
    Invalid(String),
    /// The backend rejected the token; the user has to log in again.
    ReloginRequired(String),
    /// The request failed for a non-authorization reason.
    Failed(String),
}

impl RegisterOutcome {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Saved(message)
            | Self::Invalid(message)
            | Self::ReloginRequired(message)
            | Self::Failed(message) => message,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Saved(_) => "form-success",
            Self::Invalid(_) | Self::ReloginRequired(_) | Self::Failed(_) => "form-error",
        }
    }
}

/// Validates and submits an examination number.
///
/// Validation runs first: bad input comes back as `Invalid` without touching
/// the network.
pub async fn submit_examination_number(
    backend: &dyn ClinicBackend,
    token: Option<String>,
    raw: &str,
) -> RegisterOutcome {
    let number = match validate_examination_number(raw) {
        Ok(number) => number,
        Err(err) => return RegisterOutcome::Invalid(err.to_string()),
    };
    let Some(token) = token else {
        return RegisterOutcome::ReloginRequired(RELOGIN_MESSAGE.into());
    };

    match backend.update_examination_number(&token, number).await {
        Ok(message) => RegisterOutcome::Saved(message),
        Err(err) if err.requires_relogin() => {
            RegisterOutcome::ReloginRequired(RELOGIN_MESSAGE.into())
        }
        Err(err) => {
            log::warn!("examination number update failed: {err}");
            RegisterOutcome::Failed(FETCH_FAILED_MESSAGE.into())
        }
    }
}
