//! Shared error types for the services crate.

use platform::PlatformError;
use thiserror::Error;

/// Errors produced while fetching from the clinic backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("no access token is available")]
    AccessTokenMissing,

    #[error("the session has expired")]
    AuthExpired,

    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl FetchError {
    /// True for failures that require the user to log in again.
    ///
    /// A missing token is treated the same as an expired one: both mean the
    /// session cannot authenticate requests until the user re-logs-in.
    #[must_use]
    pub fn requires_relogin(&self) -> bool {
        matches!(self, Self::AccessTokenMissing | Self::AuthExpired)
    }
}

/// Errors produced by session establishment and re-login.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("session did not reach an authenticated state")]
    NotEstablished,
}
