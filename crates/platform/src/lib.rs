#![forbid(unsafe_code)]

//! The host-platform capability surface.
//!
//! The mini-app runs embedded in a messaging platform's web view; the host
//! provides identity and session primitives (init, login, access token).
//! This crate models that surface as an injected trait so the rest of the
//! workspace never talks to the host SDK directly and tests can substitute
//! a scripted fake.

pub mod fake;

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the host platform bridge.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlatformError {
    #[error("platform init failed: {0}")]
    Init(String),

    #[error("platform session not ready: {0}")]
    Ready(String),

    #[error("login failed: {0}")]
    LoginFailed(String),
}

/// Identity/session capabilities the host platform exposes to the embedded app.
#[async_trait]
pub trait HostPlatform: Send + Sync {
    /// Initialize the host SDK for the given mini-app id.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Init` if the host rejects the app id or the
    /// SDK cannot start.
    async fn init(&self, app_id: &str) -> Result<(), PlatformError>;

    /// Whether the user currently holds a platform login.
    fn is_logged_in(&self) -> bool;

    /// Start the platform login flow.
    ///
    /// In a real host this redirects to an external login page and resumes
    /// on return; the call resolves once the flow has completed.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::LoginFailed` if the flow is aborted or
    /// rejected.
    async fn login(&self) -> Result<(), PlatformError>;

    /// The current access token, if a session is established.
    fn access_token(&self) -> Option<String>;

    /// Resolves once the host session is fully established.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Ready` if the session can never become ready.
    async fn ready(&self) -> Result<(), PlatformError>;
}

pub use fake::FakePlatform;
