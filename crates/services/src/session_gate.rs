//! Host-platform session lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use platform::HostPlatform;

use crate::error::SessionError;

/// Lifecycle of one screen's platform session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Initializing,
    LoginRequired,
    Success,
    Failed(String),
}

/// Establishes a session with the host platform and exposes it as a small
/// state machine.
///
/// Each screen mounts its own gate: there is no sharing across screens, and
/// initialization runs exactly once per gate no matter how often the screen
/// re-renders.
pub struct SessionGate {
    platform: Arc<dyn HostPlatform>,
    app_id: String,
    state: Mutex<SessionState>,
    initialized: AtomicBool,
}

impl SessionGate {
    #[must_use]
    pub fn new(platform: Arc<dyn HostPlatform>, app_id: impl Into<String>) -> Self {
        Self {
            platform,
            app_id: app_id.into(),
            state: Mutex::new(SessionState::Initializing),
            initialized: AtomicBool::new(false),
        }
    }

    /// Runs the init flow once; later calls return the settled state.
    pub async fn initialize(&self) -> SessionState {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return self.state();
        }

        let next = self.establish().await;
        log::info!("session initialized: {next:?}");
        *self.lock() = next.clone();
        next
    }

    async fn establish(&self) -> SessionState {
        if let Err(err) = self.platform.init(&self.app_id).await {
            log::warn!("platform init failed: {err}");
            return SessionState::Failed(err.to_string());
        }
        if !self.platform.is_logged_in() {
            return SessionState::LoginRequired;
        }
        match self.platform.ready().await {
            Ok(()) => SessionState::Success,
            Err(err) => {
                log::warn!("platform session never became ready: {err}");
                SessionState::Failed(err.to_string())
            }
        }
    }

    /// Drives the platform login flow and re-enters the init flow.
    ///
    /// On failure the current state is left untouched, so a failed login
    /// stays recoverable: the user can simply try again.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the login flow fails or the session still
    /// is not authenticated afterwards.
    pub async fn login(&self) -> Result<SessionState, SessionError> {
        self.platform.login().await.map_err(|err| {
            log::warn!("login failed: {err}");
            err
        })?;
        if !self.platform.is_logged_in() {
            return Err(SessionError::NotEstablished);
        }
        self.platform.ready().await?;

        log::info!("session re-established after login");
        *self.lock() = SessionState::Success;
        Ok(SessionState::Success)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lock().clone()
    }

    /// True only once the session reached `Success`. This is the enabled
    /// predicate input for dependent queries.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(*self.lock(), SessionState::Success)
    }

    /// The access token, present only while the session is `Success`.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        if self.is_ready() {
            self.platform.access_token()
        } else {
            None
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // The guarded value is a plain enum, so a poisoned lock cannot hold
        // a half-written state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
