//! Scripted in-memory platform for tests and prototyping.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{HostPlatform, PlatformError};

#[derive(Debug, Default)]
struct FakeState {
    logged_in: bool,
    token: Option<String>,
    init_error: Option<String>,
    ready_error: Option<String>,
    login_error: Option<String>,
    login_token: Option<String>,
}

/// In-memory `HostPlatform` with scripted outcomes and call counters.
#[derive(Debug, Default)]
pub struct FakePlatform {
    state: Mutex<FakeState>,
    init_calls: AtomicUsize,
    login_calls: AtomicUsize,
}

impl FakePlatform {
    /// A platform whose user already holds a session with the given token.
    #[must_use]
    pub fn logged_in(token: &str) -> Self {
        let fake = Self::default();
        {
            let mut state = fake.lock();
            state.logged_in = true;
            state.token = Some(token.to_owned());
        }
        fake
    }

    /// A platform whose user has no session yet.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Make `init` fail with the given message.
    pub fn fail_init(&self, message: &str) {
        self.lock().init_error = Some(message.to_owned());
    }

    /// Make `ready` fail with the given message.
    pub fn fail_ready(&self, message: &str) {
        self.lock().ready_error = Some(message.to_owned());
    }

    /// Make `login` fail with the given message.
    pub fn fail_login(&self, message: &str) {
        self.lock().login_error = Some(message.to_owned());
    }

    /// Script the token a successful `login` will install.
    pub fn login_issues_token(&self, token: &str) {
        self.lock().login_token = Some(token.to_owned());
    }

    /// Drop the current token while keeping the user logged in, as a host
    /// does when a token expires server-side.
    pub fn expire_token(&self) {
        self.lock().token = None;
    }

    #[must_use]
    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl HostPlatform for FakePlatform {
    async fn init(&self, _app_id: &str) -> Result<(), PlatformError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        match self.lock().init_error.clone() {
            Some(message) => Err(PlatformError::Init(message)),
            None => Ok(()),
        }
    }

    fn is_logged_in(&self) -> bool {
        self.lock().logged_in
    }

    async fn login(&self) -> Result<(), PlatformError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        if let Some(message) = state.login_error.clone() {
            return Err(PlatformError::LoginFailed(message));
        }
        state.logged_in = true;
        if let Some(token) = state.login_token.clone() {
            state.token = Some(token);
        }
        Ok(())
    }

    fn access_token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    async fn ready(&self) -> Result<(), PlatformError> {
        match self.lock().ready_error.clone() {
            Some(message) => Err(PlatformError::Ready(message)),
            None => Ok(()),
        }
    }
}
