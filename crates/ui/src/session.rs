//! Per-screen session wiring.
//!
//! Each screen mounts its own `SessionGate` and `QueryClient`; nothing is
//! shared across screens, so navigating between screens re-establishes the
//! session fresh.

use std::future::Future;
use std::sync::Arc;

use dioxus::prelude::*;
use services::{FetchError, QueryClient, QueryKey, QueryStatus, SessionGate, SessionState};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState};

const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again later.";

/// Handle to one screen's session gate, query client, and the signals that
/// make their transitions visible to the renderer.
#[derive(Clone)]
pub struct ScreenSession {
    gate: Arc<SessionGate>,
    queries: QueryClient,
    state: Signal<SessionState>,
    /// Bumped after a successful login or re-login so dependent resources
    /// re-run.
    epoch: Signal<u64>,
    notice: Signal<Option<String>>,
}

impl PartialEq for ScreenSession {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.gate, &other.gate)
    }
}

impl ScreenSession {
    #[must_use]
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        (self.epoch)()
    }

    /// A pending re-login prompt, shown as a banner above the screen content.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        (self.notice)()
    }

    #[must_use]
    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.gate.access_token()
    }

    /// Runs one gated query and folds the outcome into render state.
    pub async fn run<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> ViewState<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let status = self
            .queries
            .fetch(key, self.gate.is_ready(), self.gate.access_token(), fetcher)
            .await;
        match status {
            QueryStatus::Disabled | QueryStatus::InFlight => ViewState::Idle,
            QueryStatus::Done(Ok(data)) => ViewState::Ready(data),
            QueryStatus::Done(Err(err)) => {
                let view_err = ViewError::from(&err);
                if view_err.needs_relogin() {
                    let mut notice = self.notice;
                    notice.set(self.queries.relogin_message());
                }
                ViewState::Error(view_err)
            }
        }
    }

    /// Drives the platform login flow from the login-required screen. A
    /// failed login keeps the recoverable state and surfaces a message for
    /// the login panel.
    pub fn request_login(&self) {
        let gate = Arc::clone(&self.gate);
        let mut state = self.state;
        let mut epoch = self.epoch;
        let mut notice = self.notice;
        spawn(async move {
            match gate.login().await {
                Ok(next) => {
                    state.set(next);
                    notice.set(None);
                    epoch += 1;
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    notice.set(Some(LOGIN_FAILED_MESSAGE.into()));
                    state.set(gate.state());
                }
            }
        });
    }

    /// Re-authenticates after an expired session and marks the given query
    /// keys stale so each refetches once.
    pub fn request_relogin(&self, keys: &'static [QueryKey]) {
        let gate = Arc::clone(&self.gate);
        let queries = self.queries.clone();
        let mut state = self.state;
        let mut epoch = self.epoch;
        let mut notice = self.notice;
        spawn(async move {
            match queries.complete_relogin(&gate, keys).await {
                Ok(()) => {
                    state.set(SessionState::Success);
                    notice.set(None);
                    epoch += 1;
                }
                Err(err) => log::warn!("re-login failed: {err}"),
            }
        });
    }

    /// Records an authorization failure seen outside the query path, such as
    /// a rejected form submission.
    pub fn report_auth_failure(&self) {
        self.queries.report_auth_failure();
        let mut notice = self.notice;
        notice.set(self.queries.relogin_message());
    }

    /// Marks the given keys stale and bumps the epoch so the screen's
    /// resources re-run, for example after a successful mutation. Staleness
    /// and the refetch trigger always move together here: the query client's
    /// generations are service-level bookkeeping, while views react to the
    /// epoch signal.
    pub fn invalidate_and_refresh(&self, keys: &[QueryKey]) {
        for key in keys {
            self.queries.invalidate(*key);
        }
        let mut epoch = self.epoch;
        epoch += 1;
    }
}

/// Mounts the screen's session: builds the gate and query client once and
/// kicks off initialization exactly once per mount.
#[must_use]
pub fn use_screen_session() -> ScreenSession {
    let ctx = use_context::<AppContext>();
    let gate = use_hook(|| Arc::new(SessionGate::new(ctx.platform(), ctx.app_id())));
    let queries = use_hook(QueryClient::new);
    let state = use_signal(|| SessionState::Initializing);
    let epoch = use_signal(|| 0u64);
    let notice = use_signal(|| None);

    use_hook(|| {
        let gate = Arc::clone(&gate);
        let mut state = state;
        spawn(async move {
            let next = gate.initialize().await;
            state.set(next);
        });
    });

    ScreenSession {
        gate,
        queries,
        state,
        epoch,
        notice,
    }
}
