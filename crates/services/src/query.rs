//! Session-aware remote queries.
//!
//! A `QueryClient` is scoped to one screen instance. It gates every fetch on
//! the screen's session being established, converts authorization failures
//! into a recoverable "needs re-login" state instead of a terminal error,
//! and keeps at most one outstanding fetch per query key.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{FetchError, SessionError};
use crate::session_gate::{SessionGate, SessionState};

const RELOGIN_PROMPT: &str = "Please log in again to continue.";

/// Name identifying one cacheable remote read.
///
/// Re-login invalidation targets queries by key, not by reference, so every
/// query against the same backend resource family shares one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Outcome of one fetch trigger.
#[derive(Debug)]
pub enum QueryStatus<T> {
    /// The enabled predicate was false; the fetch function was not invoked.
    Disabled,
    /// A fetch for this key is already outstanding; no second request was made.
    InFlight,
    /// Exactly one fetch ran and settled with this result.
    Done(Result<T, FetchError>),
}

#[derive(Debug, Default)]
struct Entry {
    loading: bool,
    generation: u64,
}

#[derive(Debug, Default)]
struct Inner {
    need_relogin: bool,
    relogin_message: Option<String>,
    entries: HashMap<QueryKey, Entry>,
}

impl Inner {
    fn entry(&mut self, key: QueryKey) -> &mut Entry {
        self.entries.entry(key).or_default()
    }

    fn suspend(&mut self) {
        self.need_relogin = true;
        self.relogin_message = Some(RELOGIN_PROMPT.to_owned());
    }
}

/// Per-screen query cache and re-login coordinator.
#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Arc<Mutex<Inner>>,
}

/// Clears a key's loading flag when the fetch settles or its future is
/// dropped mid-await, as happens when a resource restarts or the screen
/// unmounts.
struct LoadingGuard {
    inner: Arc<Mutex<Inner>>,
    key: QueryKey,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.entry(self.key).loading = false;
    }
}

impl QueryClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The enabled predicate for dependent queries: the session must be
    /// established and no re-login may be pending.
    #[must_use]
    pub fn enabled(&self, session_ready: bool) -> bool {
        session_ready && !self.lock().need_relogin
    }

    #[must_use]
    pub fn need_relogin(&self) -> bool {
        self.lock().need_relogin
    }

    #[must_use]
    pub fn relogin_message(&self) -> Option<String> {
        self.lock().relogin_message.clone()
    }

    /// True exactly while a fetch for `key` is outstanding.
    #[must_use]
    pub fn is_loading(&self, key: QueryKey) -> bool {
        self.lock()
            .entries
            .get(&key)
            .is_some_and(|entry| entry.loading)
    }

    /// Staleness counter for `key`; bumped by invalidation so observers
    /// re-run their fetch.
    #[must_use]
    pub fn generation(&self, key: QueryKey) -> u64 {
        self.lock()
            .entries
            .get(&key)
            .map_or(0, |entry| entry.generation)
    }

    /// Marks `key` stale, forcing the next observer pass to refetch.
    pub fn invalidate(&self, key: QueryKey) {
        self.lock().entry(key).generation += 1;
    }

    /// Records an authorization failure observed outside the query path,
    /// such as a rejected mutation, and suspends fetches until re-login.
    pub fn report_auth_failure(&self) {
        log::warn!("authorization failure reported, prompting re-login");
        self.lock().suspend();
    }

    /// Performs one authenticated read for `key`.
    ///
    /// The fetch function runs at most once per trigger and never runs when
    /// the enabled predicate is false, when a fetch for the key is already
    /// outstanding, or when no token is available. There is no automatic
    /// retry: a retry against the same stale token would repeat the same
    /// failure.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: QueryKey,
        session_ready: bool,
        token: Option<String>,
        fetcher: F,
    ) -> QueryStatus<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let token = {
            let mut inner = self.lock();
            if !session_ready || inner.need_relogin {
                return QueryStatus::Disabled;
            }
            if inner.entry(key).loading {
                return QueryStatus::InFlight;
            }
            let Some(token) = token else {
                log::warn!("query {key}: no access token, prompting re-login");
                inner.suspend();
                return QueryStatus::Done(Err(FetchError::AccessTokenMissing));
            };
            inner.entry(key).loading = true;
            token
        };
        let guard = LoadingGuard {
            inner: Arc::clone(&self.inner),
            key,
        };

        let result = fetcher(token).await;
        drop(guard);

        let mut inner = self.lock();
        if let Err(err) = &result {
            if err.requires_relogin() {
                log::warn!("query {key}: session expired, prompting re-login");
                inner.suspend();
            } else {
                log::warn!("query {key}: fetch failed: {err}");
            }
        }
        QueryStatus::Done(result)
    }

    /// Drives the gate's login flow and, on success, clears the re-login
    /// suspension and marks every given key stale so each affected query
    /// refetches exactly once.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the login flow fails; the suspension stays
    /// in place so no automatic fetch fires against the dead session.
    pub async fn complete_relogin(
        &self,
        gate: &SessionGate,
        keys: &[QueryKey],
    ) -> Result<(), SessionError> {
        let state = gate.login().await?;
        if state != SessionState::Success {
            return Err(SessionError::NotEstablished);
        }

        let mut inner = self.lock();
        inner.need_relogin = false;
        inner.relogin_message = None;
        for key in keys {
            inner.entry(*key).generation += 1;
        }
        log::info!("re-login complete, invalidated {} quer(ies)", keys.len());
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Entries are plain flags and counters; a poisoned lock cannot hold
        // a half-written state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
