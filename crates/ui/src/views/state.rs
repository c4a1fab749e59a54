use dioxus::prelude::*;
use services::FetchError;

pub const RELOGIN_MESSAGE: &str = "Please log in again to continue.";
pub const FETCH_FAILED_MESSAGE: &str = "Could not load the latest data. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The session can no longer authenticate requests; recoverable by
    /// logging in again.
    ReloginRequired(String),
    /// A fetch failed for reasons other than authorization.
    Fetch(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::ReloginRequired(message) | Self::Fetch(message) => message,
        }
    }

    #[must_use]
    pub fn needs_relogin(&self) -> bool {
        matches!(self, Self::ReloginRequired(_))
    }
}

impl From<&FetchError> for ViewError {
    fn from(err: &FetchError) -> Self {
        if err.requires_relogin() {
            Self::ReloginRequired(RELOGIN_MESSAGE.into())
        } else {
            Self::Fetch(FETCH_FAILED_MESSAGE.into())
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            Self::Idle => ViewState::Idle,
            Self::Loading => ViewState::Loading,
            Self::Ready(data) => ViewState::Ready(f(data)),
            Self::Error(err) => ViewState::Error(err),
        }
    }
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(resource: &Resource<ViewState<T>>) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(state) => state.clone(),
            None => ViewState::Idle,
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
