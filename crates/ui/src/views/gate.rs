use dioxus::prelude::*;
use services::{QueryKey, SessionState};

use crate::session::ScreenSession;

/// Wraps a screen's content in the session state machine: a connecting
/// notice while initializing, a login button when the user is logged out, a
/// terminal error when the platform rejected the app, and a re-login banner
/// above the content when the session expired mid-use.
#[component]
pub fn GatePanel(
    session: ScreenSession,
    #[props(default)] invalidate_keys: &'static [QueryKey],
    children: Element,
) -> Element {
    match session.state() {
        SessionState::Initializing => rsx! {
            p { class: "gate-status", "Connecting..." }
        },
        SessionState::Failed(reason) => rsx! {
            div { class: "gate-error",
                p { "The app could not start." }
                p { class: "gate-reason", "{reason}" }
            }
        },
        SessionState::LoginRequired => {
            let notice = session.notice();
            let login = session.clone();
            rsx! {
                div { class: "gate-login",
                    p { "Please log in to see your clinic queue status." }
                    if let Some(message) = notice {
                        p { class: "form-error", "{message}" }
                    }
                    button {
                        class: "primary",
                        onclick: move |_| login.request_login(),
                        "Log in"
                    }
                }
            }
        }
        SessionState::Success => {
            let notice = session.notice();
            let relogin = session.clone();
            rsx! {
                if let Some(message) = notice {
                    div { class: "relogin-banner",
                        p { "{message}" }
                        button {
                            class: "primary",
                            onclick: move |_| relogin.request_relogin(invalidate_keys),
                            "Log in again"
                        }
                    }
                }
                {children}
            }
        }
    }
}
