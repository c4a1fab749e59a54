use clinic_core::{estimate_wait, validate_ticket_number};
use dioxus::prelude::*;
use services::{QueryKey, SessionState};

use crate::context::AppContext;
use crate::session::use_screen_session;
use crate::views::numbers::TICKET_QUERY;
use crate::views::{GatePanel, ViewState, view_state_from_resource};
use crate::vm::WaitEstimateVm;

const WAITING_QUERY: QueryKey = QueryKey::new("waitingTime");
const WAITING_QUERIES: &[QueryKey] = &[TICKET_QUERY, WAITING_QUERY];

/// Waiting-time screen: estimates the wait for the patient's ticket, or for
/// a manually entered one when no ticket has been issued.
#[component]
pub fn WaitingView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_screen_session();

    let ticket = {
        let backend = ctx.backend();
        let session = session.clone();
        use_resource(move || {
            let backend = backend.clone();
            let session = session.clone();
            let state = session.state();
            let _epoch = session.epoch();
            async move {
                if state != SessionState::Success {
                    return ViewState::Idle;
                }
                session
                    .run(TICKET_QUERY, |token| async move {
                        backend.ticket_info(&token).await
                    })
                    .await
                    .map(|info| info.ticket_number)
            }
        })
    };

    let mut target = use_signal(|| None::<u32>);
    let mut manual = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    let estimate = {
        let backend = ctx.backend();
        let session = session.clone();
        use_resource(move || {
            let backend = backend.clone();
            let session = session.clone();
            let state = session.state();
            let _epoch = session.epoch();
            let ticket_number = target();
            async move {
                let Some(ticket_number) = ticket_number else {
                    return ViewState::Idle;
                };
                if state != SessionState::Success {
                    return ViewState::Idle;
                }
                session
                    .run(WAITING_QUERY, |token| async move {
                        backend.waiting_time_info(&token).await
                    })
                    .await
                    .map(|info| WaitEstimateVm::from(estimate_wait(ticket_number, &info)))
            }
        })
    };

    // Re-checking the same ticket restarts the resource by hand, since the
    // target signal does not change.
    let mut estimate_handle = estimate;
    let mut check = move |number: u32| {
        if target() == Some(number) {
            estimate_handle.restart();
        } else {
            target.set(Some(number));
        }
    };

    let ticket_state = view_state_from_resource(&ticket);
    let estimate_state = view_state_from_resource(&estimate);

    rsx! {
        div { class: "page",
            h2 { "Waiting Time" }

            GatePanel { session: session.clone(), invalidate_keys: WAITING_QUERIES,
                match ticket_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "muted", "Loading..." }
                    },
                    ViewState::Ready(Some(number)) => rsx! {
                        p { "Your ticket: No. {number}" }
                        button {
                            class: "primary",
                            onclick: move |_| check(number),
                            "Check waiting time"
                        }
                    },
                    ViewState::Ready(None) => rsx! {
                        p { class: "muted", "No ticket yet. Enter a ticket number to check." }
                        div { class: "ticket-form",
                            label { r#for: "ticket-number", "Ticket number" }
                            input {
                                id: "ticket-number",
                                r#type: "text",
                                inputmode: "numeric",
                                value: "{manual}",
                                oninput: move |evt| manual.set(evt.value()),
                            }
                            button {
                                class: "primary",
                                onclick: move |_| {
                                    match validate_ticket_number(manual().trim()) {
                                        Ok(number) => {
                                            form_error.set(None);
                                            check(number);
                                        }
                                        Err(err) => form_error.set(Some(err.to_string())),
                                    }
                                },
                                "Check waiting time"
                            }
                        }
                        if let Some(message) = form_error() {
                            p { class: "form-error", "{message}" }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                    },
                }

                EstimatePanel { state: estimate_state }
            }
        }
    }
}

#[component]
fn EstimatePanel(state: ViewState<WaitEstimateVm>) -> Element {
    match state {
        ViewState::Idle => rsx! {},
        ViewState::Loading => rsx! {
            p { class: "muted", "Checking..." }
        },
        ViewState::Ready(vm) => rsx! {
            section { class: "estimate-card",
                p { "Now serving: No. {vm.current_treatment}" }
                p { class: "estimate-summary", "{vm.summary}" }
            }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
    }
}
