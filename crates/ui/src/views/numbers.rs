use dioxus::prelude::*;
use services::{QueryKey, SessionState};

use crate::context::AppContext;
use crate::session::use_screen_session;
use crate::views::{GatePanel, ViewState, view_state_from_resource};

pub(crate) const TICKET_QUERY: QueryKey = QueryKey::new("ticketInfo");
pub(crate) const EXAMINATION_QUERY: QueryKey = QueryKey::new("examinationData");
const NUMBER_QUERIES: &[QueryKey] = &[TICKET_QUERY, EXAMINATION_QUERY];

/// Home screen: the patient's queue ticket and registered examination number.
#[component]
pub fn NumbersView() -> Element {
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

    let examination = {
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
                    .run(EXAMINATION_QUERY, |token| async move {
                        backend.examination_info(&token).await
                    })
                    .await
                    .map(|info| info.examination_number)
            }
        })
    };

    let ticket_state = view_state_from_resource(&ticket);
    let examination_state = view_state_from_resource(&examination);

    rsx! {
        div { class: "page",
            h2 { "Your Numbers" }

            GatePanel { session: session.clone(), invalidate_keys: NUMBER_QUERIES,
                section { class: "number-card",
                    h3 { "Queue ticket" }
                    NumberValue { state: ticket_state, empty: "No ticket yet." }
                }
                section { class: "number-card",
                    h3 { "Examination number" }
                    NumberValue { state: examination_state, empty: "Not registered yet." }
                }
            }
        }
    }
}

#[component]
fn NumberValue(state: ViewState<Option<u32>>, empty: &'static str) -> Element {
    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "muted", "Loading..." }
        },
        ViewState::Ready(Some(number)) => rsx! {
            p { class: "number", "{number}" }
        },
        ViewState::Ready(None) => rsx! {
            p { class: "muted", "{empty}" }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
    }
}
