use dioxus::prelude::*;
use services::{QueryKey, SessionState};

use crate::context::AppContext;
use crate::session::use_screen_session;
use crate::views::numbers::EXAMINATION_QUERY;
use crate::views::{GatePanel, ViewState, view_state_from_resource};
use crate::vm::{RegisterOutcome, submit_examination_number};

const REGISTER_QUERIES: &[QueryKey] = &[EXAMINATION_QUERY];

/// Registration screen: submit or replace the patient's examination number.
#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_screen_session();

    let current = {
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

    let mut input = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut outcome = use_signal(|| None::<RegisterOutcome>);

    let onsubmit = {
        let backend = ctx.backend();
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if submitting() {
                return;
            }
            let backend = backend.clone();
            let session = session.clone();
            let raw = input().trim().to_string();
            spawn(async move {
                submitting.set(true);
                let result =
                    submit_examination_number(backend.as_ref(), session.access_token(), &raw)
                        .await;
                match &result {
                    RegisterOutcome::Saved(_) => {
                        session.invalidate_and_refresh(&[EXAMINATION_QUERY]);
                    }
                    RegisterOutcome::ReloginRequired(_) => session.report_auth_failure(),
                    RegisterOutcome::Invalid(_) | RegisterOutcome::Failed(_) => {}
                }
                outcome.set(Some(result));
                submitting.set(false);
            });
        }
    };

    let current_state = view_state_from_resource(&current);

    rsx! {
        div { class: "page",
            h2 { "Register Examination Number" }

            GatePanel { session: session.clone(), invalidate_keys: REGISTER_QUERIES,
                CurrentNumber { state: current_state }

                form { class: "register-form", onsubmit,
                    label { r#for: "examination-number", "Examination number" }
                    input {
                        id: "examination-number",
                        r#type: "text",
                        inputmode: "numeric",
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value()),
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "Save" }
                    }
                }

                if let Some(result) = outcome() {
                    p { class: result.css_class(), "{result.message()}" }
                }
            }
        }
    }
}

#[component]
fn CurrentNumber(state: ViewState<Option<u32>>) -> Element {
    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "muted", "Loading..." }
        },
        ViewState::Ready(Some(number)) => rsx! {
            p { "Currently registered: {number}" }
        },
        ViewState::Ready(None) => rsx! {
            p { class: "muted", "No examination number registered yet." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
    }
}
