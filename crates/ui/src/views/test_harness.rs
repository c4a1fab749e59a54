use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clinic_core::{ExaminationInfo, TicketInfo, WaitingTimeInfo};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use platform::{FakePlatform, HostPlatform};
use services::{ClinicBackend, FetchError};

use crate::context::{UiApp, build_app_context};
use crate::session::use_screen_session;
use crate::views::{GatePanel, NumbersView, RegisterView, WaitingView};

#[derive(Clone, Copy)]
struct FakeData {
    ticket: TicketInfo,
    examination: ExaminationInfo,
    waiting: WaitingTimeInfo,
}

/// Scripted in-memory stand-in for the clinic backend.
pub struct FakeBackend {
    data: Mutex<FakeData>,
    reject_auth: AtomicBool,
    calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(FakeData {
                ticket: TicketInfo::none(),
                examination: ExaminationInfo::none(),
                waiting: WaitingTimeInfo {
                    current_treatment: 0,
                    average_examination_minutes: 0.0,
                },
            }),
            reject_auth: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_ticket(&self, number: u32) {
        self.data.lock().unwrap().ticket = TicketInfo::issued(number);
    }

    pub fn set_examination(&self, number: u32) {
        self.data.lock().unwrap().examination = ExaminationInfo::registered(number);
    }

    pub fn set_waiting(&self, current_treatment: u32, average_minutes: f64) {
        self.data.lock().unwrap().waiting = WaitingTimeInfo {
            current_treatment,
            average_examination_minutes: average_minutes,
        };
    }

    /// Every call from now on fails as if the token expired.
    pub fn reject_with_auth_expired(&self) {
        self.reject_auth.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn guard(&self) -> Result<FakeData, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_auth.load(Ordering::SeqCst) {
            return Err(FetchError::AuthExpired);
        }
        Ok(*self.data.lock().unwrap())
    }
}

#[async_trait]
impl ClinicBackend for FakeBackend {
    async fn ticket_info(&self, _token: &str) -> Result<TicketInfo, FetchError> {
        Ok(self.guard()?.ticket)
    }

    async fn examination_info(&self, _token: &str) -> Result<ExaminationInfo, FetchError> {
        Ok(self.guard()?.examination)
    }

    async fn update_examination_number(
        &self,
        _token: &str,
        number: u32,
    ) -> Result<String, FetchError> {
        self.guard()?;
        self.data.lock().unwrap().examination = ExaminationInfo::registered(number);
        Ok("Examination number updated.".into())
    }

    async fn waiting_time_info(&self, _token: &str) -> Result<WaitingTimeInfo, FetchError> {
        Ok(self.guard()?.waiting)
    }
}

struct TestApp {
    platform: Arc<FakePlatform>,
    backend: Arc<FakeBackend>,
}

impl UiApp for TestApp {
    fn app_id(&self) -> String {
        "app-test".into()
    }

    fn platform(&self) -> Arc<dyn HostPlatform> {
        Arc::clone(&self.platform) as Arc<dyn HostPlatform>
    }

    fn backend(&self) -> Arc<dyn ClinicBackend> {
        Arc::clone(&self.backend) as Arc<dyn ClinicBackend>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Numbers,
    Register,
    Waiting,
    /// Mounts a minimal gated screen and immediately drives the login flow,
    /// standing in for the user tapping the login button.
    LoginFlow,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Numbers => rsx! { NumbersView {} },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::Waiting => rsx! { WaitingView {} },
        ViewKind::LoginFlow => rsx! { LoginFlowView {} },
    }
}

#[component]
fn LoginFlowView() -> Element {
    let session = use_screen_session();
    use_hook(|| {
        let session = session.clone();
        spawn(async move {
            session.request_login();
        });
    });
    rsx! {
        GatePanel { session: session.clone(),
            p { "session ready" }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub platform: Arc<FakePlatform>,
    pub backend: Arc<FakeBackend>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuilds and drives the dom until the session and resource futures
    /// settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    platform: FakePlatform,
    backend: FakeBackend,
) -> ViewHarness {
    let platform = Arc::new(platform);
    let backend = Arc::new(backend);
    let app = Arc::new(TestApp {
        platform: Arc::clone(&platform),
        backend: Arc::clone(&backend),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        platform,
        backend,
    }
}
