use platform::FakePlatform;

use super::test_harness::{FakeBackend, ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn numbers_view_renders_both_numbers() {
    let backend = FakeBackend::new();
    backend.set_ticket(12);
    backend.set_examination(345);
    let mut harness =
        setup_view_harness(ViewKind::Numbers, FakePlatform::logged_in("token"), backend);

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Queue ticket"), "missing heading in {html}");
    assert!(html.contains("12"), "missing ticket number in {html}");
    assert!(html.contains("345"), "missing examination number in {html}");
    // Mounting a screen establishes its session exactly once.
    assert_eq!(harness.platform.init_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn numbers_view_renders_placeholders_without_data() {
    let mut harness = setup_view_harness(
        ViewKind::Numbers,
        FakePlatform::logged_in("token"),
        FakeBackend::new(),
    );

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No ticket yet."), "missing placeholder in {html}");
    assert!(
        html.contains("Not registered yet."),
        "missing placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn numbers_view_prompts_login_when_logged_out() {
    let mut harness = setup_view_harness(
        ViewKind::Numbers,
        FakePlatform::logged_out(),
        FakeBackend::new(),
    );

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Please log in"), "missing prompt in {html}");
    assert!(html.contains("Log in"), "missing login button in {html}");
    // No data was fetched while logged out.
    assert_eq!(harness.backend.calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn numbers_view_reports_a_failed_start() {
    let platform = FakePlatform::logged_in("token");
    platform.fail_init("host rejected app id");
    let mut harness = setup_view_harness(ViewKind::Numbers, platform, FakeBackend::new());

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("The app could not start."),
        "missing error in {html}"
    );
    assert!(
        html.contains("host rejected app id"),
        "missing reason in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn expired_token_shows_the_relogin_banner() {
    let backend = FakeBackend::new();
    backend.reject_with_auth_expired();
    let mut harness =
        setup_view_harness(ViewKind::Numbers, FakePlatform::logged_in("stale"), backend);

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Please log in again"),
        "missing banner in {html}"
    );
    assert!(
        html.contains("Log in again"),
        "missing relogin button in {html}"
    );
    // The second query is suspended once the first reports the expiry, so at
    // most two calls ever reach the backend.
    assert!(harness.backend.calls() <= 2, "too many calls: {}", harness.backend.calls());
}

#[tokio::test(flavor = "current_thread")]
async fn failed_login_surfaces_a_message() {
    let platform = FakePlatform::logged_out();
    platform.fail_login("user dismissed the prompt");
    let mut harness = setup_view_harness(ViewKind::LoginFlow, platform, FakeBackend::new());

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Login failed. Please try again later."),
        "missing failure message in {html}"
    );
    // Still recoverable: the login button stays available.
    assert!(html.contains("Log in"), "missing login button in {html}");
    assert_eq!(harness.platform.login_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn successful_login_unlocks_the_screen() {
    let platform = FakePlatform::logged_out();
    platform.login_issues_token("fresh");
    let mut harness = setup_view_harness(ViewKind::LoginFlow, platform, FakeBackend::new());

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("session ready"), "missing content in {html}");
    assert!(
        !html.contains("Login failed"),
        "stale failure message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn register_view_renders_the_form() {
    let backend = FakeBackend::new();
    backend.set_examination(345);
    let mut harness = setup_view_harness(
        ViewKind::Register,
        FakePlatform::logged_in("token"),
        backend,
    );

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Currently registered: 345"),
        "missing current number in {html}"
    );
    assert!(html.contains("Examination number"), "missing label in {html}");
    assert!(html.contains("Save"), "missing submit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn waiting_view_offers_a_check_for_the_issued_ticket() {
    let backend = FakeBackend::new();
    backend.set_ticket(12);
    let mut harness =
        setup_view_harness(ViewKind::Waiting, FakePlatform::logged_in("token"), backend);

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Your ticket: No. 12"),
        "missing ticket in {html}"
    );
    assert!(
        html.contains("Check waiting time"),
        "missing check button in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn waiting_view_asks_for_a_ticket_when_none_is_issued() {
    let mut harness = setup_view_harness(
        ViewKind::Waiting,
        FakePlatform::logged_in("token"),
        FakeBackend::new(),
    );

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Enter a ticket number"),
        "missing manual form prompt in {html}"
    );
    assert!(html.contains("Ticket number"), "missing label in {html}");
}
