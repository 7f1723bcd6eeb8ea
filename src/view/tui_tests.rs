//! Event-loop tests for TuiApp over a TestBackend.

use super::*;
use crate::model::FetchError;
use crate::source::{FetchedPage, FixtureSource, PageRequest};
use ratatui::backend::TestBackend;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};

const WAIT: Duration = Duration::from_secs(5);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn fixture(count: u32) -> FixtureSource {
    let values = (1..=count)
        .map(|n| {
            json!({
                "flight_number": n,
                "mission_name": format!("Mission {n}"),
                "upcoming": n % 2 == 0,
                "launch_date_local": "2006-03-24T22:30:00+12:00",
                "details": format!("Details for mission {n}"),
            })
        })
        .collect();
    FixtureSource::from_values("test.json", values)
}

/// Fixture source that answers after a delay.
struct SlowSource {
    inner: FixtureSource,
    delay: Duration,
}

impl LaunchSource for SlowSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<FetchedPage, FetchError> {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch_page(request).await
    }

    fn describe(&self) -> String {
        "slow fixture".to_string()
    }
}

/// Fixture source whose first fetch of `failing_page` fails.
struct FlakySource {
    inner: FixtureSource,
    failing_page: u32,
    failed: AtomicBool,
}

impl LaunchSource for FlakySource {
    async fn fetch_page(&self, request: PageRequest) -> Result<FetchedPage, FetchError> {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if request.page == self.failing_page && !self.failed.swap(true, Ordering::SeqCst) {
            return Err(FetchError::Status {
                url: "fixture".to_string(),
                status: 503,
            });
        }
        self.inner.fetch_page(request).await
    }

    fn describe(&self) -> String {
        "flaky fixture".to_string()
    }
}

fn launch_value(n: u32) -> Value {
    json!({"flight_number": n, "mission_name": format!("Mission {n}")})
}

fn app_with<S: LaunchSource>(
    source: S,
    page_size: u32,
    width: u16,
    height: u16,
) -> TuiApp<TestBackend, S> {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let args = CliArgs::new(page_size, None, ColorConfig::disabled());
    TuiApp::with_terminal(terminal, source, args)
        .unwrap()
        .with_today(today())
}

fn slow(count: u32) -> SlowSource {
    SlowSource {
        inner: fixture(count),
        delay: Duration::from_millis(20),
    }
}

/// Step and apply fetches until the app stops requesting pages.
fn settle<S: LaunchSource>(app: &mut TuiApp<TestBackend, S>) {
    app.step().unwrap();
    for _ in 0..20 {
        if app.wait_for_page(WAIT).unwrap().is_none() {
            break;
        }
    }
}

/// 80x24 app with its initial pages loaded.
fn loaded_app(count: u32, page_size: u32) -> TuiApp<TestBackend, SlowSource> {
    let mut app = app_with(slow(count), page_size, 80, 24);
    settle(&mut app);
    app
}

fn screen<S: LaunchSource>(app: &TuiApp<TestBackend, S>) -> String {
    buffer_to_string(app.terminal().backend().buffer())
}

fn press<S: LaunchSource>(app: &mut TuiApp<TestBackend, S>, code: KeyCode) -> bool {
    let quit = app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    app.step().unwrap();
    quit
}

fn type_text<S: LaunchSource>(app: &mut TuiApp<TestBackend, S>, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

// ===== Loading =====

#[test]
fn tui_error_from_io_error() {
    let tui_err: TuiError = io::Error::other("test error").into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn first_frame_requests_page_one_and_shows_loading() {
    let source = SlowSource {
        inner: fixture(3),
        delay: Duration::from_millis(300),
    };
    let mut app = app_with(source, 10, 80, 24);

    app.step().unwrap();

    assert!(app.app_state().pagination().is_loading());
    assert!(screen(&app).contains("Loading..."));
}

#[test]
fn first_page_renders_cards() {
    let app = loaded_app(10, 10);

    let text = screen(&app);
    assert!(text.contains("Mission 1"));
    assert!(text.contains("10 launches"));
    assert_eq!(app.app_state().pagination().page(), 2);
}

#[test]
fn last_card_off_screen_does_not_load_more() {
    // 20 list rows hold fewer than ten 3-row cards.
    let app = loaded_app(30, 10);

    assert!(!app.app_state().pagination().is_loading());
    assert_eq!(app.app_state().records().len(), 10);
}

#[test]
fn visible_last_card_keeps_loading_until_exhausted() {
    let app = loaded_app(5, 2);

    let pagination = app.app_state().pagination();
    assert_eq!(app.app_state().records().len(), 5);
    assert!(!pagination.has_more());
    assert_eq!(pagination.page(), 4, "three non-empty pages were appended");
    assert!(screen(&app).contains("No more launches to load"));
}

#[test]
fn selecting_last_card_loads_next_page() {
    let mut app = loaded_app(15, 10);
    assert_eq!(app.app_state().records().len(), 10);

    app.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
    app.step().unwrap();
    assert!(app.app_state().pagination().is_loading());

    assert_eq!(app.wait_for_page(WAIT).unwrap(), Some(PageOutcome::Appended(5)));
    assert_eq!(app.app_state().records().len(), 15);
    assert_eq!(app.app_state().selected(), 9, "highlight stays on the same card");
}

#[test]
fn load_more_key_requests_next_page() {
    let mut app = loaded_app(30, 10);

    press(&mut app, KeyCode::Char('r'));
    assert!(app.app_state().pagination().is_loading());

    app.wait_for_page(WAIT).unwrap();
    assert_eq!(app.app_state().records().len(), 20);
}

#[test]
fn page_of_only_malformed_records_keeps_loading() {
    let values = vec![
        launch_value(1),
        launch_value(2),
        Value::Null,
        Value::Null,
        launch_value(5),
        launch_value(6),
    ];
    let source = SlowSource {
        inner: FixtureSource::from_values("test.json", values),
        delay: Duration::from_millis(20),
    };
    let mut app = app_with(source, 2, 80, 40);

    settle(&mut app);

    let ids: Vec<u32> = app
        .app_state()
        .records()
        .iter()
        .map(|r| r.id().get())
        .collect();
    assert_eq!(ids, vec![1, 2, 5, 6]);
    assert!(!app.app_state().pagination().has_more());
}

#[test]
fn failed_page_waits_for_load_more_key() {
    let source = FlakySource {
        inner: fixture(5),
        failing_page: 2,
        failed: AtomicBool::new(false),
    };
    let mut app = app_with(source, 2, 80, 24);

    settle(&mut app);
    for _ in 0..3 {
        app.step().unwrap();
    }

    let pagination = app.app_state().pagination();
    assert_eq!(app.app_state().records().len(), 2);
    assert_eq!(pagination.page(), 2, "failed page is not skipped");
    assert!(pagination.has_more());
    assert!(!pagination.is_loading(), "no automatic retry");

    press(&mut app, KeyCode::Char('r'));
    assert!(app.app_state().pagination().is_loading());
    settle(&mut app);

    assert_eq!(app.app_state().records().len(), 5);
    assert!(!app.app_state().pagination().has_more());
}

// ===== Details =====

#[test]
fn enter_expands_one_card_at_a_time() {
    let mut app = loaded_app(5, 10);

    press(&mut app, KeyCode::Enter);
    let first = app.app_state().visible_record(0).unwrap().id();
    assert!(app.app_state().is_expanded(first));
    let text = screen(&app);
    assert!(text.contains("Hide"));
    assert!(text.contains("Details for mission 1"));
    assert!(text.contains("3/24/2006 (18 years ago)"));

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    let second = app.app_state().visible_record(1).unwrap().id();
    assert!(app.app_state().is_expanded(second));
    assert!(!app.app_state().is_expanded(first));
}

#[test]
fn enter_twice_collapses() {
    let mut app = loaded_app(5, 10);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.app_state().selection().expanded(), None);
}

// ===== Search =====

#[test]
fn typing_in_search_filters_cards() {
    let mut app = loaded_app(12, 20);

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.app_state().focus, FocusPane::Search);
    type_text(&mut app, "mission 1");

    // Mission 1, 10, 11, 12
    assert_eq!(app.app_state().visible_len(), 4);
    assert!(screen(&app).contains("4 of 12 launches"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.app_state().focus, FocusPane::List);
    assert_eq!(app.app_state().search().query(), "mission 1");
}

#[test]
fn q_in_search_is_text_not_quit() {
    let mut app = loaded_app(3, 10);

    press(&mut app, KeyCode::Char('/'));
    let quit = press(&mut app, KeyCode::Char('q'));

    assert!(!quit);
    assert_eq!(app.app_state().search().query(), "q");
}

#[test]
fn backspace_edits_search() {
    let mut app = loaded_app(3, 10);

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "zz");
    assert_eq!(app.app_state().visible_len(), 0);
    assert!(screen(&app).contains("No missions match \"zz\""));

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.app_state().visible_len(), 3);
}

#[test]
fn initial_search_is_applied_before_first_page() {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let args = CliArgs::new(10, Some("mission 2".to_string()), ColorConfig::disabled());
    let mut app = TuiApp::with_terminal(terminal, slow(5), args).unwrap();

    settle(&mut app);

    assert_eq!(app.app_state().visible_len(), 1);
    assert_eq!(app.app_state().records().len(), 5);
}

// ===== Help and quit =====

#[test]
fn help_overlay_swallows_navigation() {
    let mut app = loaded_app(5, 10);

    press(&mut app, KeyCode::Char('?'));
    assert!(app.app_state().help_visible);
    assert!(screen(&app).contains("Keyboard Shortcuts"));

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.app_state().selected(), 0);

    press(&mut app, KeyCode::Esc);
    assert!(!app.app_state().help_visible);
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut app = loaded_app(1, 10);
    assert!(app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

#[test]
fn shutdown_with_fetch_in_flight_returns_promptly() {
    let source = SlowSource {
        inner: fixture(3),
        delay: Duration::from_secs(30),
    };
    let mut app = app_with(source, 10, 80, 24);
    app.step().unwrap();

    app.shutdown();

    assert!(app.wait_for_page(Duration::from_millis(100)).unwrap().is_none());
}
