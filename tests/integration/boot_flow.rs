//! Integration tests for the boot sequence
//!
//! The boot reveal runs on the paused tokio clock, so these tests are
//! deterministic and instant.

use super::common::terminal::{assert_screen_contains, key, render_app};
use crossterm::event::KeyCode;
use std::time::Duration;
use termfolio::ui::Screen;
use termfolio::{App, AppOptions, Config, Route};

fn boot_app(route: Route) -> App {
    App::new(Config::default(), AppOptions { route })
}

#[tokio::test(start_paused = true)]
async fn test_boot_reveals_all_lines_then_lands_on_route() {
    let mut app = boot_app(Route::Projects);
    assert_eq!(app.screen(), Screen::Boot);
    assert_screen_contains(&render_app(&mut app, 100, 30), "BOOT_SEQUENCE");

    // Ten lines at 150ms each
    tokio::time::sleep(Duration::from_millis(1550)).await;
    let screen = render_app(&mut app, 100, 30);
    assert_screen_contains(&screen, "SYSTEM BOOT INITIATED...");
    assert_screen_contains(&screen, ">>> CONNECTION ESTABLISHED <<<");
    assert_screen_contains(&screen, "100%");
    assert_eq!(app.screen(), Screen::Boot);

    let processed = tokio::time::timeout(Duration::from_secs(5), app.process_next_event())
        .await
        .expect("boot should complete");
    assert!(processed);
    assert_eq!(app.screen(), Screen::Main);
    assert_eq!(app.route(), &Route::Projects);

    app.drain_log();
    let entry = app.log().latest().expect("navigation logged");
    assert_eq!(entry.action, "User navigated to");
    assert_eq!(entry.path.as_deref(), Some("/projects"));
}

#[tokio::test(start_paused = true)]
async fn test_key_press_skips_boot() {
    let mut app = boot_app(Route::Home);
    tokio::time::sleep(Duration::from_millis(300)).await;

    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.screen(), Screen::Main);
    assert_eq!(app.route(), &Route::Home);

    // The cancelled reveal never reports completion
    let late = tokio::time::timeout(Duration::from_secs(5), app.process_next_event()).await;
    assert!(late.is_err(), "no BootComplete after skipping");

    app.drain_log();
    assert_eq!(app.log().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_boot_starts_on_main_screen() {
    let config = Config::default().with_boot_enabled(false);
    let mut app = App::new(config, AppOptions { route: Route::Contact });
    assert_eq!(app.screen(), Screen::Main);
    assert_eq!(app.route(), &Route::Contact);

    let screen = render_app(&mut app, 100, 30);
    assert_screen_contains(&screen, "TERMFOLIO");
    assert_screen_contains(&screen, "SEND_TRANSMISSION");
}
