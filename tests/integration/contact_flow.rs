//! Integration tests for the contact form transmission

use super::common::terminal::{
    assert_screen_contains, ctrl, key, mouse, render_app, type_text,
};
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;
use termfolio::ui::components::ContactView;
use termfolio::ui::{FormField, Focus};
use termfolio::{App, AppOptions, Config, Route};

fn contact_app() -> App {
    let config = Config::default().with_boot_enabled(false);
    App::new(config, AppOptions { route: Route::Contact }).with_opener(|_| Ok(()))
}

fn last_entry(app: &mut App) -> (String, Option<String>) {
    app.drain_log();
    let entry = app.log().latest().expect("log entry");
    (entry.action.clone(), entry.path.clone())
}

#[tokio::test(start_paused = true)]
async fn test_valid_submission_transmits_then_clears() {
    let mut app = contact_app();
    type_text(&mut app, "Ada");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "ada@example.com");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "Hello there");
    app.handle_key(ctrl('s'));

    assert!(app.contact().is_transmitting());
    assert_eq!(
        last_entry(&mut app),
        ("Form submitted:".to_string(), Some("ada@example.com".to_string()))
    );
    assert_screen_contains(&render_app(&mut app, 100, 30), "TRANSMITTING...");

    // A second submit while transmitting is ignored
    app.handle_key(ctrl('s'));
    app.drain_log();
    let before = app.log().len();

    let processed = tokio::time::timeout(Duration::from_secs(5), app.process_next_event())
        .await
        .expect("transmission completes");
    assert!(processed);
    assert!(!app.contact().is_transmitting());
    assert!(app.contact().name.is_empty());
    assert!(app.contact().email.is_empty());
    assert!(app.contact().message.is_empty());
    assert_eq!(app.contact().focus(), Some(FormField::Name));

    assert_eq!(
        last_entry(&mut app),
        ("Message sent:".to_string(), Some("SUCCESS".to_string()))
    );
    assert_eq!(app.log().len(), before + 1);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_email_is_rejected() {
    let mut app = contact_app();
    type_text(&mut app, "Ada");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "not-an-email");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "Hi");
    app.handle_key(ctrl('s'));

    assert!(!app.contact().is_transmitting());
    assert_eq!(app.contact().focus(), Some(FormField::Email));
    let (action, reason) = last_entry(&mut app);
    assert_eq!(action, "Transmission rejected:");
    assert!(reason.is_some());
    assert_screen_contains(&render_app(&mut app, 100, 30), "[ERROR]");

    // Editing clears the error
    app.handle_key(key(KeyCode::Backspace));
    assert!(app.contact().error().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_missing_name_focuses_name_field() {
    let mut app = contact_app();
    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.contact().focus(), Some(FormField::Submit));

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.contact().focus(), Some(FormField::Name));
    assert_eq!(
        last_entry(&mut app),
        (
            "Transmission rejected:".to_string(),
            Some("IDENTIFIER is required".to_string())
        )
    );
}

#[tokio::test(start_paused = true)]
async fn test_digits_are_typed_not_navigated_in_fields() {
    let mut app = contact_app();
    type_text(&mut app, "R2D2");
    assert_eq!(app.route(), &Route::Contact);
    assert_eq!(app.contact().name.value(), "R2D2");

    // Esc leaves the form for the nav bar, where digits navigate again
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.focus(), Focus::Nav(3));
    app.handle_key(key(KeyCode::Char('1')));
    assert_eq!(app.route(), &Route::Home);
}

#[tokio::test]
async fn test_channel_key_opens_and_logs() {
    let mut app = contact_app();
    // Letters are typed into fields, so move to the button first
    app.handle_key(key(KeyCode::BackTab));
    app.handle_key(key(KeyCode::Char('g')));
    assert_eq!(
        last_entry(&mut app),
        ("External link:".to_string(), Some("GitHub".to_string()))
    );
    assert!(app.contact().name.is_empty());
}

#[tokio::test]
async fn test_channel_click_opens_and_logs() {
    let mut app = contact_app();
    render_app(&mut app, 100, 30);

    // Page area of a 100x30 screen, inside the page margin
    let page = Rect::new(2, 2, 96, 23);
    let (x, y) = (page.top()..page.bottom())
        .flat_map(|y| (page.left()..page.right()).map(move |x| (x, y)))
        .find(|(x, y)| ContactView::channel_at(page, *x, *y) == Some(2))
        .expect("linkedin entry on screen");
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x, y));

    assert_eq!(
        last_entry(&mut app),
        ("External link:".to_string(), Some("LinkedIn".to_string()))
    );
}
