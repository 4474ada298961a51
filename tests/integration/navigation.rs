//! Integration tests for navigation, the archive and the system log

use super::common::terminal::{assert_screen_contains, key, mouse, render_app};
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use termfolio::ui::components::{ArchiveView, NavBar};
use termfolio::ui::Focus;
use termfolio::{App, AppOptions, Config, ProjectFilter, Route};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn app_at(route: Route) -> App {
    let config = Config::default().with_boot_enabled(false);
    App::new(config, AppOptions { route }).with_opener(|_| Ok(()))
}

/// (action, path) of every log entry, oldest first
fn log_entries(app: &mut App) -> Vec<(String, Option<String>)> {
    app.drain_log();
    app.log()
        .entries()
        .map(|e| (e.action.clone(), e.path.clone()))
        .collect()
}

fn entry(action: &str, path: &str) -> (String, Option<String>) {
    (action.to_string(), Some(path.to_string()))
}

/// Archive page area for a WIDTH x HEIGHT terminal: below the nav bar, above
/// a three-row log panel and the footer, inset by the page margin
fn archive_area() -> Rect {
    Rect::new(2, 2, WIDTH - 4, HEIGHT - 7)
}

#[tokio::test]
async fn test_number_keys_switch_pages() {
    let mut app = app_at(Route::Home);
    assert_screen_contains(&render_app(&mut app, WIDTH, HEIGHT), "ABDALRAHMAN");

    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.route(), &Route::Projects);
    assert_screen_contains(&render_app(&mut app, WIDTH, HEIGHT), "PROJECT_ARCHIVE");

    app.handle_key(key(KeyCode::Char('3')));
    assert_eq!(app.route(), &Route::About);
    assert!(app.scroll() > 0, "about view scrolls to its section");
    assert_screen_contains(&render_app(&mut app, WIDTH, HEIGHT), "ABOUT_ME");

    app.handle_key(key(KeyCode::Char('1')));
    assert_eq!(app.route(), &Route::Home);
    assert_eq!(app.scroll(), 0);

    let paths: Vec<_> = log_entries(&mut app)
        .into_iter()
        .filter_map(|(_, path)| path)
        .collect();
    // About shares the home page, so returning to Home is not a new visit
    assert_eq!(paths, vec!["/", "/projects", "/"]);
}

#[tokio::test]
async fn test_about_from_home_only_scrolls() {
    let mut app = app_at(Route::Home);
    app.handle_key(key(KeyCode::Char('3')));
    assert_eq!(app.route(), &Route::About);
    assert_eq!(log_entries(&mut app), vec![entry("User navigated to", "/")]);
}

#[tokio::test]
async fn test_same_page_twice_logs_once() {
    let mut app = app_at(Route::Home);
    app.handle_key(key(KeyCode::Char('2')));
    app.handle_key(key(KeyCode::Char('2')));
    let visits = log_entries(&mut app)
        .into_iter()
        .filter(|(action, _)| action == "User navigated to")
        .count();
    assert_eq!(visits, 2);
}

#[tokio::test]
async fn test_archive_filter_and_open_project() {
    let mut app = app_at(Route::Projects);
    assert_eq!(app.visible_projects().len(), 15);

    // All -> C/C++ -> Python
    app.handle_key(key(KeyCode::Char('f')));
    app.handle_key(key(KeyCode::Char('f')));
    assert_eq!(app.filter(), ProjectFilter::Python);
    let ids: Vec<_> = app.visible_projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["django-blog"]);

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.route(), &Route::ProjectDetail("django-blog".to_string()));
    assert_screen_contains(&render_app(&mut app, WIDTH, HEIGHT), "STACK:");

    let entries = log_entries(&mut app);
    let tail: Vec<_> = entries.iter().rev().take(3).rev().cloned().collect();
    assert_eq!(tail[0].0, "Accessed project:");
    assert_eq!(tail[1], entry("User navigated to", "/projects/django-blog"));
    assert_eq!(tail[2].0, "Loaded file:");

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.route(), &Route::Projects);
    assert_eq!(app.filter(), ProjectFilter::Python, "filter survives the round trip");
}

#[tokio::test]
async fn test_archive_selection_logs_hover() {
    let mut app = app_at(Route::Projects);
    app.handle_key(key(KeyCode::Char('j')));
    app.handle_key(key(KeyCode::Char('j')));
    assert_eq!(app.selected(), 2);

    let title = app.visible_projects()[2].title;
    assert_eq!(
        log_entries(&mut app).last().cloned(),
        Some(entry("Hovering project:", title))
    );

    // Selection stops at the ends
    app.handle_key(key(KeyCode::Char('k')));
    app.handle_key(key(KeyCode::Char('k')));
    app.handle_key(key(KeyCode::Char('k')));
    assert_eq!(app.selected(), 0);
}

#[tokio::test]
async fn test_prev_filter_cycles_backwards() {
    let mut app = app_at(Route::Projects);
    for _ in 0..3 {
        app.handle_key(key(KeyCode::Char('F')));
    }
    // All -> Web -> Python -> C/C++
    assert_eq!(app.filter(), ProjectFilter::CCpp);
    assert!(!app.visible_projects().is_empty());
    assert_screen_contains(&render_app(&mut app, WIDTH, HEIGHT), "records found");
}

#[tokio::test]
async fn test_unknown_route_shows_404_and_returns_home() {
    let mut app = app_at(Route::parse("/missing/page"));
    assert_eq!(app.route(), &Route::NotFound("/missing/page".to_string()));

    let screen = render_app(&mut app, WIDTH, HEIGHT);
    assert_screen_contains(&screen, "404");
    assert_screen_contains(&screen, "/missing/page");

    app.handle_key(key(KeyCode::Char('h')));
    assert_eq!(app.route(), &Route::Home);
}

#[tokio::test]
async fn test_not_found_goes_back_to_previous_page() {
    let mut app = app_at(Route::Projects);
    app.navigate(Route::parse("/projects/a/b"));
    assert_eq!(app.route(), &Route::NotFound("/projects/a/b".to_string()));
    assert_screen_contains(&render_app(&mut app, WIDTH, HEIGHT), "GO_BACK");

    app.handle_key(key(KeyCode::Char('b')));
    assert_eq!(app.route(), &Route::Projects);
    assert_eq!(
        log_entries(&mut app).last().cloned(),
        Some(entry("User navigated to", "/projects"))
    );
}

#[tokio::test]
async fn test_not_found_on_startup_goes_back_home() {
    let mut app = app_at(Route::parse("/nowhere"));
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.route(), &Route::Home);
}

#[tokio::test]
async fn test_github_link_is_logged() {
    let mut app = app_at(Route::parse("/projects/webserv"));
    app.handle_key(key(KeyCode::Char('o')));
    assert_eq!(
        log_entries(&mut app).last().cloned(),
        Some(entry("External link:", "GitHub"))
    );
}

#[tokio::test]
async fn test_unknown_project_redirects_to_archive() {
    let app = app_at(Route::ProjectDetail("no-such-project".to_string()));
    assert_eq!(app.route(), &Route::Projects);
}

#[tokio::test]
async fn test_tab_focuses_nav_and_scrambles_label() {
    let mut app = app_at(Route::Home);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Nav(0));
    assert!(app.nav_label(0).expect("label").in_progress);

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.focus(), Focus::Nav(1));
    assert!(app.nav_label(1).expect("label").in_progress);

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.route(), &Route::Projects);
    assert_eq!(app.focus(), Focus::Page);
}

#[tokio::test]
async fn test_log_toggle_by_key_and_click() {
    let mut app = app_at(Route::Home);
    assert_screen_contains(&render_app(&mut app, WIDTH, HEIGHT), "[+]");

    app.handle_key(key(KeyCode::Char('l')));
    assert!(app.log().is_expanded());
    assert_screen_contains(&render_app(&mut app, WIDTH, HEIGHT), "[-]");

    // With one entry the expanded panel spans rows 26..29
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, HEIGHT - 3));
    assert!(!app.log().is_expanded());
}

#[tokio::test]
async fn test_mouse_clicks_nav_and_filters() {
    let mut app = app_at(Route::Home);
    render_app(&mut app, WIDTH, HEIGHT);

    let labels: Vec<_> = (0..4).filter_map(|i| app.nav_label(i)).collect();
    let areas = NavBar::label_areas(Rect::new(0, 0, WIDTH, 1), &labels);
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), areas[1].x, 0));
    assert_eq!(app.route(), &Route::Projects);
    render_app(&mut app, WIDTH, HEIGHT);

    let (filter, rect) = ArchiveView::filter_areas(archive_area())
        .into_iter()
        .find(|(filter, _)| *filter == ProjectFilter::Web)
        .expect("web filter button");
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), rect.x + 1, rect.y));
    assert_eq!(app.filter(), filter);
    assert_eq!(
        log_entries(&mut app).last().cloned(),
        Some(entry("Filter applied:", ProjectFilter::Web.label()))
    );
}

#[tokio::test]
async fn test_download_cv_logs_file_name() {
    let mut app = app_at(Route::Home);
    app.handle_key(key(KeyCode::Char('d')));
    assert_eq!(
        log_entries(&mut app).last().cloned(),
        Some(entry("Downloading:", "Abdalrahman_Eleimat_CV.pdf"))
    );
}

#[tokio::test]
async fn test_log_keeps_latest_entries() {
    let mut app = app_at(Route::Home);
    for _ in 0..8 {
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('1')));
    }
    app.drain_log();
    assert_eq!(app.log().len(), app.log().capacity());
    assert_eq!(
        app.log().latest().and_then(|e| e.path.as_deref()),
        Some("/")
    );
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = app_at(Route::Home);
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}
