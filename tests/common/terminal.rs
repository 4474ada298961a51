//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders the app into a test buffer and converts the output to strings.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use termfolio::App;

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string, one row per line
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Extract a specific region of the buffer as a string
pub fn buffer_region_to_string(buffer: &Buffer, area: Rect) -> String {
    let mut output = String::new();

    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        if y + 1 < area.y.saturating_add(area.height) {
            output.push('\n');
        }
    }

    output
}

/// Draw `app` into a fresh terminal and return the screen text
pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal.draw(|f| app.draw(f)).expect("draw app");
    buffer_to_string(terminal.backend().buffer())
}

/// Assert that the rendered screen contains expected text
pub fn assert_screen_contains(screen: &str, expected: &str) {
    assert!(
        screen.contains(expected),
        "Screen does not contain expected text.\nExpected: {}\nActual:\n{}",
        expected,
        screen
    );
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Send each character of `text` as a key press
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_buffer_to_string() {
        let mut terminal = create_test_terminal_sized(10, 3);
        terminal
            .draw(|f| {
                let para = Paragraph::new("Hello");
                f.render_widget(para, f.area());
            })
            .unwrap();

        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.starts_with("Hello"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_buffer_region_to_string() {
        let mut terminal = create_test_terminal_sized(20, 5);
        terminal
            .draw(|f| {
                let para = Paragraph::new("Line 1\nLine 2\nLine 3");
                f.render_widget(para, f.area());
            })
            .unwrap();

        let region = Rect::new(0, 0, 6, 2);
        let output = buffer_region_to_string(terminal.backend().buffer(), region);
        assert_eq!(output, "Line 1\nLine 2");
    }
}
