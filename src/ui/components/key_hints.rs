//! Footer key hint rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{BACKGROUND, MUTED, PANEL_BG, SECONDARY};

/// One-line footer of `[key] action` pairs
pub fn render_key_hints(area: Rect, buf: &mut Buffer, hints: &[(&str, &str)]) {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(SECONDARY).bg(PANEL_BG),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(MUTED),
        ));
    }

    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(BACKGROUND))
        .render(area, buf);
}
