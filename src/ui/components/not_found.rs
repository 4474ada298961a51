use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{self, ERROR, MUTED, PRIMARY, SECONDARY};
use crate::data::NOT_FOUND_DIAGNOSTICS;

/// 404 page for a path that doesn't resolve
pub struct NotFoundView<'a> {
    path: &'a str,
}

impl<'a> NotFoundView<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }

    fn diagnostic_style(line: &str) -> Style {
        if line.starts_with("[FAIL]") {
            Style::default().fg(ERROR)
        } else if line.starts_with("[RECO]") {
            Style::default().fg(SECONDARY)
        } else {
            Style::default().fg(MUTED)
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "404",
                Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("[ERROR]", Style::default().fg(ERROR))),
            Line::from(Span::styled("ACCESS_DENIED", theme::heading())),
            Line::from(""),
            Line::from(vec![
                Span::styled("> PATH: ", theme::muted()),
                Span::styled(self.path.to_string(), Style::default().fg(PRIMARY)),
            ]),
            Line::from(""),
        ];
        for diagnostic in NOT_FOUND_DIAGNOSTICS {
            lines.push(Line::from(Span::styled(
                *diagnostic,
                Self::diagnostic_style(diagnostic),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "> RETURN_HOME [h]",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                "> GO_BACK [b]",
                Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD),
            ),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_path_and_both_exits() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        NotFoundView::new("/nowhere").render(area, &mut buf);
        let text: String = (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right()).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("> PATH: /nowhere"));
        assert!(text.contains("> RETURN_HOME [h]"));
        assert!(text.contains("> GO_BACK [b]"));
    }
}
