use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::theme::{BACKGROUND, MUTED, PRIMARY, PRIMARY_DIM, SECONDARY};
use crate::syslog::{LogEntry, SystemLog};

/// Bottom panel listing recent user actions
pub struct SystemLogView<'a> {
    log: &'a SystemLog,
}

impl<'a> SystemLogView<'a> {
    pub fn new(log: &'a SystemLog) -> Self {
        Self { log }
    }

    /// Rows the panel wants, borders included
    pub fn desired_height(log: &SystemLog) -> u16 {
        let rows = if log.is_expanded() {
            log.len().max(1)
        } else {
            1
        };
        rows as u16 + 2
    }

    fn entry_line(entry: &LogEntry) -> Line<'static> {
        let mut spans = vec![
            Span::styled(format!("[{}] ", entry.time_label()), Style::default().fg(MUTED)),
            Span::styled(entry.action.clone(), Style::default().fg(PRIMARY)),
        ];
        if let Some(path) = &entry.path {
            spans.push(Span::styled(format!(" {path}"), Style::default().fg(SECONDARY)));
        }
        Line::from(spans)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let toggle = if self.log.is_expanded() { "[-]" } else { "[+]" };
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(PRIMARY_DIM))
            .title(Line::from(vec![
                Span::styled(
                    " SYSTEM_LOG.exe ",
                    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("[{} entries] ", self.log.len()),
                    Style::default().fg(MUTED),
                ),
                Span::styled(format!("{toggle} "), Style::default().fg(SECONDARY)),
            ]))
            .style(Style::default().bg(BACKGROUND));

        let lines: Vec<Line<'static>> = if self.log.is_empty() {
            vec![Line::from(Span::styled(
                "> Waiting for user input...",
                Style::default().fg(MUTED),
            ))]
        } else if self.log.is_expanded() {
            self.log.entries().map(Self::entry_line).collect()
        } else {
            self.log.latest().map(Self::entry_line).into_iter().collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
