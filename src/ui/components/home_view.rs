use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::skill_matrix::skill_matrix_lines;
use super::theme::{self, MUTED, PRIMARY, PRIMARY_DIM, SECONDARY};
use crate::data::{AFFILIATION, BIO, FIRST_NAME, FOCUS_AREAS, LAST_NAME, ROLE, SKILLS, TIMELINE};

/// Scroll position of the about section within [`HomeView`]
pub const ABOUT_OFFSET: u16 = 12;

/// Landing page: hero, about, focus areas, timeline and skills
pub struct HomeView {
    scroll: u16,
}

impl HomeView {
    pub fn new(scroll: u16) -> Self {
        Self { scroll }
    }

    pub fn lines() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("> IDENTITY_VERIFIED: TRUE", theme::muted())),
            Line::from(""),
            Line::from(Span::styled(
                FIRST_NAME,
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                LAST_NAME,
                Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(ROLE, Style::default().fg(PRIMARY_DIM))),
            Line::from(Span::styled(AFFILIATION, theme::secondary())),
            Line::from(""),
            Line::from(vec![
                Span::styled("> VIEW_PROJECTS [2]", theme::primary()),
                Span::raw("   "),
                Span::styled("> INIT_CONTACT [4]", theme::secondary()),
                Span::raw("   "),
                Span::styled("> DOWNLOAD_CV [d]", theme::primary()),
            ]),
            Line::from(""),
            Line::from(Span::styled("─".repeat(48), theme::muted())),
        ];
        debug_assert_eq!(lines.len(), ABOUT_OFFSET as usize);

        lines.push(Line::from(Span::styled("ABOUT_ME", theme::heading())));
        lines.push(Line::from(Span::styled(
            "> Loading personal data...",
            theme::muted(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("[PROFILE]", theme::secondary())));
        for paragraph in BIO {
            lines.push(Line::from(vec![
                Span::styled("> ", theme::primary()),
                Span::styled(*paragraph, Style::default().fg(PRIMARY_DIM)),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("CORE_FUNCTIONS", theme::heading())));
        for area in FOCUS_AREAS {
            lines.push(Line::from(Span::styled(
                format!("[{}]", area.title),
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", area.description),
                Style::default().fg(MUTED),
            )));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("JOURNEY_LOG", theme::heading())));
        for entry in TIMELINE {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", entry.year), theme::secondary()),
                Span::styled(entry.event, Style::default().fg(PRIMARY_DIM)),
                Span::styled(format!("  <{}>", entry.status), theme::muted()),
            ]));
        }
        lines.push(Line::from(""));

        lines.extend(skill_matrix_lines(SKILLS));
        lines
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(PRIMARY_DIM));
        Paragraph::new(Self::lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }

    /// Largest useful scroll offset
    pub fn max_scroll() -> u16 {
        Self::lines().len().saturating_sub(1) as u16
    }
}
