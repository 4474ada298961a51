use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{MUTED, PANEL_BG, PRIMARY, PRIMARY_DIM, SECONDARY, SELECTED_BG};
use crate::anim::ScrambleFrame;

const BRAND: &str = " > TERMFOLIO ";
const GAP: u16 = 2;

/// Top navigation bar. Each label is whatever its scramble animator shows.
pub struct NavBar<'a> {
    labels: &'a [ScrambleFrame],
    active: Option<usize>,
    hovered: Option<usize>,
}

impl<'a> NavBar<'a> {
    pub fn new(labels: &'a [ScrambleFrame]) -> Self {
        Self {
            labels,
            active: None,
            hovered: None,
        }
    }

    pub fn active(mut self, active: Option<usize>) -> Self {
        self.active = active;
        self
    }

    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Screen cells covered by each label, for mouse hit-testing
    pub fn label_areas(area: Rect, labels: &[ScrambleFrame]) -> Vec<Rect> {
        let mut x = area.x + BRAND.width() as u16 + GAP;
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let width = Self::label_text(i, &label.text).width() as u16;
                let rect = Rect::new(x, area.y, width, 1).intersection(area);
                x = x.saturating_add(width + GAP);
                rect
            })
            .collect()
    }

    fn label_text(index: usize, text: &str) -> String {
        format!("[{}] {}", index + 1, text)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                BRAND,
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(GAP as usize)),
        ];

        for (i, label) in self.labels.iter().enumerate() {
            let is_active = self.active == Some(i);
            let is_hovered = self.hovered == Some(i);

            let mut style = if label.in_progress {
                Style::default().fg(SECONDARY)
            } else if is_active {
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(PRIMARY_DIM)
            };
            if is_hovered {
                style = style.bg(SELECTED_BG);
            }
            if is_active {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            spans.push(Span::styled(Self::label_text(i, &label.text), style));
            spans.push(Span::raw(" ".repeat(GAP as usize)));
        }

        spans.push(Span::styled("[ONLINE]", Style::default().fg(MUTED)));

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(PANEL_BG))
            .render(area, buf);
    }
}
