use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::theme::{BACKGROUND, MUTED, PRIMARY, PRIMARY_DIM, SECONDARY};
use crate::anim::{RevealFrame, RevealPhase};

/// Full-screen boot log driven by a reveal frame
pub struct BootScreen<'a> {
    frame: &'a RevealFrame,
    /// Frame counter, used for the cursor blink and the tear pattern
    tick: u64,
}

impl<'a> BootScreen<'a> {
    pub fn new(frame: &'a RevealFrame, tick: u64) -> Self {
        Self { frame, tick }
    }

    fn line_style(line: &str) -> Style {
        if line.contains("[OK]") {
            Style::default().fg(PRIMARY)
        } else if line.contains("[  ]") {
            Style::default().fg(SECONDARY)
        } else if line.contains(">>>") {
            Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PRIMARY_DIM)
        }
    }

    fn log_lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = self
            .frame
            .revealed
            .iter()
            .map(|text| Line::from(Span::styled(text.clone(), Self::line_style(text))))
            .collect();

        if self.frame.phase == RevealPhase::Revealing {
            let cursor = if (self.tick / 30) % 2 == 0 { "█" } else { " " };
            lines.push(Line::from(Span::styled(cursor, Style::default().fg(PRIMARY))));
        }
        lines
    }

    fn progress_line(&self, width: u16) -> Line<'static> {
        let progress = self.frame.progress();
        let percent = (progress * 100.0).round() as u16;
        let label = format!(" {percent:>3}%");
        let bar_width = width.saturating_sub(label.len() as u16 + 2) as usize;
        let filled = ((bar_width as f64) * progress).round() as usize;
        Line::from(vec![
            Span::styled("[", Style::default().fg(MUTED)),
            Span::styled("█".repeat(filled), Style::default().fg(PRIMARY)),
            Span::styled(
                "░".repeat(bar_width.saturating_sub(filled)),
                Style::default().fg(PRIMARY_DIM),
            ),
            Span::styled("]", Style::default().fg(MUTED)),
            Span::styled(label, Style::default().fg(PRIMARY)),
        ])
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(BACKGROUND));

        let width = area.width.min(64);
        let height = (self.frame.total as u16 + 6).min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let boot_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PRIMARY_DIM))
            .title(Span::styled(" BOOT_SEQUENCE ", Style::default().fg(PRIMARY)));
        let inner = block.inner(boot_area);
        block.render(boot_area, buf);

        let [log_area, _, progress_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.log_lines()).render(log_area, buf);
        Paragraph::new(self.progress_line(progress_area.width)).render(progress_area, buf);

        if self.frame.phase == RevealPhase::Glitching {
            self.tear(boot_area, buf);
        }
    }

    /// Screen-tear: shift some rows sideways and tint them
    fn tear(&self, area: Rect, buf: &mut Buffer) {
        for row in area.top()..area.bottom() {
            let seed = (row as u64)
                .wrapping_mul(31)
                .wrapping_add(self.tick.wrapping_mul(17));
            if seed % 3 != 0 {
                continue;
            }
            let shift = (seed % 5 + 1) as u16;
            for col in (area.left()..area.right()).rev() {
                let src = col.checked_sub(shift).filter(|c| *c >= area.left());
                let cell = match src {
                    Some(src) => buf[(src, row)].clone(),
                    None => {
                        let mut blank = buf[(col, row)].clone();
                        blank.set_symbol(" ");
                        blank
                    }
                };
                buf[(col, row)] = cell;
                buf[(col, row)].set_fg(SECONDARY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(revealed: &[&str], total: usize, phase: RevealPhase) -> RevealFrame {
        RevealFrame {
            revealed: revealed.iter().map(|s| s.to_string()).collect(),
            total,
            phase,
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_revealed_lines_only() {
        let frame = frame(&["SYSTEM BOOT INITIATED..."], 3, RevealPhase::Revealing);
        let area = Rect::new(0, 0, 70, 12);
        let mut buf = Buffer::empty(area);
        BootScreen::new(&frame, 0).render(area, &mut buf);

        let text: String = (0..area.height).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("SYSTEM BOOT INITIATED..."));
        assert!(text.contains(" 33%"));
    }

    #[test]
    fn test_ok_lines_use_primary() {
        assert_eq!(BootScreen::line_style("[OK] x").fg, Some(PRIMARY));
        assert_eq!(BootScreen::line_style("[  ] x").fg, Some(SECONDARY));
        assert!(BootScreen::line_style(">>> x <<<")
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let frame = frame(&["a", "b"], 2, RevealPhase::Glitching);
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        BootScreen::new(&frame, 7).render(area, &mut buf);
    }
}
