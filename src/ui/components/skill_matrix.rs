use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::{MUTED, PRIMARY, PRIMARY_DIM, SECONDARY};
use crate::data::Skill;

const BAR_WIDTH: usize = 20;

/// One row per skill: name, level bar, percentage and load status
pub fn skill_matrix_lines(skills: &[Skill]) -> Vec<Line<'static>> {
    let name_width = skills.iter().map(|s| s.name.len()).max().unwrap_or(0);

    let mut lines = vec![Line::from(Span::styled(
        "[SKILL_MATRIX]",
        Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD),
    ))];

    for skill in skills {
        let filled = (BAR_WIDTH * skill.level.min(100) as usize + 50) / 100;
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<width$} ", skill.name, width = name_width),
                Style::default().fg(PRIMARY),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(PRIMARY)),
            Span::styled(
                "░".repeat(BAR_WIDTH - filled),
                Style::default().fg(PRIMARY_DIM),
            ),
            Span::styled(
                format!(" {:>3}% EFFICIENCY ", skill.level),
                Style::default().fg(MUTED),
            ),
            Span::styled(
                format!("[{}]", skill.status),
                Style::default().fg(SECONDARY),
            ),
        ]));
    }
    lines
}
