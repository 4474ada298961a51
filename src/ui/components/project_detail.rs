use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::markdown::{code_lines, MarkdownRenderer};
use super::theme::{self, MUTED, PRIMARY_DIM, SECONDARY};
use crate::data::{ContentBlock, Project};

/// One project's write-up
pub struct ProjectDetail<'a> {
    project: &'a Project,
    scroll: u16,
}

impl<'a> ProjectDetail<'a> {
    pub fn new(project: &'a Project, scroll: u16) -> Self {
        Self { project, scroll }
    }

    pub fn lines(project: &Project) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("< BACK_TO_ARCHIVE [Esc]", theme::muted())),
            Line::from(""),
            Line::from(Span::styled(
                project.title.to_string(),
                theme::heading().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(Span::styled(
                project.short_description.to_string(),
                Style::default().fg(PRIMARY_DIM),
            )),
        ];

        let mut stack = vec![Span::styled("STACK: ", theme::muted())];
        for tech in project.tech_stack {
            stack.push(Span::styled(format!("[{tech}]"), theme::secondary()));
            stack.push(Span::raw(" "));
        }
        lines.push(Line::from(stack));
        lines.push(Line::from(Span::styled("─".repeat(48), theme::muted())));
        lines.push(Line::from(""));

        let renderer = MarkdownRenderer::new();
        for block in project.content {
            match block {
                ContentBlock::Text(markdown) => {
                    lines.extend(renderer.render(markdown).lines);
                }
                ContentBlock::Code { language, source } => {
                    lines.extend(code_lines(*language, source));
                    lines.push(Line::from(""));
                }
                ContentBlock::Image { alt } => {
                    lines.push(Line::from(Span::styled(
                        format!("[IMAGE: {alt}]"),
                        Style::default().fg(SECONDARY).add_modifier(Modifier::ITALIC),
                    )));
                    lines.push(Line::from(""));
                }
            }
        }

        lines.push(Line::from(vec![
            Span::styled("> SOURCE: ", theme::muted()),
            Span::styled(
                project.github_link.to_string(),
                Style::default()
                    .fg(SECONDARY)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("  [o]", Style::default().fg(MUTED)),
        ]));
        lines
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(PRIMARY_DIM));
        Paragraph::new(Self::lines(self.project))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::project_by_id;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_blocks_render_in_order() {
        let project = project_by_id("so_long").expect("so_long exists");
        let lines = plain(&ProjectDetail::lines(project));

        let overview = lines.iter().position(|l| l == "## Project Overview");
        let image = lines
            .iter()
            .position(|l| l == "[IMAGE: so_long gameplay screenshot]");
        let validation = lines.iter().position(|l| l == "## Map Validation");
        assert!(overview.is_some());
        assert!(overview < image && image < validation);
    }

    #[test]
    fn test_code_block_labelled_with_language() {
        let project = project_by_id("webserv").expect("webserv exists");
        let lines = plain(&ProjectDetail::lines(project));
        assert!(lines.iter().any(|l| l == "┌─ cpp"));
        assert!(lines
            .iter()
            .any(|l| l.contains("https://github.com/Abdalrhman-Olimat/webserv")));
    }

    #[test]
    fn test_code_with_hash_quotes_kept_whole() {
        let project = project_by_id("born2beroot").expect("born2beroot exists");
        let lines = plain(&ProjectDetail::lines(project));
        assert!(lines.iter().any(|l| l == "┌─ bash"));
        assert!(lines.iter().any(|l| l.contains("wall \"#Architecture: $arch")));
        assert!(lines
            .iter()
            .any(|l| l.contains("#Disk Usage: $disk_percent\"")));
    }
}
