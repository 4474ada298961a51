use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{self, MUTED, PRIMARY, PRIMARY_DIM, SECONDARY, SELECTED_BG};
use crate::data::{Project, ProjectFilter};

/// Rows taken by one project card, including the gap below it
pub const CARD_HEIGHT: u16 = 4;
const HEADER_HEIGHT: u16 = 3;

/// Filterable project list
pub struct ArchiveView<'a> {
    projects: &'a [&'static Project],
    filter: ProjectFilter,
    selected: usize,
}

impl<'a> ArchiveView<'a> {
    pub fn new(projects: &'a [&'static Project], filter: ProjectFilter, selected: usize) -> Self {
        Self {
            projects,
            filter,
            selected,
        }
    }

    /// Header, filter bar and list areas
    fn split(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area)
    }

    /// Click targets of the filter buttons
    pub fn filter_areas(area: Rect) -> Vec<(ProjectFilter, Rect)> {
        let [_, bar, _] = Self::split(area);
        let mut x = bar.x;
        ProjectFilter::ALL
            .iter()
            .map(|filter| {
                let width = Self::filter_label(*filter).width() as u16;
                let rect = Rect::new(x, bar.y, width, 1).intersection(bar);
                x = x.saturating_add(width + 1);
                (*filter, rect)
            })
            .collect()
    }

    fn filter_label(filter: ProjectFilter) -> String {
        format!("[{}]", filter.label())
    }

    /// First card index shown so that `selected` stays on screen
    pub fn scroll_offset(list_height: u16, selected: usize) -> usize {
        let visible = (list_height / CARD_HEIGHT).max(1) as usize;
        selected.saturating_sub(visible - 1)
    }

    /// Index of the card under row `y`, if any
    pub fn card_at(&self, area: Rect, y: u16) -> Option<usize> {
        let [_, _, list] = Self::split(area);
        if y < list.y || y >= list.bottom() {
            return None;
        }
        let offset = Self::scroll_offset(list.height, self.selected);
        let index = offset + ((y - list.y) / CARD_HEIGHT) as usize;
        (index < self.projects.len()).then_some(index)
    }

    fn card_lines(project: &Project, selected: bool) -> Vec<Line<'static>> {
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(SECONDARY)
                .bg(SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        };

        let stack: Vec<Span<'static>> = project
            .tech_stack
            .iter()
            .flat_map(|tech| {
                [
                    Span::styled(format!("[{tech}]"), Style::default().fg(PRIMARY_DIM)),
                    Span::raw(" "),
                ]
            })
            .collect();

        let mut tech_line = vec![Span::raw("    ")];
        tech_line.extend(stack);

        vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(SECONDARY)),
                Span::styled(format!("{}.exe", project.id), title_style),
                Span::styled(format!("  {}", project.title), theme::muted()),
            ]),
            Line::from(Span::styled(
                format!("    {}", project.short_description),
                Style::default().fg(MUTED),
            )),
            Line::from(tech_line),
            Line::from(""),
        ]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let [header, bar, list] = Self::split(area);

        Paragraph::new(vec![
            Line::from(Span::styled("PROJECT_ARCHIVE", theme::heading())),
            Line::from(Span::styled(
                format!("> {} records found", self.projects.len()),
                theme::muted(),
            )),
        ])
        .render(header, buf);

        let mut filter_spans = Vec::new();
        for filter in ProjectFilter::ALL {
            let style = if filter == self.filter {
                Style::default()
                    .fg(SECONDARY)
                    .bg(SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(PRIMARY_DIM)
            };
            filter_spans.push(Span::styled(Self::filter_label(filter), style));
            filter_spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(filter_spans)).render(bar, buf);

        if self.projects.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "> NO_FILES_FOUND",
                Style::default().fg(PRIMARY),
            )))
            .render(list, buf);
            return;
        }

        let offset = Self::scroll_offset(list.height, self.selected);
        let lines: Vec<Line<'static>> = self
            .projects
            .iter()
            .enumerate()
            .skip(offset)
            .flat_map(|(i, project)| Self::card_lines(project, i == self.selected))
            .collect();
        Paragraph::new(lines).render(list, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter_projects;

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
                    + "\n"
            })
            .collect()
    }

    #[test]
    fn test_empty_result_message() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ArchiveView::new(&[], ProjectFilter::Python, 0).render(area, &mut buf);
        let text = screen_text(&buf);
        assert!(text.contains("> NO_FILES_FOUND"));
        assert!(text.contains("> 0 records found"));
    }

    #[test]
    fn test_filter_areas_cover_labels() {
        let area = Rect::new(0, 0, 60, 12);
        let projects = filter_projects(ProjectFilter::All);
        let mut buf = Buffer::empty(area);
        ArchiveView::new(&projects, ProjectFilter::All, 0).render(area, &mut buf);

        for (filter, rect) in ArchiveView::filter_areas(area) {
            let label: String = (rect.x..rect.right())
                .map(|x| buf[(x, rect.y)].symbol().to_string())
                .collect();
            assert_eq!(label, format!("[{}]", filter.label()));
        }
    }

    #[test]
    fn test_selected_card_kept_visible() {
        assert_eq!(ArchiveView::scroll_offset(8, 0), 0);
        assert_eq!(ArchiveView::scroll_offset(8, 1), 0);
        assert_eq!(ArchiveView::scroll_offset(8, 5), 4);
        assert_eq!(ArchiveView::scroll_offset(0, 3), 3);
    }

    #[test]
    fn test_card_at() {
        let area = Rect::new(0, 0, 60, 20);
        let projects = filter_projects(ProjectFilter::All);
        let view = ArchiveView::new(&projects, ProjectFilter::All, 0);
        assert_eq!(view.card_at(area, 0), None);
        assert_eq!(view.card_at(area, 5), Some(0));
        assert_eq!(view.card_at(area, 5 + CARD_HEIGHT), Some(1));
    }
}
