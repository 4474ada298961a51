use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::theme::{self, ERROR, MUTED, PRIMARY, PRIMARY_DIM, SECONDARY, SELECTED_BG};
use crate::data::{CHANNELS, STATUS};
use crate::ui::contact::{ContactForm, FormField};

/// The contact page: transmission form plus channel and status panels
pub struct ContactView<'a> {
    form: &'a ContactForm,
    /// Whether keyboard focus is on the page (not the nav bar)
    focused: bool,
}

impl<'a> ContactView<'a> {
    pub fn new(form: &'a ContactForm, focused: bool) -> Self {
        Self { form, focused }
    }

    fn columns(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
            .spacing(1)
            .areas(area)
    }

    /// Areas of the form's title, fields, button and error line
    fn form_rows(form_area: Rect) -> [Rect; 6] {
        let inner = Block::default().borders(Borders::ALL).inner(form_area);
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner)
    }

    fn field_area(area: Rect, field: FormField) -> Rect {
        let [form_area, _] = Self::columns(area);
        Self::field_area_in_form(form_area, field)
    }

    /// Field under a mouse position
    pub fn field_at(area: Rect, x: u16, y: u16) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| Self::field_area(area, *field).contains(Position::new(x, y)))
    }

    fn side_rows(side_area: Rect) -> [Rect; 2] {
        Layout::vertical([
            Constraint::Length(CHANNELS.len() as u16 * 2 + 2),
            Constraint::Min(0),
        ])
        .areas(side_area)
    }

    /// Index into [`CHANNELS`] of the entry under a mouse position
    pub fn channel_at(area: Rect, x: u16, y: u16) -> Option<usize> {
        let [_, side_area] = Self::columns(area);
        let [channels_area, _] = Self::side_rows(side_area);
        let inner = Block::default().borders(Borders::ALL).inner(channels_area);
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        let index = ((y - inner.y) / 2) as usize;
        (index < CHANNELS.len()).then_some(index)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let [form_area, side_area] = Self::columns(area);
        self.render_form(form_area, buf);
        Self::render_side(side_area, buf);
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PRIMARY_DIM))
            .title(Span::styled(" [TRANSMISSION_FORM] ", theme::secondary()))
            .render(area, buf);

        let [title, _, _, _, button, error] = Self::form_rows(area);
        Paragraph::new(Line::from(Span::styled("ESTABLISH_CONNECTION", theme::heading())))
            .render(title, buf);

        for field in [FormField::Name, FormField::Email, FormField::Message] {
            self.render_field(field, Self::field_area_in_form(area, field), buf);
        }

        let is_button_focused = self.focused && self.form.focus() == Some(FormField::Submit);
        let (label, mut style) = if self.form.is_transmitting() {
            (
                "[ TRANSMITTING... ]",
                Style::default().fg(SECONDARY).add_modifier(Modifier::SLOW_BLINK),
            )
        } else {
            (
                "[ SEND_TRANSMISSION ]",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )
        };
        if is_button_focused {
            style = style.bg(SELECTED_BG);
        }
        Paragraph::new(Line::from(Span::styled(label, style))).render(button, buf);

        if let Some(err) = self.form.error() {
            Paragraph::new(Line::from(Span::styled(
                format!("[ERROR] {err}"),
                Style::default().fg(ERROR),
            )))
            .render(error, buf);
        }
    }

    fn field_area_in_form(form_area: Rect, field: FormField) -> Rect {
        let [_, name, email, message, button, _] = Self::form_rows(form_area);
        match field {
            FormField::Name => name,
            FormField::Email => email,
            FormField::Message => message,
            FormField::Submit => button,
        }
    }

    fn render_field(&self, field: FormField, area: Rect, buf: &mut Buffer) {
        let Some(input) = self.form.input(field) else {
            return;
        };
        let is_focused = self.focused && self.form.focus() == Some(field);
        let border = if is_focused { SECONDARY } else { PRIMARY_DIM };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!("> {}:", field.label()),
                Style::default().fg(PRIMARY),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        input.render(
            inner,
            buf,
            Style::default().fg(PRIMARY),
            (field.placeholder(), Style::default().fg(MUTED)),
            is_focused && !self.form.is_transmitting(),
        );
    }

    fn render_side(area: Rect, buf: &mut Buffer) {
        let [channels_area, status_area] = Self::side_rows(area);

        let mut channel_lines = Vec::new();
        for channel in CHANNELS {
            channel_lines.push(Line::from(vec![
                Span::styled(channel.label, theme::secondary()),
                Span::styled(format!(" [{}]", channel.key), Style::default().fg(MUTED)),
            ]));
            channel_lines.push(Line::from(Span::styled(
                format!("  {}", channel.value),
                Style::default().fg(PRIMARY_DIM),
            )));
        }
        Paragraph::new(channel_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(PRIMARY_DIM))
                    .title(Span::styled(" [DIRECT_CHANNELS] ", theme::secondary())),
            )
            .render(channels_area, buf);

        let status_lines: Vec<Line> = STATUS
            .iter()
            .map(|(key, value)| {
                Line::from(vec![
                    Span::styled(format!("{key}: "), theme::muted()),
                    Span::styled(*value, Style::default().fg(PRIMARY)),
                ])
            })
            .collect();
        Paragraph::new(status_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(PRIMARY_DIM))
                    .title(Span::styled(" [STATUS] ", theme::secondary())),
            )
            .render(status_area, buf);
    }
}
