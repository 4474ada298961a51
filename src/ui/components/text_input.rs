//! Editable text field state with cursor management

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Text field state. The cursor is a char index, so multi-byte input is safe.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    input: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        let chars: Vec<char> = self.input.chars().collect();
        let end = self.cursor;
        let mut start = end;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        if start == end {
            return;
        }
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        self.input.drain(from..to);
        self.cursor = start;
    }

    /// Row and display column of the cursor, counting explicit newlines
    pub fn cursor_offset(&self) -> (u16, u16) {
        let before = &self.input[..self.byte_index(self.cursor)];
        let row = before.matches('\n').count();
        let col = before.rsplit('\n').next().map(|s| s.width()).unwrap_or(0);
        (row as u16, col as u16)
    }

    /// Render the value, or `placeholder` when empty. The cursor cell is
    /// highlighted only when `focused`.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: (&str, Style),
        focused: bool,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text = if self.input.is_empty() {
            Text::from(Line::styled(placeholder.0.to_string(), placeholder.1))
        } else {
            Text::styled(self.input.clone(), style)
        };

        // Keep the cursor row in view for multi-line fields
        let (row, col) = self.cursor_offset();
        let scroll = row.saturating_sub(area.height.saturating_sub(1));
        Paragraph::new(text).scroll((scroll, 0)).render(area, buf);

        if focused {
            let x = area.x + col.min(area.width.saturating_sub(1));
            let y = area.y + (row - scroll).min(area.height.saturating_sub(1));
            buf[(x, y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}

impl std::fmt::Display for TextInputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}
