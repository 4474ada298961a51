use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::{CODE_BG, MUTED, PRIMARY, PRIMARY_DIM, SECONDARY};

/// Renders project write-ups into styled terminal text
pub struct MarkdownRenderer {
    /// Base style for text
    base_style: Style,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            base_style: Style::default().fg(PRIMARY_DIM),
        }
    }

    /// Render markdown string to ratatui Text
    pub fn render(&self, markdown: &str) -> Text<'static> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markdown, options);

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut current_spans: Vec<Span<'static>> = Vec::new();
        let mut style_stack: Vec<Style> = vec![self.base_style];

        // List state
        let mut list_depth: usize = 0;
        let mut ordered_list_counters: Vec<Option<u64>> = Vec::new();

        // Code block state
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(tag) => match tag {
                    Tag::Heading { level, .. } => {
                        style_stack.push(self.heading_style(level));
                        current_spans.push(Span::styled("## ", Style::default().fg(SECONDARY)));
                    }
                    Tag::BlockQuote(_) => {
                        current_spans.push(Span::styled("│ ", Style::default().fg(MUTED)));
                        style_stack.push(Style::default().fg(MUTED).add_modifier(Modifier::ITALIC));
                    }
                    Tag::CodeBlock(kind) => {
                        let language = match kind {
                            CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                                Some(lang.to_string())
                            }
                            _ => None,
                        };
                        code_block = Some((language, String::new()));
                    }
                    Tag::List(start) => {
                        list_depth += 1;
                        ordered_list_counters.push(start);
                    }
                    Tag::Item => {
                        let indent = "  ".repeat(list_depth.saturating_sub(1));
                        let bullet = match ordered_list_counters.last_mut() {
                            Some(Some(n)) => {
                                let bullet = format!("{indent}{n}. ");
                                *n += 1;
                                bullet
                            }
                            _ => format!("{indent}> "),
                        };
                        current_spans.push(Span::styled(bullet, Style::default().fg(PRIMARY)));
                    }
                    Tag::Emphasis => {
                        let current = *style_stack.last().unwrap_or(&self.base_style);
                        style_stack.push(current.add_modifier(Modifier::ITALIC));
                    }
                    Tag::Strong => {
                        let current = *style_stack.last().unwrap_or(&self.base_style);
                        style_stack.push(current.fg(PRIMARY).add_modifier(Modifier::BOLD));
                    }
                    Tag::Strikethrough => {
                        let current = *style_stack.last().unwrap_or(&self.base_style);
                        style_stack.push(current.add_modifier(Modifier::CROSSED_OUT));
                    }
                    Tag::Link { .. } => {
                        style_stack.push(
                            Style::default()
                                .fg(SECONDARY)
                                .add_modifier(Modifier::UNDERLINED),
                        );
                    }
                    _ => {}
                },
                Event::End(tag_end) => match tag_end {
                    TagEnd::Paragraph => {
                        if !current_spans.is_empty() {
                            lines.push(Line::from(std::mem::take(&mut current_spans)));
                        }
                        lines.push(Line::from(""));
                    }
                    TagEnd::Heading(_) => {
                        style_stack.pop();
                        if !current_spans.is_empty() {
                            lines.push(Line::from(std::mem::take(&mut current_spans)));
                        }
                        lines.push(Line::from(""));
                    }
                    TagEnd::BlockQuote(_) => {
                        style_stack.pop();
                        if !current_spans.is_empty() {
                            lines.push(Line::from(std::mem::take(&mut current_spans)));
                        }
                    }
                    TagEnd::CodeBlock => {
                        if let Some((language, source)) = code_block.take() {
                            lines.extend(code_lines(language.as_deref(), &source));
                            lines.push(Line::from(""));
                        }
                    }
                    TagEnd::List(_) => {
                        list_depth = list_depth.saturating_sub(1);
                        ordered_list_counters.pop();
                        if list_depth == 0 {
                            lines.push(Line::from(""));
                        }
                    }
                    TagEnd::Item => {
                        if !current_spans.is_empty() {
                            lines.push(Line::from(std::mem::take(&mut current_spans)));
                        }
                    }
                    TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                        style_stack.pop();
                    }
                    _ => {}
                },
                Event::Text(text) => {
                    if let Some((_, source)) = code_block.as_mut() {
                        source.push_str(&text);
                    } else {
                        let style = *style_stack.last().unwrap_or(&self.base_style);
                        current_spans.push(Span::styled(text.to_string(), style));
                    }
                }
                Event::Code(code) => {
                    current_spans.push(Span::styled(
                        format!("`{}`", code),
                        Style::default().fg(SECONDARY).bg(CODE_BG),
                    ));
                }
                Event::SoftBreak => current_spans.push(Span::raw(" ")),
                Event::HardBreak => {
                    lines.push(Line::from(std::mem::take(&mut current_spans)));
                }
                Event::Rule => {
                    lines.push(Line::from(Span::styled(
                        "─".repeat(40),
                        Style::default().fg(MUTED),
                    )));
                    lines.push(Line::from(""));
                }
                _ => {}
            }
        }

        // Flush any remaining spans
        if !current_spans.is_empty() {
            lines.push(Line::from(current_spans));
        }

        Text::from(lines)
    }

    fn heading_style(&self, level: HeadingLevel) -> Style {
        match level {
            HeadingLevel::H1 | HeadingLevel::H2 => Style::default()
                .fg(PRIMARY)
                .add_modifier(Modifier::BOLD),
            HeadingLevel::H3 => Style::default()
                .fg(SECONDARY)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(SECONDARY),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A framed source listing with its language label
pub fn code_lines(language: Option<&str>, source: &str) -> Vec<Line<'static>> {
    let frame_style = Style::default().fg(MUTED);
    let code_style = Style::default().fg(PRIMARY).bg(CODE_BG);

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("┌─ ", frame_style),
        Span::styled(
            language.unwrap_or("code").to_string(),
            Style::default().fg(SECONDARY),
        ),
    ]));
    for code_line in source.trim_end_matches('\n').lines() {
        lines.push(Line::from(vec![
            Span::styled("│ ", frame_style),
            Span::styled(code_line.to_string(), code_style),
        ]));
    }
    lines.push(Line::from(Span::styled("└─", frame_style)));
    lines
}
