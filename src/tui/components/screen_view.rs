//! # ScreenView Component
//!
//! Renders one resolved [`Screen`]: its text lines, then its links with the
//! cursor on `selected` (no cursor when `None`). Used for the tab content
//! and, inside a cleared popup, for overlays.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::screen::Screen;
use crate::tui::component::Component;

pub struct ScreenView<'a> {
    pub screen: &'a Screen,
    pub selected: Option<usize>,
    pub border_color: Color,
}

impl<'a> ScreenView<'a> {
    pub fn new(screen: &'a Screen, selected: Option<usize>) -> Self {
        Self {
            screen,
            selected,
            border_color: Color::DarkGray,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    fn lines(&self, inner_width: usize) -> Vec<Line<'a>> {
        let screen: &'a Screen = self.screen;
        let mut lines: Vec<Line> = screen
            .lines
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();

        if !screen.links.is_empty() && !lines.is_empty() {
            lines.push(Line::default());
        }

        let last = screen.links.len().saturating_sub(1);
        let selected = self.selected.map(|i| i.min(last));
        for (i, link) in screen.links.iter().enumerate() {
            let label = truncate_to_width(&link.label, inner_width.saturating_sub(2));
            let line = if selected == Some(i) {
                Line::from(vec![
                    Span::styled("› ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        label,
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(label, Style::default().fg(Color::Gray)),
                ])
            };
            lines.push(line);
        }
        lines
    }
}

impl Component for ScreenView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .title(format!(" {} ", self.screen.title))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;
        let paragraph = Paragraph::new(self.lines(inner_width)).block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..."
/// if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
