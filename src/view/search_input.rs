//! Search bar widget.

use crate::state::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Press / to search missions";

/// Search bar.
/// Shows a cursor while focused; otherwise the current term or a hint.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    focused: bool,
    colors: bool,
}

impl<'a> SearchBar<'a> {
    /// Search bar over `input`; `focused` shows the cursor.
    pub fn new(input: &'a SearchInput, focused: bool) -> Self {
        Self {
            input,
            focused,
            colors: true,
        }
    }

    /// Enable or disable colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    fn focused_line(&self) -> Line<'static> {
        let query = self.input.query();
        let cursor = self.input.cursor();

        // Split query into before/after cursor for rendering cursor
        let before: String = query.chars().take(cursor).collect();
        let mut after = query.chars().skip(cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".into());
        let after_text: String = after.collect();

        let cursor_style = if self.colors {
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };

        Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, cursor_style),
            Span::raw(after_text),
        ])
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.focused {
            self.focused_line()
        } else if self.input.query().is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.input.query().to_string())
        };

        let title = if self.focused {
            "Search (Esc to return)"
        } else {
            "Search"
        };
        let border_style = if self.focused && self.colors {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
