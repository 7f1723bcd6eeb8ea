//! Bottom status line: counts, loading state and key hints.

use crate::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const KEY_HINTS: &str = "/ search  Enter details  r more  ? help  q quit";

/// Status text for the current state.
pub fn status_text(state: &AppState) -> String {
    let pagination = state.pagination();
    let total = state.records().len();

    let counts = if state.filter().is_filtering() {
        format!("{} of {} launches", state.visible_len(), total)
    } else if total == 1 {
        "1 launch".to_string()
    } else {
        format!("{total} launches")
    };

    if pagination.is_loading() {
        format!("{counts} | Loading...")
    } else if !pagination.has_more() {
        format!("{counts} | No more launches to load")
    } else {
        counts
    }
}

/// Text shown in the list area when no card is visible.
pub fn empty_list_text(state: &AppState) -> String {
    if state.pagination().is_loading() && state.records().is_empty() {
        "Loading...".to_string()
    } else if state.filter().is_filtering() {
        format!("No missions match \"{}\"", state.filter().term())
    } else if !state.pagination().has_more() {
        "No launches available".to_string()
    } else {
        "Press r to load launches".to_string()
    }
}

/// Bottom status line with counts and key hints.
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    /// Status bar summarizing `state`.
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::raw(format!(" {} ", status_text(self.state))),
            Span::styled(
                format!(" {KEY_HINTS}"),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
