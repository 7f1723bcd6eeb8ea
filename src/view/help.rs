//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with the shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Percentage of screen width for the help overlay.
const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Percentage of screen height for the help overlay.
const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        Style::default().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let category_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let entry = |keys: &'static str, description: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<14}"), key_style),
            Span::raw(description),
        ])
    };

    vec![
        Line::from(Span::styled("Navigation", category_style)),
        entry("j/↓", "Next launch"),
        entry("k/↑", "Previous launch"),
        entry("PgDn/Ctrl+d", "Page down"),
        entry("PgUp/Ctrl+u", "Page up"),
        entry("g/Home", "First launch"),
        entry("G/End", "Last launch"),
        Line::default(),
        Line::from(Span::styled("Launches", category_style)),
        entry("Enter/Space", "View or hide details"),
        entry("r", "Load more launches"),
        Line::default(),
        Line::from(Span::styled("Search", category_style)),
        entry("/ or Ctrl+f", "Search mission names"),
        entry("Esc/Enter", "Back to the list"),
        entry("Ctrl+l", "Clear search"),
        Line::default(),
        Line::from(Span::styled("Application", category_style)),
        entry("?", "Toggle this help"),
        entry("q/Ctrl+c", "Quit"),
    ]
}
