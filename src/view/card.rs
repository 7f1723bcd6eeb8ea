//! Launch card widget.
//!
//! A card is a bordered block: badge and mission name on the first line, and
//! when expanded, the mission patch link, launch date and details below it.

use super::styles::CardStyles;
use crate::model::{years_since, LaunchRecord};
use crate::view_state::wrap_words;
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Borders above and below the card body.
const CARD_CHROME_HEIGHT: u16 = 2;

/// Height of a card showing only its badge line.
pub const COLLAPSED_CARD_HEIGHT: u16 = CARD_CHROME_HEIGHT + 1;

/// Label of the details toggle for the given expansion state.
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "Hide"
    } else {
        "View"
    }
}

/// Human-readable launch date, e.g. `3/24/2006 (18 years ago)`.
pub fn format_launch_date(record: &LaunchRecord, today: NaiveDate) -> String {
    let Some(date) = record.launch_date().map(|d| d.date_naive()) else {
        return match record.launch_date_raw() {
            Some(raw) if !raw.trim().is_empty() => format!("Launch date: {raw}"),
            _ => "Launch date unknown".to_string(),
        };
    };

    let shown = date.format("%-m/%-d/%Y");
    match years_since(date, today) {
        Some(1) => format!("{shown} (1 year ago)"),
        Some(years) => format!("{shown} ({years} years ago)"),
        None => format!("{shown} (scheduled)"),
    }
}

/// Body lines of a card, excluding borders.
pub fn card_lines(
    record: &LaunchRecord,
    expanded: bool,
    today: NaiveDate,
    inner_width: u16,
    styles: &CardStyles,
) -> Vec<Line<'static>> {
    let badge = record.status_badge();
    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {} ", badge.label()), styles.badge(badge)),
        Span::raw(" "),
        Span::raw(record.mission_name().to_string()),
    ])];

    if !expanded {
        return lines;
    }

    let patch = record.mission_patch_url().unwrap_or("none");
    lines.push(Line::from(vec![
        Span::styled("Patch: ", styles.dim()),
        Span::raw(patch.to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Launched: ", styles.dim()),
        Span::raw(format_launch_date(record, today)),
    ]));
    lines.push(Line::default());
    lines.extend(
        wrap_words(record.details_or_placeholder(), usize::from(inner_width))
            .into_iter()
            .map(Line::from),
    );

    lines
}

/// Rendered height of a card at the given outer width.
pub fn card_height(record: &LaunchRecord, expanded: bool, width: u16) -> u16 {
    if !expanded {
        return COLLAPSED_CARD_HEIGHT;
    }
    let inner_width = width.saturating_sub(CARD_CHROME_HEIGHT).max(1);
    let details = wrap_words(record.details_or_placeholder(), usize::from(inner_width)).len();
    // name, patch, date, blank separator
    let body = 4 + details;
    CARD_CHROME_HEIGHT.saturating_add(u16::try_from(body).unwrap_or(u16::MAX))
}

/// A single launch card.
pub struct LaunchCard<'a> {
    record: &'a LaunchRecord,
    expanded: bool,
    selected: bool,
    today: NaiveDate,
    styles: &'a CardStyles,
}

impl<'a> LaunchCard<'a> {
    /// Collapsed, unselected card for `record`.
    pub fn new(record: &'a LaunchRecord, styles: &'a CardStyles, today: NaiveDate) -> Self {
        Self {
            record,
            expanded: false,
            selected: false,
            today,
            styles,
        }
    }

    /// Show the details body.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Highlight the border.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for LaunchCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(CARD_CHROME_HEIGHT);
        let lines = card_lines(
            self.record,
            self.expanded,
            self.today,
            inner_width,
            self.styles,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.border(self.selected))
            .title(Line::from(format!(" {} ", self.record.id())))
            .title(
                Line::from(format!(" {} ", toggle_label(self.expanded)))
                    .alignment(Alignment::Right),
            );

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
