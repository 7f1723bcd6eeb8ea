//! Card styling.
//!
//! Distinct colors for the status badges and the highlighted card.

use crate::model::StatusBadge;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Styles used by the card list.
#[derive(Debug, Clone, Copy)]
pub struct CardStyles {
    upcoming_badge: Style,
    failed_badge: Style,
    selected_border: Style,
    normal_border: Style,
    dim: Style,
}

impl CardStyles {
    /// Create styles honoring the color configuration.
    ///
    /// Without colors the highlighted card is still marked with bold borders.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                upcoming_badge: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                failed_badge: Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                selected_border: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                normal_border: Style::default().fg(Color::DarkGray),
                dim: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                upcoming_badge: Style::default().add_modifier(Modifier::BOLD),
                failed_badge: Style::default().add_modifier(Modifier::BOLD),
                selected_border: Style::default().add_modifier(Modifier::BOLD),
                normal_border: Style::default(),
                dim: Style::default(),
            }
        }
    }

    /// Style of a status badge.
    pub fn badge(&self, badge: StatusBadge) -> Style {
        match badge {
            StatusBadge::Upcoming => self.upcoming_badge,
            StatusBadge::Failed => self.failed_badge,
        }
    }

    /// Border style; selected cards stand out.
    pub fn border(&self, selected: bool) -> Style {
        if selected {
            self.selected_border
        } else {
            self.normal_border
        }
    }

    /// Style for field labels.
    pub fn dim(&self) -> Style {
        self.dim
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
