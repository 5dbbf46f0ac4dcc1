//! Text styles derived from the current settings.
//!
//! Every screen takes its colors from [`Styles`], which maps palette roles to
//! ratatui styles. With colors disabled the palette is monochrome and only
//! modifiers (bold, reversed, dim) remain.

use crate::settings::{Palette, Settings};
use ratatui::style::{Modifier, Style};

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

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Styles =====

/// Styles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    palette: Palette,
}

impl Styles {
    pub fn new(settings: &Settings) -> Self {
        Self {
            palette: settings.palette(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .bg(self.palette.background)
    }

    pub fn alt(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .bg(self.palette.alt_background)
    }

    pub fn header_title(&self) -> Style {
        Style::default()
            .fg(self.palette.header_title_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn country_name(&self) -> Style {
        Style::default().fg(self.palette.country_name_text)
    }

    pub fn capital(&self) -> Style {
        Style::default().fg(self.palette.capital_text)
    }

    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.palette.expanded_section_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlight for the selected row of any list.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette.country_name_text)
            .add_modifier(Modifier::REVERSED)
    }

    pub fn detail_label(&self) -> Style {
        Style::default()
            .fg(self.palette.detail_label_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn detail_value(&self) -> Style {
        Style::default().fg(self.palette.detail_value_text)
    }

    pub fn filter(&self) -> Style {
        Style::default().fg(self.palette.filter_text)
    }

    pub fn filter_option(&self) -> Style {
        Style::default().fg(self.palette.filter_option_text)
    }

    pub fn modal(&self) -> Style {
        Style::default()
            .fg(self.palette.modal_text)
            .bg(self.palette.background)
    }

    /// Primary button ("Show Results").
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.palette.button)
            .add_modifier(Modifier::BOLD)
    }

    pub fn active_dot(&self) -> Style {
        Style::default().fg(self.palette.button)
    }

    pub fn inactive_dot(&self) -> Style {
        Style::default().fg(self.palette.inactive_dot)
    }

    /// Secondary text such as hints and disabled controls.
    pub fn muted(&self) -> Style {
        Style::default()
            .fg(self.palette.capital_text)
            .add_modifier(Modifier::DIM)
    }
}
