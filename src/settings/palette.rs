//! Light and dark color palettes.

use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unsupported theme {other:?} (expected light or dark)")),
        }
    }
}

/// Color roles used by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub alt_background: Color,
    pub text: Color,
    /// Accent for primary buttons ("Show Results").
    pub button: Color,
    pub filter_text: Color,
    pub country_name_text: Color,
    pub capital_text: Color,
    pub detail_label_text: Color,
    pub detail_value_text: Color,
    pub filter_option_text: Color,
    pub modal_text: Color,
    pub header_title_text: Color,
    pub expanded_section_text: Color,
    /// Inactive carousel indicator dot.
    pub inactive_dot: Color,
}

const ACCENT: Color = Color::Rgb(0xFF, 0x6C, 0x00);
const INACTIVE_DOT: Color = Color::Rgb(0x99, 0x99, 0x99);

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        let ink = Color::Rgb(0x1C, 0x19, 0x17);
        let muted = Color::Rgb(0x66, 0x70, 0x85);
        Self {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            alt_background: Color::Rgb(0xF2, 0xF4, 0xF7),
            text: Color::Rgb(0x00, 0x00, 0x00),
            button: ACCENT,
            filter_text: Color::Rgb(0x00, 0x00, 0x00),
            country_name_text: ink,
            capital_text: muted,
            detail_label_text: ink,
            detail_value_text: ink,
            filter_option_text: muted,
            modal_text: ink,
            header_title_text: ink,
            expanded_section_text: ink,
            inactive_dot: INACTIVE_DOT,
        }
    }

    pub fn dark() -> Self {
        let pale = Color::Rgb(0xF2, 0xF4, 0xF7);
        let soft = Color::Rgb(0xD0, 0xD5, 0xDD);
        Self {
            background: Color::Rgb(0x00, 0x0F, 0x24),
            alt_background: Color::Rgb(0x1E, 0x2C, 0x41),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            button: ACCENT,
            filter_text: soft,
            country_name_text: pale,
            capital_text: Color::Rgb(0x98, 0xA2, 0xB3),
            detail_label_text: pale,
            detail_value_text: pale,
            filter_option_text: soft,
            modal_text: pale,
            header_title_text: Color::Rgb(0xEA, 0xEC, 0xF0),
            expanded_section_text: pale,
            inactive_dot: INACTIVE_DOT,
        }
    }

    /// Palette that leaves every role at the terminal default.
    pub fn monochrome() -> Self {
        Self {
            background: Color::Reset,
            alt_background: Color::Reset,
            text: Color::Reset,
            button: Color::Reset,
            filter_text: Color::Reset,
            country_name_text: Color::Reset,
            capital_text: Color::Reset,
            detail_label_text: Color::Reset,
            detail_value_text: Color::Reset,
            filter_option_text: Color::Reset,
            modal_text: Color::Reset,
            header_title_text: Color::Reset,
            expanded_section_text: Color::Reset,
            inactive_dot: Color::Reset,
        }
    }
}
