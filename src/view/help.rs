//! Help overlay listing keyboard shortcuts.
//!
//! Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (category, [(keys, description)]).
const HELP_GROUPS: &[(&str, &[(&str, &str)])] = &[
    (
        "Country list",
        &[
            ("j/k ↓/↑", "Move selection"),
            ("Ctrl+d/u", "Page down / up"),
            ("g/G", "First / last country"),
            ("{ }", "Previous / next letter"),
            ("Enter", "Open country"),
            ("f", "Filters"),
            ("L", "Language"),
        ],
    ),
    (
        "Search",
        &[
            ("/ Ctrl+f", "Type a search query"),
            ("Enter/Esc", "Stop typing"),
            ("Ctrl+l", "Clear search"),
        ],
    ),
    (
        "Country detail",
        &[
            ("h/l ←/→", "Previous / next image"),
            ("Shift+wheel", "Drag the carousel"),
            ("Esc/Backspace", "Back to the list"),
        ],
    ),
    (
        "Application",
        &[
            ("t", "Toggle light / dark"),
            ("r", "Reload data"),
            ("?", "Toggle this help"),
            ("q Ctrl+c", "Quit"),
        ],
    ),
];

const KEY_COLUMN_WIDTH: usize = 16;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &Styles, title: &str) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(styles.button())
                .style(styles.modal()),
        )
        .wrap(Wrap { trim: false })
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
        styles.muted(),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn build_help_content(styles: &Styles) -> Vec<Line<'static>> {
    let key_style: Style = styles.button();
    let desc_style: Style = styles.modal();

    let mut lines = Vec::new();
    for (index, (category, shortcuts)) in HELP_GROUPS.iter().enumerate() {
        if index > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*category, styles.section_header())));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN_WIDTH$}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}
