//! Search bar widget.

use crate::state::SearchState;
use super::styles::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered search bar.
///
/// Shows the placeholder while idle with an empty query, the query while
/// idle, and the query with a block cursor while typing.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    placeholder: &'a str,
    styles: Styles,
}

impl<'a> SearchInput<'a> {
    pub fn new(search_state: &'a SearchState, placeholder: &'a str, styles: Styles) -> Self {
        Self {
            search_state,
            placeholder,
            styles,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.search_state {
            SearchState::Typing { query, cursor } => {
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
                let rest: String = after.collect();

                Line::from(vec![
                    Span::styled("/ ", self.styles.muted()),
                    Span::styled(before, self.styles.filter()),
                    Span::styled(
                        cursor_char,
                        self.styles.filter().add_modifier(Modifier::REVERSED),
                    ),
                    Span::styled(rest, self.styles.filter()),
                ])
            }
            SearchState::Idle { query } if query.is_empty() => Line::from(vec![
                Span::styled("/ ", self.styles.muted()),
                Span::styled(self.placeholder.to_string(), self.styles.muted()),
            ]),
            SearchState::Idle { query } => Line::from(vec![
                Span::styled("/ ", self.styles.muted()),
                Span::styled(query.clone(), self.styles.filter()),
            ]),
        };

        let border_style = if self.search_state.is_typing() {
            self.styles.button()
        } else {
            self.styles.muted()
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .style(self.styles.alt()),
            )
            .render(area, buf);
    }
}
