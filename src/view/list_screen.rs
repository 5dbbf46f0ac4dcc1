//! Country list screen: header, search bar, sectioned list, status bar.

use super::constants::{HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::helpers::truncate_to_width;
use super::search_input::SearchInput;
use super::styles::Styles;
use crate::model::Country;
use crate::settings::{Label, Settings};
use crate::state::ListScreenState;
use crate::view_state::detail::capitals_text;
use crate::view_state::Section;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Areas of the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub header: Rect,
    pub search: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Split the frame into the list screen areas.
pub fn list_layout(area: Rect) -> ListLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ListLayout {
        header: chunks[0],
        search: chunks[1],
        list: chunks[2],
        status: chunks[3],
    }
}

/// One display row of the list.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ListRow<'a> {
    Header(&'a str),
    Country { ordinal: usize, country: &'a Country },
}

/// Display rows `[start, start + count)`, headers included.
fn visible_rows(sections: &[Section], start: usize, count: usize) -> Vec<ListRow<'_>> {
    let mut ordinal = 0;
    sections
        .iter()
        .flat_map(|section| {
            let first = ordinal;
            ordinal += section.data.len();
            std::iter::once(ListRow::Header(section.title.as_str())).chain(
                section
                    .data
                    .iter()
                    .enumerate()
                    .map(move |(i, country)| ListRow::Country {
                        ordinal: first + i,
                        country,
                    }),
            )
        })
        .skip(start)
        .take(count)
        .collect()
}

pub fn render_list_screen(
    frame: &mut Frame,
    list: &ListScreenState,
    settings: &Settings,
    styles: &Styles,
) {
    let layout = list_layout(frame.area());
    frame.render_widget(Block::default().style(styles.base()), frame.area());

    render_header(frame, layout.header, list, settings, styles);
    frame.render_widget(
        SearchInput::new(list.search(), settings.label(Label::SearchPlaceholder), *styles),
        layout.search,
    );
    render_rows(frame, layout.list, list, settings, styles);
    render_status_bar(frame, layout.status, list, settings, styles);
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    list: &ListScreenState,
    settings: &Settings,
    styles: &Styles,
) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", settings.label(Label::Explore)),
        styles.header_title(),
    )));
    frame.render_widget(title, area);

    let filters = match list.filters().active_count() {
        0 => settings.label(Label::Filters).to_string(),
        n => format!("{} ({n})", settings.label(Label::Filters)),
    };
    let buttons = Line::from(vec![
        Span::styled(format!("[{}]", settings.mode), styles.filter()),
        Span::raw(" "),
        Span::styled(format!("[{}]", settings.language.short_name()), styles.filter()),
        Span::raw(" "),
        Span::styled(format!("[{filters}]"), styles.filter()),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Right), area);
}

fn render_rows(
    frame: &mut Frame,
    area: Rect,
    list: &ListScreenState,
    settings: &Settings,
    styles: &Styles,
) {
    if area.height == 0 {
        return;
    }

    if list.visible_count() == 0 {
        let message = if list.loading {
            settings.label(Label::Loading)
        } else {
            settings.label(Label::NoResults)
        };
        let y = area.y + area.height / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(message, styles.muted())).alignment(Alignment::Center),
            Rect::new(area.x, y, area.width, 1),
        );
        return;
    }

    let width = usize::from(area.width);
    let rows = visible_rows(list.sections(), list.scroll_offset(), usize::from(area.height));
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| match row {
            ListRow::Header(title) => {
                Line::from(Span::styled(format!(" {title}"), styles.section_header()))
            }
            ListRow::Country { ordinal, country } => {
                let selected = ordinal == list.selected_ordinal();
                country_line(country, selected, width, settings, styles)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn country_line(
    country: &Country,
    selected: bool,
    width: usize,
    settings: &Settings,
    styles: &Styles,
) -> Line<'static> {
    let name = truncate_to_width(country.name.as_str(), width.saturating_sub(4));
    let used = name.width() + 3;
    let capitals = capitals_text(country)
        .unwrap_or_else(|| settings.label(Label::NotAvailable).to_string());
    let capitals = truncate_to_width(&capitals, width.saturating_sub(used + 2));

    let mut spans = vec![
        Span::raw("   "),
        Span::styled(name, styles.country_name()),
    ];
    if !capitals.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(capitals, styles.capital()));
    }

    let line = Line::from(spans);
    if selected {
        let padding = width.saturating_sub(line.width());
        let mut line = line;
        line.spans.push(Span::raw(" ".repeat(padding)));
        line.style(styles.selected())
    } else {
        line
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    list: &ListScreenState,
    settings: &Settings,
    styles: &Styles,
) {
    let left = if list.loading {
        format!(" {}", settings.label(Label::Loading))
    } else {
        format!(" {}/{}", list.visible_count(), list.countries().len())
    };
    frame.render_widget(
        Paragraph::new(Span::styled(left, styles.muted()))
            .block(Block::default().style(styles.alt())),
        area,
    );

    let hints = format!("/ f L t  ? {} ", settings.label(Label::Help));
    frame.render_widget(
        Paragraph::new(Span::styled(hints, styles.muted())).alignment(Alignment::Right),
        area,
    );
}
