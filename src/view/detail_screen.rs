//! Country detail screen: header, image carousel, three columns of facts.

use super::carousel::CarouselView;
use super::constants::{
    CAROUSEL_DOTS_HEIGHT, DETAIL_ITEM_HEIGHT, HEADER_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::helpers::truncate_to_width;
use super::styles::Styles;
use crate::settings::{Label, Settings};
use crate::state::{carousel_height, DetailScreenState};
use crate::view_state::detail::ITEMS_PER_COLUMN;
use crate::view_state::{detail_columns, detail_items, DetailItem};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Areas of the detail screen. `carousel` includes the indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    pub header: Rect,
    pub carousel: Rect,
    pub items: Rect,
    pub status: Rect,
}

pub fn detail_layout(area: Rect) -> DetailLayout {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    let body = outer[1];

    let items_height = ITEMS_PER_COLUMN as u16 * DETAIL_ITEM_HEIGHT;
    let wanted = carousel_height(body.width) + CAROUSEL_DOTS_HEIGHT;
    let room = body.height.saturating_sub(items_height).max(body.height / 2);
    let carousel_rows = wanted.min(room);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(carousel_rows), Constraint::Min(0)])
        .split(body);

    DetailLayout {
        header: outer[0],
        carousel: chunks[0],
        items: chunks[1],
        status: outer[2],
    }
}

pub fn render_detail_screen(
    frame: &mut Frame,
    detail: &DetailScreenState,
    settings: &Settings,
    styles: &Styles,
) {
    let layout = detail_layout(frame.area());
    frame.render_widget(Block::default().style(styles.base()), frame.area());

    render_header(frame, layout.header, detail, settings, styles);
    frame.render_widget(
        CarouselView::new(detail.carousel(), detail.surface(), settings, *styles)
            .loading(detail.loading),
        layout.carousel,
    );

    match detail.country() {
        Some(country) => {
            render_items(frame, layout.items, &detail_items(country), settings, styles)
        }
        None => {
            let message = if detail.loading {
                settings.label(Label::Loading)
            } else {
                settings.label(Label::NotAvailable)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(message, styles.muted())).alignment(Alignment::Center),
                layout.items,
            );
        }
    }

    render_status_bar(frame, layout.status, detail, settings, styles);
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailScreenState,
    settings: &Settings,
    styles: &Styles,
) {
    let title = detail
        .country()
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| detail.code().to_string());
    let line = Line::from(vec![
        Span::styled(format!(" ‹ {}", settings.label(Label::Back)), styles.filter()),
        Span::raw("   "),
        Span::styled(title, styles.header_title()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_items(
    frame: &mut Frame,
    area: Rect,
    items: &[DetailItem],
    settings: &Settings,
    styles: &Styles,
) {
    let columns = detail_columns(items);
    if columns.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, columns.len() as u32); columns.len()];
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (column, column_area) in columns.iter().zip(areas.iter()) {
        let width = usize::from(column_area.width.saturating_sub(2));
        let lines: Vec<Line> = column
            .iter()
            .flat_map(|item| {
                [
                    Line::from(Span::styled(
                        format!(" {}", truncate_to_width(settings.label(item.label), width)),
                        styles.detail_label(),
                    )),
                    Line::from(Span::styled(
                        format!(" {}", truncate_to_width(&item.display_value(settings), width)),
                        styles.detail_value(),
                    )),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), *column_area);
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailScreenState,
    settings: &Settings,
    styles: &Styles,
) {
    let left = if detail.loading {
        format!(" {}", settings.label(Label::Loading))
    } else {
        format!(" {}", detail.code())
    };
    frame.render_widget(
        Paragraph::new(Span::styled(left, styles.muted()))
            .block(Block::default().style(styles.alt())),
        area,
    );

    let hints = format!(
        "Esc {}  h/l  ? {} ",
        settings.label(Label::Back),
        settings.label(Label::Help)
    );
    frame.render_widget(
        Paragraph::new(Span::styled(hints, styles.muted())).alignment(Alignment::Right),
        area,
    );
}
