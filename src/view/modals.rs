//! Filters modal and language picker, drawn over the list screen.

use super::constants::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use super::helpers::{centered_fixed, centered_rect};
use super::styles::Styles;
use crate::model::{gmt_label, Filters};
use crate::settings::{Label, Language, Settings};
use crate::state::{FilterGroup, FilterRow, FiltersModalState, LanguageModalState};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn group_label(group: FilterGroup) -> Label {
    match group {
        FilterGroup::Continent => Label::Continent,
        FilterGroup::Timezone => Label::Timezone,
    }
}

fn selected_in_group(filters: &Filters, group: FilterGroup) -> usize {
    match group {
        FilterGroup::Continent => filters.continents.len(),
        FilterGroup::Timezone => filters.timezones.len(),
    }
}

fn is_checked(filters: &Filters, group: FilterGroup, option: &str) -> bool {
    match group {
        FilterGroup::Continent => filters.continents.contains(option),
        FilterGroup::Timezone => filters.timezones.contains(option),
    }
}

/// Text of one modal row, without selection styling.
fn row_text(
    row: FilterRow,
    modal: &FiltersModalState,
    filters: &Filters,
    settings: &Settings,
) -> String {
    match row {
        FilterRow::Group(group) => {
            let marker = if modal.is_expanded(group) { '▾' } else { '▸' };
            let label = settings.label(group_label(group));
            match selected_in_group(filters, group) {
                0 => format!(" {marker} {label}"),
                n => format!(" {marker} {label} ({n})"),
            }
        }
        FilterRow::Option(group, option) => {
            let check = if is_checked(filters, group, option) { 'x' } else { ' ' };
            let text = match group {
                FilterGroup::Continent => option.to_string(),
                FilterGroup::Timezone => gmt_label(option),
            };
            format!("     [{check}] {text}")
        }
        FilterRow::Reset => format!("   {}", settings.label(Label::Reset)),
        FilterRow::ShowResults => format!("   {}", settings.label(Label::ShowResults)),
    }
}

pub fn render_filters_modal(
    frame: &mut Frame,
    modal: &FiltersModalState,
    filters: &Filters,
    settings: &Settings,
    styles: &Styles,
) {
    let area = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", settings.label(Label::Filters)))
        .borders(Borders::ALL)
        .border_style(styles.muted())
        .style(styles.modal());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = modal.rows();
    let height = usize::from(inner.height);
    let first = (modal.selected_index() + 1).saturating_sub(height);

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(first)
        .take(height)
        .map(|(index, row)| {
            let text = row_text(*row, modal, filters, settings);
            let style = if index == modal.selected_index() {
                styles.selected()
            } else {
                match row {
                    FilterRow::Group(_) => styles.section_header(),
                    FilterRow::Option(..) => styles.filter_option(),
                    FilterRow::Reset => styles.filter(),
                    FilterRow::ShowResults => styles.button(),
                }
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_language_modal(
    frame: &mut Frame,
    modal: &LanguageModalState,
    settings: &Settings,
    styles: &Styles,
) {
    let height = Language::ALL.len() as u16 + 2;
    let area = centered_fixed(32, height, frame.area());
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = Language::ALL
        .iter()
        .enumerate()
        .map(|(index, language)| {
            let radio = if *language == settings.language { "(•)" } else { "( )" };
            let style = if index == modal.selected_index() {
                styles.selected()
            } else {
                styles.modal()
            };
            Line::from(Span::styled(format!(" {radio} {}", language.full_name()), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", settings.label(Label::Languages)))
            .borders(Borders::ALL)
            .border_style(styles.muted())
            .style(styles.modal()),
    );
    frame.render_widget(paragraph, area);
}
