//! State for the filters modal.
//!
//! The modal shows two expandable groups (continent, timezone) followed by
//! Reset and Show Results. Toggling an option edits the live [`Filters`], so
//! the list behind the modal is already up to date when it closes.

use crate::model::{Filters, CONTINENT_OPTIONS, TIMEZONE_OPTIONS};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    Continent,
    Timezone,
}

impl FilterGroup {
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterGroup::Continent => &CONTINENT_OPTIONS,
            FilterGroup::Timezone => &TIMEZONE_OPTIONS,
        }
    }
}

/// One selectable row of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    /// Group header; activating it expands or collapses the group.
    Group(FilterGroup),
    /// Checkbox for one option of an expanded group.
    Option(FilterGroup, &'static str),
    Reset,
    ShowResults,
}

/// What activating a row did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Only modal layout changed.
    Unchanged,
    /// The filter selection changed; the list must be rebuilt.
    FiltersChanged,
    /// The modal closed.
    Closed,
}

#[derive(Debug, Clone, Default)]
pub struct FiltersModalState {
    visible: bool,
    selected_index: usize,
    continent_expanded: bool,
    timezone_expanded: bool,
}

impl FiltersModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open with the selection on the first row. Expansion is remembered.
    pub fn open(&mut self) {
        self.visible = true;
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_expanded(&self, group: FilterGroup) -> bool {
        match group {
            FilterGroup::Continent => self.continent_expanded,
            FilterGroup::Timezone => self.timezone_expanded,
        }
    }

    /// Rows in display order for the current expansion.
    pub fn rows(&self) -> Vec<FilterRow> {
        let mut rows = Vec::new();
        for group in [FilterGroup::Continent, FilterGroup::Timezone] {
            rows.push(FilterRow::Group(group));
            if self.is_expanded(group) {
                rows.extend(
                    group
                        .options()
                        .iter()
                        .map(|option| FilterRow::Option(group, *option)),
                );
            }
        }
        rows.push(FilterRow::Reset);
        rows.push(FilterRow::ShowResults);
        rows
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_row(&self) -> Option<FilterRow> {
        self.rows().get(self.selected_index).copied()
    }

    /// Move selection up, clamping at 0.
    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down, clamping at the last row.
    pub fn select_next(&mut self) {
        let count = self.rows().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1).min(count - 1);
        }
    }

    /// Activate the selected row against the live filter selection.
    pub fn activate(&mut self, filters: &mut Filters) -> FilterOutcome {
        match self.selected_row() {
            Some(FilterRow::Group(group)) => {
                match group {
                    FilterGroup::Continent => self.continent_expanded = !self.continent_expanded,
                    FilterGroup::Timezone => self.timezone_expanded = !self.timezone_expanded,
                }
                FilterOutcome::Unchanged
            }
            Some(FilterRow::Option(group, option)) => {
                match group {
                    FilterGroup::Continent => filters.toggle_continent(option),
                    FilterGroup::Timezone => filters.toggle_timezone(option),
                }
                debug!(?group, option, active = filters.active_count(), "Filter toggled");
                FilterOutcome::FiltersChanged
            }
            Some(FilterRow::Reset) => {
                if filters.is_empty() {
                    FilterOutcome::Unchanged
                } else {
                    filters.reset();
                    debug!("Filters reset");
                    FilterOutcome::FiltersChanged
                }
            }
            Some(FilterRow::ShowResults) => {
                self.close();
                FilterOutcome::Closed
            }
            None => FilterOutcome::Unchanged,
        }
    }
}
