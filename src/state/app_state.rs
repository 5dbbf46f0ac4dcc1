//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It never
//! performs I/O: fetches are recorded as pending and the shell layer runs
//! them, then hands the results back through `complete_*`.

use crate::model::{Country, CountryCode, FetchError, Filters};
use crate::state::carousel::{build_images, CarouselController, ScrollCommand, ScrollSurface};
use crate::state::{FiltersModalState, LanguageModalState, SearchState};
use crate::view_state::sections::{
    build_sections, country_at, country_count, display_row, section_starts, Section,
};
use tracing::{debug, error, info};

// ===== Routes =====

/// One entry of the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(CountryCode),
}

/// A fetch the shell must perform before the next frame after the loading
/// frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingFetch {
    List,
    Detail(CountryCode),
}

// ===== List screen =====

/// State of the country list screen.
#[derive(Debug, Clone, Default)]
pub struct ListScreenState {
    countries: Vec<Country>,
    search: SearchState,
    filters: Filters,
    sections: Vec<Section>,
    /// Flat position of the selected country across all sections.
    selected: usize,
    /// First visible display row (headers count as rows).
    scroll_offset: usize,
    pub loading: bool,
}

impl ListScreenState {
    pub fn new(search: SearchState) -> Self {
        Self {
            search,
            ..Self::default()
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Replace the country collection and rebuild the sections.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        self.rebuild();
    }

    /// Replace the search state, rebuilding only if the query changed.
    pub fn set_search(&mut self, search: SearchState) {
        let changed = search.query() != self.search.query();
        self.search = search;
        if changed {
            debug!(query = self.search.query(), "Search query changed");
            self.selected = 0;
            self.scroll_offset = 0;
            self.rebuild();
        }
    }

    /// Edit the filters in place, rebuilding when the selection changed.
    pub fn update_filters<R>(&mut self, edit: impl FnOnce(&mut Filters) -> R) -> R {
        let before = self.filters.clone();
        let result = edit(&mut self.filters);
        if self.filters != before {
            self.selected = 0;
            self.scroll_offset = 0;
            self.rebuild();
        }
        result
    }

    /// Select the country at flat position `ordinal` if it exists.
    pub fn select(&mut self, ordinal: usize) {
        if ordinal < self.visible_count() {
            self.selected = ordinal;
        }
    }

    fn rebuild(&mut self) {
        self.sections = build_sections(&self.countries, self.search.query(), &self.filters);
        let count = country_count(&self.sections);
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    pub fn visible_count(&self) -> usize {
        country_count(&self.sections)
    }

    pub fn selected_ordinal(&self) -> usize {
        self.selected
    }

    pub fn selected_country(&self) -> Option<&Country> {
        country_at(&self.sections, self.selected)
    }

    /// Display row of the selection, headers included.
    pub fn selected_row(&self) -> usize {
        display_row(&self.sections, self.selected)
    }

    /// Move the selection by `delta` countries, clamped to the list.
    pub fn move_by(&mut self, delta: isize) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        let target = self.selected.saturating_add_signed(delta);
        self.selected = target.min(count - 1);
    }

    pub fn move_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected = self.visible_count().saturating_sub(1);
    }

    /// Jump to the first country of the next letter section.
    pub fn next_section(&mut self) {
        if let Some(start) = section_starts(&self.sections)
            .into_iter()
            .find(|start| *start > self.selected)
        {
            self.selected = start;
        }
    }

    /// Jump to the start of the current section, or of the previous one when
    /// already at a section start.
    pub fn prev_section(&mut self) {
        if let Some(start) = section_starts(&self.sections)
            .into_iter()
            .rev()
            .find(|start| *start < self.selected)
        {
            self.selected = start;
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Update scroll offset to keep the selected row (and its section header
    /// when possible) visible.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        let row = self.selected_row();
        let top = if section_starts(&self.sections).contains(&self.selected) {
            row.saturating_sub(1)
        } else {
            row
        };
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if row >= self.scroll_offset + visible_rows {
            self.scroll_offset = row + 1 - visible_rows;
        }
    }
}

// ===== Detail screen =====

/// State of one country detail screen. Dropped when the route is popped.
#[derive(Debug, Clone)]
pub struct DetailScreenState {
    code: CountryCode,
    country: Option<Country>,
    pub loading: bool,
    carousel: CarouselController,
    surface: ScrollSurface,
}

impl DetailScreenState {
    pub fn new(code: CountryCode) -> Self {
        Self {
            code,
            country: None,
            loading: false,
            carousel: CarouselController::new(Vec::new()),
            surface: ScrollSurface::new(),
        }
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    pub fn country(&self) -> Option<&Country> {
        self.country.as_ref()
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn surface(&self) -> &ScrollSurface {
        &self.surface
    }

    /// Install the fetched country and a fresh carousel for its images.
    pub fn set_country(&mut self, country: Country, maps_api_key: Option<&str>) {
        let width = self.carousel.page_width();
        self.carousel = CarouselController::new(build_images(&country, maps_api_key));
        self.carousel.on_layout(width);
        self.surface = ScrollSurface::new();
        self.country = Some(country);
    }

    /// Record the rendered carousel width. A changed width re-aligns the
    /// surface to the current page.
    pub fn on_carousel_layout(&mut self, width: u16) {
        let width = f64::from(width);
        if (width - self.carousel.page_width()).abs() > f64::EPSILON {
            self.carousel.on_layout(width);
            self.surface.reset_to(self.carousel.current_offset());
        }
    }

    pub fn carousel_prev(&mut self) {
        if let Some(command) = self.carousel.prev() {
            self.surface.apply(command);
        }
    }

    pub fn carousel_next(&mut self) {
        if let Some(command) = self.carousel.next() {
            self.surface.apply(command);
        }
    }

    /// Horizontal wheel input. Ignored until the carousel has been measured.
    pub fn carousel_scroll(&mut self, delta: f64) {
        if self.carousel.is_measured() && self.carousel.shows_controls() {
            self.surface.scroll_by(delta, self.carousel.max_offset());
        }
    }

    /// Advance the scroll surface. A settled drag updates the page and
    /// snaps the surface to it.
    pub fn tick(&mut self) {
        if let Some(offset) = self.surface.tick() {
            self.carousel.on_scroll_settle(offset);
            debug!(page = self.carousel.current_index(), offset, "Carousel settled");
            self.surface.apply(ScrollCommand {
                offset: self.carousel.current_offset(),
                animated: true,
            });
        }
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Routes**: a stack that always starts with `List`; `Detail(code)`
///   screens are pushed on top and popped by `back`
/// - **Modals**: filters, language picker and help overlay sit above the
///   list screen; at most one is visible
/// - **Fetches**: `pending_list` / `pending_detail` hold at most one request
///   each until the shell runs them
#[derive(Debug, Clone)]
pub struct AppState {
    routes: Vec<Route>,
    pub list: ListScreenState,
    detail: Option<DetailScreenState>,
    pub filters_modal: FiltersModalState,
    pub language_modal: LanguageModalState,
    pub help_visible: bool,
    pending_list: bool,
    pending_detail: Option<CountryCode>,
    maps_api_key: Option<String>,
}

impl AppState {
    pub fn new(search: SearchState, maps_api_key: Option<String>) -> Self {
        Self {
            routes: vec![Route::List],
            list: ListScreenState::new(search),
            detail: None,
            filters_modal: FiltersModalState::new(),
            language_modal: LanguageModalState::new(),
            help_visible: false,
            pending_list: false,
            pending_detail: None,
            maps_api_key,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.routes.last().unwrap_or(&Route::List)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn detail(&self) -> Option<&DetailScreenState> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailScreenState> {
        self.detail.as_mut()
    }

    /// True when any modal or overlay captures input.
    pub fn modal_open(&self) -> bool {
        self.filters_modal.is_visible() || self.language_modal.is_visible() || self.help_visible
    }

    // ===== Navigation =====

    /// Push the detail route for `code` and request its fetch.
    pub fn open_detail(&mut self, code: CountryCode) {
        debug!(code = %code, "Opening detail screen");
        self.routes.push(Route::Detail(code.clone()));
        let mut detail = DetailScreenState::new(code.clone());
        detail.loading = true;
        self.detail = Some(detail);
        self.pending_detail = Some(code);
    }

    /// Open the detail screen for the selected list row, if any.
    pub fn open_selected(&mut self) {
        if let Some(code) = self.list.selected_country().map(|c| c.code.clone()) {
            self.open_detail(code);
        }
    }

    /// Pop the top route. The list route is never popped.
    ///
    /// Returns false when already at the list.
    pub fn back(&mut self) -> bool {
        if self.routes.len() <= 1 {
            return false;
        }
        self.routes.pop();
        self.detail = None;
        self.pending_detail = None;
        debug!(depth = self.routes.len(), "Navigated back");
        true
    }

    // ===== Fetch lifecycle =====

    pub fn request_list_fetch(&mut self) {
        self.list.loading = true;
        self.pending_list = true;
    }

    /// Re-issue the fetch for whatever screen is on top.
    pub fn refresh(&mut self) {
        match self.current_route().clone() {
            Route::List => self.request_list_fetch(),
            Route::Detail(code) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.loading = true;
                }
                self.pending_detail = Some(code);
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending_list || self.pending_detail.is_some()
    }

    /// Hand all pending fetches to the shell, list first.
    pub fn take_pending(&mut self) -> Vec<PendingFetch> {
        let mut pending = Vec::new();
        if std::mem::take(&mut self.pending_list) {
            pending.push(PendingFetch::List);
        }
        if let Some(code) = self.pending_detail.take() {
            pending.push(PendingFetch::Detail(code));
        }
        pending
    }

    /// Apply a list fetch result. Failures keep the previous countries.
    pub fn complete_list_fetch(&mut self, result: Result<Vec<Country>, FetchError>) {
        self.list.loading = false;
        match result {
            Ok(countries) => {
                info!(count = countries.len(), "Country list updated");
                self.list.set_countries(countries);
            }
            Err(err) => error!(error = %err, "Failed to fetch country list"),
        }
    }

    /// Apply a detail fetch result if the detail screen for `code` is still
    /// open. Failures keep whatever the screen showed.
    pub fn complete_detail_fetch(
        &mut self,
        code: &CountryCode,
        result: Result<Country, FetchError>,
    ) {
        let maps_api_key = self.maps_api_key.clone();
        let Some(detail) = self.detail.as_mut().filter(|d| d.code() == code) else {
            debug!(code = %code, "Dropping detail result for closed screen");
            return;
        };
        detail.loading = false;
        match result {
            Ok(country) => detail.set_country(country, maps_api_key.as_deref()),
            Err(err) => error!(code = %code, error = %err, "Failed to fetch country"),
        }
    }

    /// True while time-based state still changes on its own.
    pub fn needs_ticks(&self) -> bool {
        self.detail
            .as_ref()
            .is_some_and(|detail| detail.surface().is_moving())
    }

    /// Advance time-based state (carousel animation and settle detection).
    pub fn tick(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.tick();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
