//! TUI rendering and terminal management (impure shell)

mod carousel;
pub mod constants;
mod detail_screen;
mod help;
mod helpers;
mod layout;
mod list_screen;
mod modals;
mod search_input;
mod styles;

pub use carousel::{visible_page, CarouselView};
pub use detail_screen::{detail_layout, DetailLayout};
pub use help::render_help_overlay;
pub use layout::render_layout;
pub use list_screen::{list_layout, ListLayout};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Styles};

use crate::config::keybindings::KeyBindings;
use crate::model::{CountryCode, KeyAction};
use crate::settings::{Settings, SettingsProvider};
use crate::source::CountrySource;
use crate::state::{search_input_handler, AppState, PendingFetch, Route, SearchState};
use crate::view_state::sections::ordinal_at_row;
use constants::{ANIMATION_TICK, CAROUSEL_WHEEL_STEP, IDLE_TICK, MOUSE_SCROLL_ROWS};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Initial state requested on the command line or in the config.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub settings: Settings,
    /// Pre-filled search query.
    pub search: Option<String>,
    /// Country to open on top of the list at startup.
    pub country: Option<CountryCode>,
    pub maps_api_key: Option<String>,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    source: CountrySource,
    key_bindings: KeyBindings,
    settings_provider: SettingsProvider,
    settings_updates: Receiver<Settings>,
    settings: Settings,
    /// Last rendered list area (for click and page-size handling)
    last_list_area: Option<Rect>,
    /// Last rendered carousel area (for click handling)
    last_carousel_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(source: CountrySource, options: StartupOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, source, options))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Polls quickly while the
    /// carousel moves and slowly otherwise.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        let mut last_tick = Instant::now();

        loop {
            self.process_pending()?;

            let interval = if self.app_state.needs_ticks() {
                ANIMATION_TICK
            } else {
                IDLE_TICK
            };
            let mut dirty = false;

            if event::poll(interval.saturating_sub(last_tick.elapsed()))? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= interval {
                dirty |= self.app_state.needs_ticks();
                self.app_state.tick();
                last_tick = Instant::now();
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the application on an existing terminal.
    ///
    /// Requests the list fetch, and the detail fetch when a startup country
    /// is given. Nothing is fetched until [`TuiApp::process_pending`].
    pub fn with_terminal(
        terminal: Terminal<B>,
        source: CountrySource,
        options: StartupOptions,
    ) -> Self {
        let search = SearchState::with_query(options.search.unwrap_or_default());
        let mut app_state = AppState::new(search, options.maps_api_key);
        app_state.request_list_fetch();
        if let Some(code) = options.country {
            app_state.open_detail(code);
        }

        let mut settings_provider = SettingsProvider::new(options.settings);
        let settings_updates = settings_provider.subscribe();

        Self {
            terminal,
            app_state,
            source,
            key_bindings: KeyBindings::default(),
            settings_provider,
            settings_updates,
            settings: options.settings,
            last_list_area: None,
            last_carousel_area: None,
        }
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run every pending fetch against the source.
    ///
    /// Draws one frame first so the loading indicators are visible while the
    /// blocking requests run, then applies each result.
    pub fn process_pending(&mut self) -> Result<(), TuiError> {
        if !self.app_state.has_pending() {
            return Ok(());
        }
        self.draw()?;

        for fetch in self.app_state.take_pending() {
            match fetch {
                PendingFetch::List => {
                    let result = self.source.fetch_all();
                    self.app_state.complete_list_fetch(result);
                }
                PendingFetch::Detail(code) => {
                    let result = self.source.fetch_by_code(&code);
                    self.app_state.complete_detail_fetch(&code, result);
                }
            }
        }

        self.draw()
    }

    /// Advance carousel animation by one tick.
    pub fn tick(&mut self) {
        self.app_state.tick();
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if self.app_state.language_modal.is_visible() {
            self.handle_language_modal_key(key);
            return false;
        }

        if self.app_state.filters_modal.is_visible() {
            self.handle_filters_modal_key(key);
            return false;
        }

        if *self.app_state.current_route() == Route::List
            && self.app_state.list.search().is_typing()
            && self.handle_search_typing_key(key)
        {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::ToggleTheme => self.settings_provider.toggle_theme(),
            KeyAction::Refresh => self.app_state.refresh(),
            _ => match self.app_state.current_route() {
                Route::List => self.handle_list_action(action),
                Route::Detail(_) => self.handle_detail_action(action),
            },
        }

        self.sync_settings();
        false
    }

    fn handle_language_modal_key(&mut self, key: KeyEvent) {
        let modal = &mut self.app_state.language_modal;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => modal.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => modal.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let language = modal.confirm();
                self.settings_provider.set_language(language);
                self.sync_settings();
            }
            KeyCode::Esc => modal.close(),
            _ => {}
        }
    }

    fn handle_filters_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.app_state.filters_modal.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.app_state.filters_modal.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let modal = &mut self.app_state.filters_modal;
                let outcome = self
                    .app_state
                    .list
                    .update_filters(|filters| modal.activate(filters));
                debug!(?outcome, "Filters modal row activated");
            }
            KeyCode::Esc => self.app_state.filters_modal.close(),
            _ => {}
        }
    }

    /// Keys consumed by the search bar while typing. Returns false to let
    /// the key fall through to the bindings.
    fn handle_search_typing_key(&mut self, key: KeyEvent) -> bool {
        let current = self.app_state.list.search().clone();
        let next = match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                search_input_handler::handle_char_input(current, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(current),
            KeyCode::Left => search_input_handler::handle_cursor_left(current),
            KeyCode::Right => search_input_handler::handle_cursor_right(current),
            KeyCode::Enter | KeyCode::Esc => search_input_handler::leave_search_input(current),
            _ => return false,
        };
        self.app_state.list.set_search(next);
        true
    }

    fn handle_list_action(&mut self, action: KeyAction) {
        let page = self.page_rows();
        let list = &mut self.app_state.list;
        match action {
            KeyAction::MoveUp => list.move_by(-1),
            KeyAction::MoveDown => list.move_by(1),
            KeyAction::PageUp => list.move_by(-page),
            KeyAction::PageDown => list.move_by(page),
            KeyAction::MoveToTop => list.move_to_top(),
            KeyAction::MoveToBottom => list.move_to_bottom(),
            KeyAction::NextSection => list.next_section(),
            KeyAction::PrevSection => list.prev_section(),
            KeyAction::OpenCountry => self.app_state.open_selected(),
            KeyAction::StartSearch => {
                let next = search_input_handler::activate_search_input(list.search().clone());
                list.set_search(next);
            }
            KeyAction::ClearSearch => {
                let next = search_input_handler::clear_search(list.search().clone());
                list.set_search(next);
            }
            KeyAction::OpenFilters => self.app_state.filters_modal.open(),
            KeyAction::OpenLanguages => self.app_state.language_modal.open(self.settings.language),
            _ => {}
        }
    }

    fn handle_detail_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Back => {
                self.app_state.back();
            }
            KeyAction::CarouselPrev => {
                if let Some(detail) = self.app_state.detail_mut() {
                    detail.carousel_prev();
                }
            }
            KeyAction::CarouselNext => {
                if let Some(detail) = self.app_state.detail_mut() {
                    detail.carousel_next();
                }
            }
            _ => {}
        }
    }

    /// Handle a single mouse event
    ///
    /// The vertical wheel moves the list; the horizontal wheel (or
    /// Shift+wheel) drags the carousel. Clicking a country opens it and
    /// clicking the carousel edges pages it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.modal_open() {
            return;
        }

        match self.app_state.current_route() {
            Route::List => self.handle_list_mouse(mouse),
            Route::Detail(_) => self.handle_detail_mouse(mouse),
        }
    }

    fn handle_list_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.app_state.list.move_by(-MOUSE_SCROLL_ROWS),
            MouseEventKind::ScrollDown => self.app_state.list.move_by(MOUSE_SCROLL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(area) = self.last_list_area else {
                    return;
                };
                if !contains(area, mouse.column, mouse.row) {
                    return;
                }
                let row = self.app_state.list.scroll_offset() + usize::from(mouse.row - area.y);
                if let Some(ordinal) = ordinal_at_row(self.app_state.list.sections(), row) {
                    self.app_state.list.select(ordinal);
                    self.app_state.open_selected();
                }
            }
            _ => {}
        }
    }

    fn handle_detail_mouse(&mut self, mouse: MouseEvent) {
        let shifted = mouse.modifiers.contains(KeyModifiers::SHIFT);
        let carousel_area = self.last_carousel_area;
        let Some(detail) = self.app_state.detail_mut() else {
            return;
        };

        match mouse.kind {
            MouseEventKind::ScrollLeft => detail.carousel_scroll(-CAROUSEL_WHEEL_STEP),
            MouseEventKind::ScrollRight => detail.carousel_scroll(CAROUSEL_WHEEL_STEP),
            MouseEventKind::ScrollUp if shifted => detail.carousel_scroll(-CAROUSEL_WHEEL_STEP),
            MouseEventKind::ScrollDown if shifted => detail.carousel_scroll(CAROUSEL_WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(area) = carousel_area else {
                    return;
                };
                if !contains(area, mouse.column, mouse.row) {
                    return;
                }
                if mouse.column < area.x + 3 {
                    detail.carousel_prev();
                } else if mouse.column + 3 >= area.right() {
                    detail.carousel_next();
                }
            }
            _ => {}
        }
    }

    /// Countries moved by one page: the last list height, or 10 before the
    /// first frame.
    fn page_rows(&self) -> isize {
        self.last_list_area
            .map_or(10, |area| area.height.max(1) as isize)
    }

    fn sync_settings(&mut self) {
        while let Ok(settings) = self.settings_updates.try_recv() {
            info!(mode = %settings.mode, language = %settings.language, "Settings applied");
            self.settings = settings;
        }
    }

    /// Render the current frame
    ///
    /// Measures the screen areas first so scrolling and the carousel page
    /// width follow the terminal size.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);

        match self.app_state.current_route() {
            Route::List => {
                let list_area = list_layout(frame_area).list;
                self.app_state.list.adjust_scroll(usize::from(list_area.height));
                self.last_list_area = Some(list_area);
                self.last_carousel_area = None;
            }
            Route::Detail(_) => {
                let carousel_area = detail_layout(frame_area).carousel;
                if let Some(detail) = self.app_state.detail_mut() {
                    detail.on_carousel_layout(carousel_area.width);
                }
                self.last_carousel_area = Some(carousel_area);
            }
        }

        let state = &self.app_state;
        let settings = self.settings;
        self.terminal.draw(|frame| render_layout(frame, state, &settings))?;

        Ok(())
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Run the TUI against `source` until the user quits.
pub fn run_with_source(source: CountrySource, options: StartupOptions) -> Result<(), TuiError> {
    info!(source = %source.describe(), "Starting TUI");
    let mut app = TuiApp::new(source, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
