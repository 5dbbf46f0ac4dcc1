//! Top-level frame rendering.
//!
//! Pure with respect to state: draws the screen on top of the route stack,
//! then whichever overlay is open.

use super::detail_screen::render_detail_screen;
use super::help::render_help_overlay;
use super::list_screen::render_list_screen;
use super::modals::{render_filters_modal, render_language_modal};
use super::styles::Styles;
use crate::settings::{Label, Settings};
use crate::state::{AppState, Route};
use ratatui::Frame;

/// Render the whole frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, settings: &Settings) {
    let styles = Styles::new(settings);

    match (state.current_route(), state.detail()) {
        (Route::Detail(_), Some(detail)) => render_detail_screen(frame, detail, settings, &styles),
        _ => render_list_screen(frame, &state.list, settings, &styles),
    }

    if state.filters_modal.is_visible() {
        render_filters_modal(
            frame,
            &state.filters_modal,
            state.list.filters(),
            settings,
            &styles,
        );
    }
    if state.language_modal.is_visible() {
        render_language_modal(frame, &state.language_modal, settings, &styles);
    }
    if state.help_visible {
        render_help_overlay(frame, &styles, settings.label(Label::Help));
    }
}
