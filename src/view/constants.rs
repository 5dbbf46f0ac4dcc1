//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values so screens and
//! the event loop agree on sizes.

use std::time::Duration;

/// Height of the header bar (title, theme, language and filter buttons).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the carousel indicator row under the images.
pub const CAROUSEL_DOTS_HEIGHT: u16 = 1;

/// Rows per detail item (label + value).
pub const DETAIL_ITEM_HEIGHT: u16 = 2;

/// Width percentage for the help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for the help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the filters and language modals.
pub const MODAL_WIDTH_PERCENT: u16 = 50;

/// Height percentage for the filters and language modals.
pub const MODAL_HEIGHT_PERCENT: u16 = 70;

/// List rows moved per vertical wheel notch.
pub const MOUSE_SCROLL_ROWS: isize = 3;

/// Carousel cells moved per horizontal wheel notch.
pub const CAROUSEL_WHEEL_STEP: f64 = 6.0;

/// Event poll timeout while the carousel animates or waits to settle.
pub const ANIMATION_TICK: Duration = Duration::from_millis(50);

/// Event poll timeout when nothing moves on its own.
pub const IDLE_TICK: Duration = Duration::from_millis(500);
