//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod carousel;
pub mod filters_modal;
pub mod language_modal;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, DetailScreenState, ListScreenState, PendingFetch, Route};
pub use carousel::{
    build_images, carousel_height, display_mode, CarouselController, CarouselImage, DisplayMode,
    ImageRole, ScrollCommand, ScrollSurface, CONTAIN_PADDING,
};
pub use filters_modal::{FilterGroup, FilterOutcome, FilterRow, FiltersModalState};
pub use language_modal::LanguageModalState;
pub use search::SearchState;
