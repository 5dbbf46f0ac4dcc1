//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // List movement
    /// Move selection up one row. Default: k/↑
    MoveUp,
    /// Move selection down one row. Default: j/↓
    MoveDown,
    /// Move up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Move down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to first country. Default: g/Home
    MoveToTop,
    /// Jump to last country. Default: G/End
    MoveToBottom,
    /// Jump to first country of the next letter section. Default: }
    NextSection,
    /// Jump to first country of the previous letter section. Default: {
    PrevSection,

    // Navigation
    /// Open the detail screen of the selected country. Default: Enter
    OpenCountry,
    /// Return to the previous screen. Default: Esc/Backspace
    Back,

    // Search and filters
    /// Focus the search bar. Default: / or Ctrl+f
    StartSearch,
    /// Clear the search query. Default: Ctrl+l
    ClearSearch,
    /// Open the filters modal. Default: f
    OpenFilters,
    /// Open the language picker. Default: L
    OpenLanguages,

    // Carousel
    /// Show the previous carousel image. Default: h/←/[
    CarouselPrev,
    /// Show the next carousel image. Default: l/→/]
    CarouselNext,

    // Application
    /// Switch between light and dark palettes. Default: t
    ToggleTheme,
    /// Re-issue the fetch for the current screen. Default: r
    Refresh,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
