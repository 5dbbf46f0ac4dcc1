//! State for the language picker modal.

use crate::settings::Language;

/// Radio list over [`Language::ALL`].
#[derive(Debug, Clone, Default)]
pub struct LanguageModalState {
    visible: bool,
    selected_index: usize,
}

impl LanguageModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open with the current language pre-selected.
    pub fn open(&mut self, current: Language) {
        self.visible = true;
        self.selected_index = current.index();
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Language {
        Language::ALL
            .get(self.selected_index)
            .copied()
            .unwrap_or_default()
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1).min(Language::ALL.len() - 1);
    }

    /// Close and return the chosen language.
    pub fn confirm(&mut self) -> Language {
        self.close();
        self.selected()
    }
}
