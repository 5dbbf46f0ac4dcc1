//! Appearance and language settings.
//!
//! [`Settings`] is a plain value passed by parameter to every render
//! function. [`SettingsProvider`] is the single owner of the current
//! selection; screens that need to react to changes subscribe to it.

pub mod palette;
pub mod translations;

pub use palette::{Palette, ThemeMode};
pub use translations::{translate, Label, Language};

use std::sync::mpsc::{self, Receiver, Sender};
use tracing::debug;

/// Current theme, language and color capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub mode: ThemeMode,
    pub language: Language,
    /// False under `--no-color` or `NO_COLOR`; every role renders with
    /// terminal defaults.
    pub colors_enabled: bool,
}

impl Settings {
    pub fn new(mode: ThemeMode, language: Language, colors_enabled: bool) -> Self {
        Self {
            mode,
            language,
            colors_enabled,
        }
    }

    pub fn palette(&self) -> Palette {
        if self.colors_enabled {
            Palette::for_mode(self.mode)
        } else {
            Palette::monochrome()
        }
    }

    /// Translated text for `label` in the current language.
    pub fn label(&self, label: Label) -> &'static str {
        translate(label, self.language)
    }
}

/// Owner of the process-wide settings selection.
#[derive(Debug)]
pub struct SettingsProvider {
    current: Settings,
    subscribers: Vec<Sender<Settings>>,
}

impl SettingsProvider {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> Settings {
        self.current
    }

    /// Register for change notifications.
    ///
    /// Every change sends the new settings to each live receiver. Dropped
    /// receivers are pruned on the next change.
    pub fn subscribe(&mut self) -> Receiver<Settings> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn toggle_theme(&mut self) {
        let mode = self.current.mode.toggled();
        self.update(Settings {
            mode,
            ..self.current
        });
    }

    pub fn set_language(&mut self, language: Language) {
        self.update(Settings {
            language,
            ..self.current
        });
    }

    fn update(&mut self, next: Settings) {
        if next == self.current {
            return;
        }
        debug!(mode = %next.mode, language = %next.language, "Settings changed");
        self.current = next;
        self.subscribers.retain(|tx| tx.send(next).is_ok());
    }
}
