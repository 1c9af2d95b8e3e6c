//! Theme preference with persistence.
//!
//! The current mode is reflected into the root element's `theme` data
//! attribute; the preference survives restarts through the settings layer.
//! Persistence failures are logged and swallowed: a broken settings store
//! must not break the page.

use pagedom::Element;
use serde::{Deserialize, Serialize};

use crate::settings::SettingsProvider;

/// Data attribute on the root element carrying the active theme.
pub const DATA_THEME: &str = "theme";

const SETTINGS_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

pub struct ThemeController {
    settings: SettingsProvider,
}

impl ThemeController {
    pub fn new(settings: SettingsProvider) -> Self {
        Self { settings }
    }

    /// Apply the theme at page setup: the saved preference wins, then the
    /// system preference, then dark.
    pub fn init(&self, root: &mut Element, system: Option<ThemeMode>) -> ThemeMode {
        let saved = match self.settings.get::<ThemeMode>(SETTINGS_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("failed to read theme preference: {e}");
                None
            }
        };

        let mode = saved.or(system).unwrap_or(ThemeMode::Dark);
        root.set_data(DATA_THEME, mode.as_str());
        mode
    }

    /// Flip the current theme, reflect it on the root, and persist it.
    /// A light theme becomes dark; anything else (dark or unset) becomes light.
    pub fn toggle(&self, root: &mut Element) -> ThemeMode {
        let current = root
            .get_data(DATA_THEME)
            .and_then(|value| ThemeMode::parse(value));
        let next = match current {
            Some(ThemeMode::Light) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        };

        root.set_data(DATA_THEME, next.as_str());
        if let Err(e) = self.settings.set(SETTINGS_KEY, &next) {
            log::warn!("failed to persist theme preference: {e}");
        }
        next
    }
}
