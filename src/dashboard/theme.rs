//! Theme preference
//!
//! Light/dark flag persisted under the `theme` key and restored on load.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::storage::{KeyValueStore, THEME_KEY};

/// CSS class applied to `<body>` in dark mode
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Stored value: `"dark"` or `"light"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the exact string `"dark"` selects dark mode
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::from_dark(value == Some("dark"))
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Toggle button text: offers the other mode
    pub fn button_label(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light Mode",
            Theme::Light => "🌙 Dark Mode",
        }
    }

    /// Class flag for `<body>`, if any
    pub fn body_class(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_CLASS)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted theme preference
#[derive(Debug)]
pub struct ThemeToggle<S: KeyValueStore> {
    theme: Theme,
    storage: S,
}

impl<S: KeyValueStore> ThemeToggle<S> {
    /// Restore the saved preference and write it back, like a page applying
    /// the stored theme on load. Unreadable storage falls back to light.
    pub fn load(storage: S) -> Self {
        let stored = match storage.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                None
            }
        };

        let mut toggle = Self {
            theme: Theme::from_stored(stored.as_deref()),
            storage,
        };
        toggle.set_theme(toggle.theme.is_dark());
        toggle
    }

    /// Apply and persist. Setting the current theme again rewrites the same
    /// value and changes nothing else.
    pub fn set_theme(&mut self, is_dark: bool) -> Theme {
        let theme = Theme::from_dark(is_dark);
        if theme != self.theme {
            info!(%theme, "theme changed");
        }
        self.theme = theme;
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
        theme
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) -> Theme {
        let next = !self.theme.is_dark();
        self.set_theme(next)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn button_label(&self) -> &'static str {
        self.theme.button_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_dark_survives_reload() {
        let storage = MemoryStore::new();
        let mut toggle = ThemeToggle::load(storage.clone());
        assert_eq!(toggle.theme(), Theme::Light);

        toggle.set_theme(true);

        let reloaded = ThemeToggle::load(storage);
        assert!(reloaded.is_dark());
        assert_eq!(reloaded.button_label(), "☀️ Light Mode");
    }

    #[test]
    fn test_load_writes_default_back() {
        let storage = MemoryStore::new();
        ThemeToggle::load(storage.clone());
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_unrecognized_value_is_light() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "Dark").unwrap();
        assert_eq!(ThemeToggle::load(storage).theme(), Theme::Light);
    }

    #[test]
    fn test_set_theme_is_idempotent() {
        let storage = MemoryStore::new();
        let mut toggle = ThemeToggle::load(storage.clone());

        toggle.set_theme(true);
        toggle.set_theme(true);
        assert!(toggle.is_dark());
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_toggle_flips() {
        let mut toggle = ThemeToggle::load(MemoryStore::new());
        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(toggle.toggle(), Theme::Light);
        assert_eq!(toggle.button_label(), "🌙 Dark Mode");
    }

    #[test]
    fn test_body_class() {
        assert_eq!(Theme::Dark.body_class(), Some("dark"));
        assert_eq!(Theme::Light.body_class(), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
