//! Theme Preference
//!
//! Light/dark theme with explicit init and persist-on-change.
//!
//! On init the stored `"theme"` key wins; without one the system preference
//! decides, defaulting to dark.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::preferences::{PreferenceError, PreferenceStore};

/// Key under which the theme is persisted
pub const THEME_KEY: &str = "theme";

/// Page colour scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background (the page default)
    #[default]
    Dark,
    /// Light background
    Light,
}

impl Theme {
    /// Stored string form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse the stored form; anything else is `None`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other theme
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus the store it persists to
#[derive(Debug)]
pub struct ThemeStore {
    store: PreferenceStore,
    theme: Theme,
}

impl ThemeStore {
    /// Read the preference once
    ///
    /// Does not write: persistence happens only on change.
    #[must_use]
    pub fn init(store: PreferenceStore, system_prefers_light: bool) -> Self {
        let stored = store.get(THEME_KEY).and_then(Theme::parse);
        let theme = match stored {
            Some(theme) => theme,
            None if system_prefers_light => Theme::Light,
            None => Theme::Dark,
        };

        info!(
            %theme,
            from_store = stored.is_some(),
            "Theme initialised"
        );

        Self { store, theme }
    }

    /// Active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch theme and persist
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file cannot be written. The
    /// in-memory theme has already switched.
    pub fn set(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        if self.stage(theme) {
            self.store.save()?;
            debug!(%theme, "Theme persisted");
        }
        Ok(())
    }

    fn stage(&mut self, theme: Theme) -> bool {
        self.theme = theme;
        self.store.stage(THEME_KEY, theme.as_str())
    }

    /// Flip dark/light in memory, returning the new theme
    ///
    /// Nothing is written here so the caller can move the write off its
    /// event loop: persist with `store().clone().save()`.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.stage(next);
        next
    }

    /// Underlying store
    #[must_use]
    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }
}

/// Whether the terminal advertises a light background
///
/// Reads `COLORFGBG` (`"fg;bg"`); background 7 or 15 means light.
#[must_use]
pub fn system_prefers_light() -> bool {
    std::env::var("COLORFGBG")
        .map(|value| colorfgbg_is_light(&value))
        .unwrap_or(false)
}

fn colorfgbg_is_light(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg == 15)
}
