//! # Theme Preference
//!
//! Light or dark. Resolution order on startup:
//! stored value → terminal background hint → light.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::storage::Store;

pub const THEME_KEY: &str = "theme";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// A valid stored value wins, then the OS hint, then light.
    pub fn resolve(stored: Option<&str>, os_prefers_dark: bool) -> Theme {
        if let Some(theme) = stored.and_then(|s| s.trim().parse().ok()) {
            return theme;
        }
        if os_prefers_dark { Theme::Dark } else { Theme::Light }
    }

    /// Reads the stored preference, falling back to the terminal hint.
    pub fn load(store: &Store) -> Theme {
        let stored = store.get(THEME_KEY).unwrap_or_else(|e| {
            warn!("Failed to read theme preference: {}", e);
            None
        });
        let theme = Theme::resolve(stored.as_deref(), os_prefers_dark());
        debug!("Resolved theme: {} (stored={:?})", theme, stored);
        theme
    }

    /// Persists the preference. Failures are logged only.
    pub fn persist(self, store: &Store) {
        if let Err(e) = store.set(THEME_KEY, self.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Whether the terminal advertises a dark background via `COLORFGBG`.
pub fn os_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .map(|v| colorfgbg_is_dark(&v))
        .unwrap_or(false)
}

/// `COLORFGBG` is `"fg;bg"` (sometimes `"fg;default;bg"`). ANSI background
/// colours 0-6 and 8 are dark.
fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_stored_value_wins_over_os_hint() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_os_hint_used_without_stored_value() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_invalid_stored_value_ignored() {
        assert_eq!(Theme::resolve(Some("solarized"), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
    }

    #[test]
    fn test_colorfgbg_parsing() {
        assert!(colorfgbg_is_dark("15;0"));
        assert!(colorfgbg_is_dark("15;default;8"));
        assert!(!colorfgbg_is_dark("0;15"));
        assert!(!colorfgbg_is_dark("0;7"));
        assert!(!colorfgbg_is_dark("garbage"));
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        Theme::Dark.persist(&store);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }
}
