//! Light/dark preference with durable persistence.
//!
//! Resolution order on startup is stored value, then the environment's
//! color-scheme preference, then light. Only the final light fallback is
//! written back; toggles always write.

pub const THEME_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Durable key-value storage that survives reloads.
///
/// Writes are best-effort: a store that cannot persist (private browsing,
/// quota) silently keeps the in-memory theme authoritative.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub fn read_stored_theme(store: &impl PreferenceStore) -> Option<Theme> {
    let value = store.get(THEME_KEY)?;
    Theme::parse(value.trim())
}

pub fn persist_theme(store: &impl PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

pub fn resolve_theme(store: &impl PreferenceStore, system_prefers_dark: bool) -> Theme {
    if let Some(stored) = read_stored_theme(store) {
        return stored;
    }

    if system_prefers_dark {
        return Theme::Dark;
    }

    persist_theme(store, Theme::Light);
    Theme::Light
}

/// Flips `current`, persists the result and returns it.
pub fn toggle_theme(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    persist_theme(store, next);
    next
}
