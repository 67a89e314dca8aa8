// Light/dark theme preference, persisted in localStorage.
use crate::util::{body, local_storage};

pub const STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values read as the light theme.
    pub fn parse(raw: &str) -> Theme {
        match raw {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Toggle button label: the sun switches back to light, the moon to dark.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌑",
        }
    }
}

pub fn load() -> Theme {
    local_storage()
        .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten())
        .map(|v| Theme::parse(&v))
        .unwrap_or_default()
}

pub fn persist(theme: Theme) {
    if let Some(store) = local_storage() {
        if store.set_item(STORAGE_KEY, theme.as_str()).is_err() {
            log::warn!("could not persist theme preference");
        }
    }
}

/// Adds or removes the dark class on `<body>`.
pub fn apply(theme: Theme) {
    if let Some(body) = body() {
        if body
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
            .is_err()
        {
            log::warn!("failed to apply {} theme to body", theme.as_str());
        }
    }
}
