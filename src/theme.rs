//! Light and dark color themes, remembered in the store.

use hangdev_core::PersistenceAdapter;
use tracing::{debug, instrument, warn};

/// Store key holding the theme name.
pub const THEME_KEY: &str = "theme";

/// UI color theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// Reads the stored theme, falling back to dark.
    #[instrument(skip(store))]
    pub fn load<S: PersistenceAdapter + ?Sized>(store: &S) -> Self {
        match store.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(%raw, "Unknown stored theme, using default");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Writes the theme to the store.
    #[instrument(skip(store))]
    pub fn save<S: PersistenceAdapter + ?Sized>(self, store: &mut S) {
        store.set(THEME_KEY, &self.to_string());
        debug!(theme = %self, "Theme saved");
    }

    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label for the toggle control: names the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Toggle Light Mode",
            Self::Light => "Toggle Dark Mode",
        }
    }
}
