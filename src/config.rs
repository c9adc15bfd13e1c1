//! Application configuration loaded from `hangdev.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use hangdev_core::{NarratorMap, Rulebook, StakesEntry, StakesLadder, WordBank};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a HangDev install. Every field has a default.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct HangDevConfig {
    /// JSON file holding the persisted game and theme.
    #[serde(default = "default_store_path")]
    store_path: PathBuf,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_path")]
    log_path: PathBuf,

    /// Newline-separated word list replacing the built-in corpus.
    #[serde(default)]
    words_file: Option<PathBuf>,

    /// Custom stakes ladder replacing the built-in languages.
    #[serde(default)]
    stakes: Option<Vec<StakesEntry>>,
}

#[instrument]
fn default_store_path() -> PathBuf {
    PathBuf::from("hangdev_store.json")
}

#[instrument]
fn default_log_path() -> PathBuf {
    PathBuf::from("hangdev.log")
}

impl Default for HangDevConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            log_path: default_log_path(),
            words_file: None,
            stakes: None,
        }
    }
}

impl HangDevConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(store = %config.store_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the store location.
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = store_path;
        self
    }

    /// Builds the game content: word bank, stakes ladder and narrator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the word file cannot be read, yields no
    /// valid words, or the stakes ladder is empty.
    #[instrument(skip(self))]
    pub fn rulebook(&self) -> Result<Rulebook, ConfigError> {
        let bank = match &self.words_file {
            Some(path) => load_word_file(path)?,
            None => WordBank::builtin(),
        };

        let ladder = match &self.stakes {
            Some(entries) => StakesLadder::new(entries.clone())
                .map_err(|e| ConfigError::new(format!("Invalid stakes: {}", e)))?,
            None => StakesLadder::builtin(),
        };

        debug!(
            words = bank.len(),
            attempts = ladder.attempts_allowed(),
            "Rulebook assembled"
        );
        Ok(Rulebook::new(bank, ladder, NarratorMap::builtin()))
    }
}

/// Reads a word list: one word per line, blank lines and `#` comments
/// skipped, entries trimmed and lowercased.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_word_file(path: &Path) -> Result<WordBank, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::new(format!("Failed to read word file: {}", e)))?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase);

    WordBank::new(words).map_err(|e| ConfigError::new(format!("Invalid word file: {}", e)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
