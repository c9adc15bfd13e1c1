//! JSON file implementation of the game's key-value store.

use derive_more::{Display, Error};
use hangdev_core::PersistenceAdapter;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// String values by key, kept in memory and mirrored to a JSON object file.
///
/// The file is read once when opened and rewritten on every `set`. A missing
/// or unreadable file opens as an empty store; the game then starts fresh.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match Self::read(&path) {
            Ok(values) => {
                info!(keys = values.len(), "Store opened");
                values
            }
            Err(e) => {
                warn!(error = %e, "Store unreadable, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    #[instrument(skip(path))]
    fn read(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        if !path.exists() {
            debug!("Store file does not exist yet");
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::new(format!("Failed to read '{}': {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| StoreError::new(format!("Failed to parse '{}': {}", path.display(), e)))
    }

    /// Writes every value to disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StoreError::new(format!("Failed to encode store: {}", e)))?;
        std::fs::write(&self.path, content).map_err(|e| {
            StoreError::new(format!("Failed to write '{}': {}", self.path.display(), e))
        })?;
        debug!(keys = self.values.len(), "Store flushed");
        Ok(())
    }
}

impl PersistenceAdapter for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            warn!(error = %e, key, "Store write failed");
        }
    }
}
