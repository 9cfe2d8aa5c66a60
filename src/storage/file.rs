//! JSON file store.

use super::{KeyValueStore, StorageKey, StoreError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Persists values as one JSON object on disk, rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file opens empty. A file that is not a JSON object of
    /// strings is treated as corrupt and also opens empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!(error = %e, "State file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No state file yet");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(keys = values.len(), "State file opened");
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn flush_or_warn(&self) {
        if let Err(e) = self.flush() {
            warn!(error = %e, "Failed to write state file");
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(key.as_ref()).cloned()
    }

    fn set(&mut self, key: StorageKey, value: &str) {
        if self.values.get(key.as_ref()).map(String::as_str) == Some(value) {
            return;
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush_or_warn();
    }

    fn remove(&mut self, key: StorageKey) {
        if self.values.remove(key.as_ref()).is_some() {
            self.flush_or_warn();
        }
    }

    fn clear(&mut self) {
        self.values.clear();
        self.flush_or_warn();
    }
}
