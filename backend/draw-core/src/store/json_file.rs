use super::KeyValueStore;
use crate::error::store::StoreError;

use models::ErrorLocation;

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

/// Store backed by a single JSON object file.
///
/// The file is read once when opened. Every `set` rewrites the whole file
/// through a temp file + rename, so a crash mid-write leaves the previous
/// contents intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store, treating an unreadable or corrupted file as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        match Self::try_open(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!("Failed to load store, starting empty: {e}");
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    /// Open the store, failing if the file exists but cannot be used.
    ///
    /// A missing file is not an error; it yields an empty store.
    #[track_caller]
    pub fn try_open(path: &Path) -> Result<Self, StoreError> {
        let location = ErrorLocation::from(Location::caller());

        if !path.exists() {
            info!("Store file not found at {}, starting empty", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                entries: BTreeMap::new(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|e| StoreError::Read {
            location,
            path: path.to_path_buf(),
            source: e,
        })?;

        let entries: BTreeMap<String, String> =
            serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
                location,
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!("Loaded {} entries from {}", entries.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[track_caller]
    fn flush(&self) -> Result<(), StoreError> {
        let location = ErrorLocation::from(Location::caller());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                location,
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(&self.entries).map_err(|e| StoreError::Serialize {
                location,
                reason: e.to_string(),
            })?;

        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        std::fs::write(&temp_path, json).map_err(|e| StoreError::Write {
            location,
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Write {
            location,
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
