use crate::APP_DIR_NAME;
use crate::countdown::DEFAULT_COUNTDOWN_START;
use crate::error::config::ConfigError;

use models::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;
const MAX_COUNTDOWN_START: u8 = 10;
const MAX_TICK_INTERVAL_MS: u64 = 60_000;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountdownConfig {
    #[serde(default = "default_start_from")]
    pub start_from: u8,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            start_from: default_start_from(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl CountdownConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_store_file_name")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: default_store_file_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LotteryConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub countdown: CountdownConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            countdown: CountdownConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_start_from() -> u8 {
    DEFAULT_COUNTDOWN_START
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_store_file_name() -> String {
    "lottery-store.json".to_string()
}

/// Per-user data directory: `{data_local_dir}/name-lottery`.
///
/// # Errors
///
/// Returns [`ConfigError::DirectoryNotFound`] if the platform has no such directory.
#[track_caller]
pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
    let location = ErrorLocation::from(Location::caller());

    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location,
            reason: "No local data directory for this platform".to_string(),
        })
}

// ============================================
// IMPLEMENTATION
// ============================================

impl LotteryConfig {
    /// Load config from {data_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(LotteryConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    #[track_caller]
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let location = ErrorLocation::from(Location::caller());
        let config_path = data_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location,
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: LotteryConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location,
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {data_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, the temp write or the rename fails.
    #[track_caller]
    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let location = ErrorLocation::from(Location::caller());

        self.validate()?;

        std::fs::create_dir_all(data_dir).map_err(|e| ConfigError::WriteError {
            location,
            path: data_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let temp_path = data_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location,
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location,
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location,
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let location = ErrorLocation::from(Location::caller());

        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location,
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.countdown.start_from == 0 || self.countdown.start_from > MAX_COUNTDOWN_START {
            return Err(ConfigError::ValidationError {
                location,
                reason: format!(
                    "Invalid countdown start: {} (must be 1-{})",
                    self.countdown.start_from, MAX_COUNTDOWN_START
                ),
            });
        }

        if self.countdown.tick_interval_ms == 0
            || self.countdown.tick_interval_ms > MAX_TICK_INTERVAL_MS
        {
            return Err(ConfigError::ValidationError {
                location,
                reason: format!(
                    "Invalid tick interval: {}ms (must be 1-{})",
                    self.countdown.tick_interval_ms, MAX_TICK_INTERVAL_MS
                ),
            });
        }

        if self.storage.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location,
                reason: "storage.file_name cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Path of the persisted key-value store inside `data_dir`.
    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage.file_name)
    }
}
