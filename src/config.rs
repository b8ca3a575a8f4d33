use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: i64 = 30_000;

/// How long a store write waits on another writer's lock before failing (5 seconds)
pub const STORE_BUSY_TIMEOUT_MS: u64 = 5_000;

// =============================================================================
// Default file locations
// =============================================================================

/// Default artifact catalog file
pub const DEFAULT_CATALOG_PATH: &str = "artifacts.json";

/// Default notification settings file
pub const DEFAULT_NOTIFICATION_PATH: &str = "notification.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration in {path:?}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Notification settings consumed by the dispatcher
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    /// Sender address passed through to the channel
    #[serde(default)]
    pub sender: String,
    pub recipient: String,
    #[serde(default)]
    pub channel: ChannelConfig,
}

/// Delivery channel for notifications
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChannelConfig {
    /// Print notifications on standard output
    #[default]
    Stdout,
    /// POST notifications as JSON to an HTTP endpoint
    Webhook {
        url: String,
        #[serde(default)]
        token: Option<String>,
    },
}

impl NotificationConfig {
    /// Load notification settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.recipient.trim().is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "recipient must not be empty".to_string(),
            });
        }

        Ok(config)
    }
}

/// Returns the path to the data directory for artifact-watch.
/// Uses $XDG_DATA_HOME/artifact-watch if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/artifact-watch,
/// or ./artifact-watch if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the database file.
pub fn db_path() -> PathBuf {
    data_dir().join("versions.db")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("artifact-watch")
}
