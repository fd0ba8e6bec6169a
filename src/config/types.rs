use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for a configured read/write timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Persisted application settings stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub service: ServiceSettings,
}

/// Prediction service settings.
///
/// Config keys: `base_url`, `timeout_secs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Base URL of the prediction service; `/predict` is appended per call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Read/write timeout for a single prediction call. Unset or `0` waits
    /// for the service indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl AppSettings {
    pub(crate) fn normalized(mut self) -> Self {
        self.service.timeout_secs = self
            .service
            .timeout_secs
            .filter(|secs| *secs > 0)
            .map(|secs| secs.min(MAX_TIMEOUT_SECS));
        self.service.base_url = self
            .service
            .base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        self
    }
}

/// Errors that may occur while loading configuration or resolving the endpoint.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `TOXCHECK_CONFIG_HOME` nor an OS config directory is available.
    #[error("No config directory available for application files")]
    NoBaseDir,
    /// The application directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse the TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize settings to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
    /// The configured service URL is not usable.
    #[error("Invalid prediction service URL {value:?}: {reason}")]
    InvalidUrl {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
