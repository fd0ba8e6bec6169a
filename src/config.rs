//! Settings file handling and prediction service endpoint resolution.
//!
//! Everything the app writes lives in one `.toxcheck` directory under the OS
//! config root (`%APPDATA%` on Windows). `TOXCHECK_CONFIG_HOME` replaces that
//! root for tests and portable installs.

mod endpoint;
mod types;

use std::path::{Path, PathBuf};

pub use endpoint::{
    API_URL_ENV, BUILD_BASE_URL, DEFAULT_BASE_URL, EndpointSource, ServiceEndpoint,
    normalize_base_url, resolve_endpoint,
};
pub use types::{AppSettings, ConfigError, MAX_TIMEOUT_SECS, ServiceSettings};

use directories::BaseDirs;

/// Name of the application directory under the config root.
pub const APP_DIR_NAME: &str = ".toxcheck";

/// Environment variable that replaces the OS config root.
pub const CONFIG_HOME_ENV: &str = "TOXCHECK_CONFIG_HOME";

/// Name of the settings file inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const LOGS_DIR_NAME: &str = "logs";

/// The `.toxcheck` directory, created on demand.
pub fn app_dir() -> Result<PathBuf, ConfigError> {
    let root = std::env::var_os(CONFIG_HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
        .ok_or(ConfigError::NoBaseDir)?;
    ensure_dir(root.join(APP_DIR_NAME))
}

/// Directory holding one log file per launch, created on demand.
pub fn logs_dir() -> Result<PathBuf, ConfigError> {
    ensure_dir(app_dir()?.join(LOGS_DIR_NAME))
}

/// Resolve the settings file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dir()?.join(CONFIG_FILE_NAME))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, ConfigError> {
    match std::fs::create_dir_all(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(ConfigError::CreateDir { path, source }),
    }
}

/// Load settings from disk, writing a default file on first launch.
///
/// A failure to write the default file is logged and otherwise ignored.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_settings_from(&path);
    }
    let settings = AppSettings::default();
    if let Err(err) = save_settings_to_path(&settings, &path) {
        tracing::warn!("Could not write default config: {err}");
    }
    Ok(settings)
}

/// Load settings and resolve the endpoint the app should talk to.
pub fn load_endpoint() -> Result<ServiceEndpoint, ConfigError> {
    let settings = load_or_default()?;
    let endpoint = resolve_endpoint(&settings, std::env::var(API_URL_ENV).ok())?;
    tracing::info!(
        "Prediction service: {} ({})",
        endpoint.base_url(),
        endpoint.source().describe()
    );
    Ok(endpoint)
}

/// Read settings from a TOML file; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Write settings to a TOML file.
pub fn save_settings_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let settings = AppSettings {
            service: ServiceSettings {
                base_url: Some("https://predict.example.org".into()),
                timeout_secs: Some(45),
            },
        };
        save_settings_to_path(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn default_file_leaves_url_and_timeout_unset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        save_settings_to_path(&AppSettings::default(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("base_url"));
        assert!(!text.contains("timeout_secs"));
        assert_eq!(load_settings_from(&path).unwrap(), AppSettings::default());
    }

    #[test]
    fn nested_directories_are_created() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join(APP_DIR_NAME).join(LOGS_DIR_NAME);
        assert_eq!(ensure_dir(nested.clone()).unwrap(), nested);
        assert!(nested.is_dir());
    }

    #[test]
    fn directory_blocked_by_a_file_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let err = ensure_dir(blocker.join("logs")).unwrap_err();
        assert!(matches!(err, ConfigError::CreateDir { .. }), "{err}");
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[service\nbase_url = 3").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }
}
