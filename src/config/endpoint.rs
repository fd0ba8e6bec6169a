use std::time::Duration;

use url::Url;

use super::types::{AppSettings, ConfigError};

/// Environment variable naming the prediction service base URL.
pub const API_URL_ENV: &str = "TOXCHECK_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Base URL baked in at compile time, if `TOXCHECK_API_URL` was set during the build.
pub const BUILD_BASE_URL: Option<&str> = option_env!("TOXCHECK_API_URL");

const PREDICT_PATH: &str = "/predict";

/// Where the active base URL came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointSource {
    Environment,
    ConfigFile,
    BuildTime,
    Default,
}

impl EndpointSource {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::ConfigFile => "config file",
            Self::BuildTime => "build setting",
            Self::Default => "default",
        }
    }
}

/// Resolved prediction service location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base_url: String,
    timeout: Option<Duration>,
    source: EndpointSource,
}

impl ServiceEndpoint {
    /// Build an endpoint from a raw base URL, validating and normalizing it.
    pub fn new(
        raw: &str,
        timeout: Option<Duration>,
        source: EndpointSource,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(raw)?,
            timeout,
            source,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the prediction route.
    pub fn predict_url(&self) -> String {
        format!("{}{PREDICT_PATH}", self.base_url)
    }

    /// Read/write timeout per call; `None` waits for the service indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn source(&self) -> EndpointSource {
        self.source
    }
}

/// Pick the base URL by precedence: environment, config file, build time, default.
pub fn resolve_endpoint(
    settings: &AppSettings,
    env_value: Option<String>,
) -> Result<ServiceEndpoint, ConfigError> {
    resolve_with_build_default(settings, env_value, BUILD_BASE_URL)
}

pub(super) fn resolve_with_build_default(
    settings: &AppSettings,
    env_value: Option<String>,
    build_value: Option<&str>,
) -> Result<ServiceEndpoint, ConfigError> {
    let timeout = settings.service.timeout_secs.map(Duration::from_secs);
    if let Some(value) = env_value.filter(|value| non_blank(value)) {
        return ServiceEndpoint::new(&value, timeout, EndpointSource::Environment);
    }
    if let Some(value) = settings.service.base_url.as_deref().filter(|v| non_blank(v)) {
        return ServiceEndpoint::new(value, timeout, EndpointSource::ConfigFile);
    }
    if let Some(value) = build_value.filter(|v| non_blank(v)) {
        return ServiceEndpoint::new(value, timeout, EndpointSource::BuildTime);
    }
    ServiceEndpoint::new(DEFAULT_BASE_URL, timeout, EndpointSource::Default)
}

fn non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate an http(s) base URL and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| ConfigError::InvalidUrl {
        value: trimmed.to_string(),
        reason: reason.to_string(),
    };
    let parsed = Url::parse(trimmed).map_err(|err| invalid(&err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not supported"));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
