//! Feed location and transport settings.

use std::fs;
use std::path::Path;

use reqwest::Url;
use serde::Deserialize;

use crate::ConfigError;

/// Where the feed lives unless configured otherwise.
pub const DEFAULT_FEED_URL: &str = "https://programming-elm.com/feed";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub feed_url: String,
    /// Whole-request timeout for the feed fetch. `None` leaves it to the
    /// HTTP client's defaults.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - `feed_url` is an absolute `http` or `https` URL
    /// - `request_timeout_secs`, when present, is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.feed_url).map_err(|err| ConfigError::Invalid {
            message: format!("feed_url '{}' is not a valid URL: {err}", self.feed_url),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                message: format!("feed_url must use http or https, got '{}'", url.scheme()),
            });
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                message: "request_timeout_secs must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
