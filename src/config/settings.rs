//! Client connection settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ConfigError, Result};

/// Default delay between polling attempts in milliseconds.
const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Connection settings for a Jenkins server.
///
/// ```toml
/// url = "https://ci.example.com"
/// username = "builder"
/// password = "api-token"
/// timeout_secs = 30
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// The Jenkins server URL.
    pub url: String,

    /// Username for Basic Auth. Must be paired with `password`.
    #[serde(default)]
    pub username: Option<String>,

    /// Password or API token for Basic Auth.
    #[serde(default)]
    pub password: Option<String>,

    /// Per-request transport timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Delay between attempts while waiting for a build to appear.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .finish()
    }
}

impl ClientConfig {
    /// Create an anonymous configuration for the given server URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            timeout_secs: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    /// Attach Basic Auth credentials.
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading client configuration");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// The default configuration file location.
    ///
    /// - Linux: `~/.config/jenkins-async/config.toml`
    /// - macOS: `~/Library/Application Support/jenkins-async/config.toml`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\jenkins-async\config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("jenkins-async").join("config.toml"))
    }

    /// Validate this configuration.
    ///
    /// Checks that:
    /// - The URL is non-empty and uses http or https
    /// - Username and password are either both set or both unset
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidationError(
                "URL cannot be empty".to_string(),
            ));
        }

        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "URL '{}' must start with http:// or https://",
                self.url
            )));
        }

        match (&self.username, &self.password) {
            (Some(_), None) => Err(ConfigError::ValidationError(
                "username is set but password is missing".to_string(),
            )),
            (None, Some(_)) => Err(ConfigError::ValidationError(
                "password is set but username is missing".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// The transport timeout as a `Duration`.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The polling interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
