//! Application configuration value object

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::error::ConfigError;

/// Name of the per-user cache subdirectory
pub const APP_DIR_NAME: &str = "shell-forvo";

/// Upstream site serving the search pages
pub const DEFAULT_SEARCH_URL: &str = "https://forvo.com";

/// Upstream host serving the audio files
pub const DEFAULT_AUDIO_URL: &str = "https://audio00.forvo.com";

/// Browser user agent sent with every request; the upstream blocks unknown clients
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Application configuration.
/// All fields are optional to support merging CLI values over defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub cache_dir: Option<PathBuf>,
    pub search_url: Option<String>,
    pub audio_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            search_url: Some(DEFAULT_SEARCH_URL.to_string()),
            audio_url: Some(DEFAULT_AUDIO_URL.to_string()),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            cache_dir: other.cache_dir.or(self.cache_dir),
            search_url: other.search_url.or(self.search_url),
            audio_url: other.audio_url.or(self.audio_url),
            user_agent: other.user_agent.or(self.user_agent),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Check values that cannot be expressed by the field types
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError {
                key: "timeout".to_string(),
                message: "Value must be a positive number of seconds".to_string(),
            });
        }

        if let Some(ua) = &self.user_agent {
            if ua.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: "user_agent".to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Cache root, failing when no per-user cache location exists
    pub fn cache_dir_or_default(&self) -> Result<PathBuf, ConfigError> {
        self.cache_dir
            .clone()
            .or_else(default_cache_dir)
            .ok_or(ConfigError::NoCacheDir)
    }

    pub fn search_url_or_default(&self) -> &str {
        self.search_url.as_deref().unwrap_or(DEFAULT_SEARCH_URL)
    }

    pub fn audio_url_or_default(&self) -> &str {
        self.audio_url.as_deref().unwrap_or(DEFAULT_AUDIO_URL)
    }

    pub fn user_agent_or_default(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn timeout_or_default(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// `$XDG_CACHE_HOME/shell-forvo` or the platform equivalent
fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR_NAME))
}
