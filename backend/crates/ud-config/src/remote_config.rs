use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REMOTE_BASE_URL, DEFAULT_REMOTE_TIMEOUT_SECS,
    MAX_REMOTE_TIMEOUT_SECS, MIN_REMOTE_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where the user listing comes from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL; the listing lives at `{base_url}/users`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_REMOTE_BASE_URL),
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::remote(format!(
                "remote.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_REMOTE_TIMEOUT_SECS || self.timeout_secs > MAX_REMOTE_TIMEOUT_SECS
        {
            return Err(ConfigError::remote(format!(
                "remote.timeout_secs must be {}-{}, got {}",
                MIN_REMOTE_TIMEOUT_SECS, MAX_REMOTE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
