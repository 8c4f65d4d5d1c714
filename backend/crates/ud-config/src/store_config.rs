use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORE_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file, relative to the config directory
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_STORE_FILENAME),
        }
    }
}

impl StoreConfig {
    /// The store must live inside the config directory
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::store("store.path cannot be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::store(
                "store.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
