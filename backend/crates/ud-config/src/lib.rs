mod config;
mod error;
mod log_level;
mod logging_config;
mod remote_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;
pub use store_config::StoreConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "UD_CONFIG_DIR";
/// Directory under $HOME used when UD_CONFIG_DIR is unset
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".user-directory";
pub const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_REMOTE_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;
pub const MIN_REMOTE_TIMEOUT_SECS: u64 = 1;
pub const MAX_REMOTE_TIMEOUT_SECS: u64 = 300;

pub const DEFAULT_STORE_FILENAME: &str = "local_storage.json";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
