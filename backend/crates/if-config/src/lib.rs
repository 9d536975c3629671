mod config;
mod directory_config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use config::Config;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "IF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".ideaforge";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
pub const MAX_LOGIN_DELAY_MS: u64 = 10_000;
pub const DEFAULT_STORAGE_KEY: &str = "ideaforge_user";
pub const DEFAULT_STORAGE_DIR: &str = "session";
pub const MAX_STORAGE_KEY_LENGTH: usize = 64;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
