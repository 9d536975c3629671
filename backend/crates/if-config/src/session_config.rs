use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_DELAY_MS, DEFAULT_STORAGE_DIR,
    DEFAULT_STORAGE_KEY, MAX_LOGIN_DELAY_MS, MAX_STORAGE_KEY_LENGTH, config::ensure_relative,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated network latency applied to every login attempt
    pub login_delay_ms: u64,
    /// Key under which the signed-in user is persisted
    pub storage_key: String,
    /// Store directory, relative to the config dir
    pub storage_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            storage_dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl SessionConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.login_delay_ms > MAX_LOGIN_DELAY_MS {
            return Err(ConfigError::session(format!(
                "session.login_delay_ms must be 0-{}, got {}",
                MAX_LOGIN_DELAY_MS, self.login_delay_ms
            )));
        }

        if self.storage_key.is_empty() || self.storage_key.len() > MAX_STORAGE_KEY_LENGTH {
            return Err(ConfigError::session(format!(
                "session.storage_key must be 1-{} characters, got {}",
                MAX_STORAGE_KEY_LENGTH,
                self.storage_key.len()
            )));
        }

        if !self
            .storage_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::session(format!(
                "session.storage_key may only contain letters, digits, '_' and '-', got '{}'",
                self.storage_key
            )));
        }

        ensure_relative("session.storage_dir", &self.storage_dir)
            .map_err(|message| ConfigError::session(message))
    }
}
