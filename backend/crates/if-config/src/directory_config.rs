use crate::{ConfigError, ConfigErrorResult, config::ensure_relative};

use serde::Deserialize;

/// Where login accounts come from.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DirectoryConfig {
    /// TOML user directory relative to the config dir; built-in sample accounts when unset
    pub path: Option<String>,
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.path {
            Some(path) => ensure_relative("directory.path", path)
                .map_err(|message| ConfigError::directory(message)),
            None => Ok(()),
        }
    }
}
