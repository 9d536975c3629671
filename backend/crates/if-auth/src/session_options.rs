use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "ideaforge_user";
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Session manager tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Key the signed-in user is persisted under
    pub storage_key: String,
    /// Simulated latency applied to every login attempt
    pub login_delay: Duration,
}

impl SessionOptions {
    pub fn new(storage_key: impl Into<String>, login_delay: Duration) -> Self {
        Self {
            storage_key: storage_key.into(),
            login_delay,
        }
    }

    /// Default key, no simulated latency.
    pub fn immediate() -> Self {
        Self {
            login_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }
}
