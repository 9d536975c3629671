use crate::StoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use if_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Session storage failed: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Invalid user directory: {message} {location}")]
    Directory {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read user directory at {path}: {source} {location}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to parse user directory at {path}: {source} {location}")]
    DirectoryParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },

    #[error("Invalid user record: {source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Creates InvalidCredentials error at caller location.
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Directory error at caller location.
    #[track_caller]
    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrong email/password combination, as opposed to an unexpected failure.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials { .. })
    }

    /// Storage failure that may succeed if the user simply tries again.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Store { source, .. } if source.is_transient())
    }

    /// Message suitable for showing directly to the person signing in.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "Invalid email or password",
            Self::Store { source, .. } if source.is_transient() => {
                "Your session could not be saved. Please try again."
            }
            Self::Store { .. } => {
                "Your session could not be saved. Please contact an administrator."
            }
            Self::Directory { .. } | Self::DirectoryRead { .. } | Self::DirectoryParse { .. } => {
                "The user directory is unavailable. Please contact an administrator."
            }
            Self::Core { .. } => "A user record is invalid. Please contact an administrator.",
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
