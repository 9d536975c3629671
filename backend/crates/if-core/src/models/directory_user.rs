//! Account entry in the static user directory.

use crate::{CoreError, CoreResult, PermissionSet, Role, SessionUser};

use serde::Deserialize;
use uuid::Uuid;

/// A directory account, including its login secret.
///
/// Never persisted as-is; [`DirectoryUser::to_session_user`] strips the
/// password before anything leaves the directory.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub permissions: PermissionSet,
    pub password: String,
}

impl DirectoryUser {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
        permissions: impl Into<PermissionSet>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            avatar: None,
            role,
            permissions: permissions.into(),
            password: password.into(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Case-insensitive comparison against the login key, Unicode-aware.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.trim().to_lowercase() == email.trim().to_lowercase()
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
            role: self.role,
            permissions: self.permissions.clone(),
        }
    }

    /// Checks the fields a login depends on.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation(format!(
                "user {} has an empty name",
                self.id
            )));
        }
        if self.email.trim() != self.email {
            return Err(CoreError::validation(format!(
                "user {} has surrounding whitespace in email '{}'",
                self.id, self.email
            )));
        }
        if self.email.is_empty() || !self.email.contains('@') {
            return Err(CoreError::validation(format!(
                "user {} has an invalid email '{}'",
                self.id, self.email
            )));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation(format!(
                "user {} has an empty password",
                self.email
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for DirectoryUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("avatar", &self.avatar)
            .field("role", &self.role)
            .field("permissions", &self.permissions)
            .field("password", &"<redacted>")
            .finish()
    }
}
