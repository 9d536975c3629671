//! Credential-free projection of a directory account.

use crate::{Permission, PermissionSet, Role};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity of the signed-in user, as persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub permissions: PermissionSet,
}

impl SessionUser {
    /// Exact membership check against the granted set.
    pub fn has_permission(&self, required: Permission) -> bool {
        self.permissions.contains(required)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Administrators count as managers here, even though `has_permission`
    /// grants nothing from role alone.
    pub fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager | Role::Admin)
    }
}
