//! Static account directory used for login.

use crate::{AuthError, Result as AuthResult};

use std::collections::HashSet;
use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use if_core::{DirectoryUser, Permission, PermissionSet, Role};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

/// On-disk layout: a list of `[[users]]` tables.
#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    users: Vec<DirectoryUser>,
}

/// Immutable set of accounts that can sign in.
///
/// Ids are unique and emails are unique ignoring case.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<DirectoryUser>,
}

impl UserDirectory {
    /// Builds a directory after validating every entry.
    #[track_caller]
    pub fn new(users: Vec<DirectoryUser>) -> AuthResult<Self> {
        let mut ids = HashSet::new();
        let mut emails = HashSet::new();

        for user in &users {
            user.validate()?;

            if !ids.insert(user.id) {
                return Err(AuthError::directory(format!(
                    "duplicate user id {}",
                    user.id
                )));
            }
            if !emails.insert(user.email.trim().to_lowercase()) {
                return Err(AuthError::directory(format!(
                    "duplicate email {}",
                    user.email
                )));
            }
        }

        Ok(Self { users })
    }

    /// Built-in sample accounts, one per role.
    pub fn sample() -> Self {
        let users = vec![
            DirectoryUser::new(
                Uuid::from_u128(1),
                "Alex Johnson",
                "alex@example.com",
                "password123",
                Role::Admin,
                PermissionSet::all(),
            )
            .with_avatar("/avatars/alex.png"),
            DirectoryUser::new(
                Uuid::from_u128(2),
                "Morgan Lee",
                "morgan@example.com",
                "manager123",
                Role::Manager,
                [
                    Permission::Create,
                    Permission::Read,
                    Permission::Update,
                    Permission::Approve,
                    Permission::Convert,
                    Permission::Comment,
                    Permission::Vote,
                ],
            )
            .with_avatar("/avatars/morgan.png"),
            DirectoryUser::new(
                Uuid::from_u128(3),
                "Jamie Rivera",
                "jamie@example.com",
                "user123",
                Role::User,
                [
                    Permission::Create,
                    Permission::Read,
                    Permission::Update,
                    Permission::Comment,
                    Permission::Vote,
                ],
            ),
            DirectoryUser::new(
                Uuid::from_u128(4),
                "Guest User",
                "guest@example.com",
                "guest123",
                Role::Guest,
                [Permission::Read],
            ),
        ];

        Self { users }
    }

    #[track_caller]
    pub fn from_toml_str(contents: &str, path: &Path) -> AuthResult<Self> {
        let file: DirectoryFile =
            toml::from_str(contents).map_err(|source| AuthError::DirectoryParse {
                path: path.to_path_buf(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Self::new(file.users)
    }

    /// Loads a `[[users]]` TOML file.
    #[track_caller]
    pub fn from_toml_file(path: &Path) -> AuthResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| AuthError::DirectoryRead {
                path: path.to_path_buf(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let directory = Self::from_toml_str(&contents, path)?;
        info!("Loaded {} users from {}", directory.len(), path.display());
        Ok(directory)
    }

    /// Case-insensitive lookup by login email.
    pub fn find_by_email(&self, email: &str) -> Option<&DirectoryUser> {
        self.users.iter().find(|user| user.matches_email(email))
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&DirectoryUser> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Email matched ignoring case, password matched exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&DirectoryUser> {
        if email.trim().is_empty() || password.is_empty() {
            return None;
        }

        self.find_by_email(email)
            .filter(|user| user.verify_password(password))
    }

    pub fn users(&self) -> impl Iterator<Item = &DirectoryUser> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::sample()
    }
}
