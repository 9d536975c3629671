//! Session ownership: login, logout, and the queries gated screens rely on.

use crate::store::{self, KeyValueStore};
use crate::{
    AuthError, Authorizer, Result as AuthResult, SessionOptions, SessionState, UserDirectory,
};

use if_core::{Permission, SessionUser};
use log::{debug, info, warn};

/// Holds the signed-in user for one client context.
///
/// Constructed once at the composition root and passed by reference:
/// `login`/`logout` need `&mut self`, every query takes `&self`.
#[derive(Debug)]
pub struct SessionManager<S: KeyValueStore> {
    directory: UserDirectory,
    store: S,
    options: SessionOptions,
    current: Option<SessionUser>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Restores the persisted session, if any.
    ///
    /// A stored value that does not decode, or that no longer matches the
    /// projection of a directory user, starts the session signed out.
    pub fn restore(
        directory: UserDirectory,
        store: S,
        options: SessionOptions,
    ) -> AuthResult<Self> {
        let stored: Option<SessionUser> = store::read_or_default(&store, &options.storage_key)?;

        let current = stored.and_then(|user| {
            let expected = directory
                .find_by_id(user.id)
                .map(|entry| entry.to_session_user());

            if expected.as_ref() == Some(&user) {
                info!("Restored session for {}", user.email);
                Some(user)
            } else {
                warn!(
                    "Discarding stored session for {}: no longer matches the directory",
                    user.email
                );
                None
            }
        });

        Ok(Self {
            directory,
            store,
            options,
            current,
        })
    }

    /// Signs in after the configured delay.
    ///
    /// Nothing changes on failure. On success the user is persisted before
    /// becoming current, so a storage error leaves the previous session intact.
    pub async fn login(&mut self, email: &str, password: &str) -> AuthResult<()> {
        debug!("Login attempt for {}", email.trim());
        tokio::time::sleep(self.options.login_delay).await;

        let Some(entry) = self.directory.authenticate(email, password) else {
            info!("Login rejected for {}", email.trim());
            return Err(AuthError::invalid_credentials());
        };

        let user = entry.to_session_user();
        store::write_json(&mut self.store, &self.options.storage_key, &user)?;

        info!("Signed in {} ({})", user.email, user.role);
        self.current = Some(user);
        Ok(())
    }

    /// Signs out. Safe to call with nobody signed in.
    ///
    /// In-memory state is always cleared; a failure removing the persisted
    /// entry is still reported.
    pub fn logout(&mut self) -> AuthResult<()> {
        let previous = self.current.take();
        self.store.remove(&self.options.storage_key)?;

        match previous {
            Some(user) => info!("Signed out {}", user.email),
            None => debug!("Logout with no active session"),
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        Authorizer::has_permission(self, permission)
    }

    pub fn is_admin(&self) -> bool {
        Authorizer::is_admin(self)
    }

    pub fn is_manager(&self) -> bool {
        Authorizer::is_manager(self)
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> Authorizer for SessionManager<S> {
    fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }
}
