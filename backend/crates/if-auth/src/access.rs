//! Permission gates for screens and actions.

use crate::{Authorizer, Navigator, Notification, Notifier, Severity};

use if_core::Permission;
use log::debug;

pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Signed in, but missing the requirement
    Denied,
    /// Nobody signed in
    SignInRequired,
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Checks a requirement and, when it fails, tells the user and moves them away.
///
/// Unauthenticated users get a warning and go to the login path; signed-in
/// users lacking the requirement get an error and go to the caller's
/// fallback path.
pub struct Gate<'a> {
    notifier: &'a dyn Notifier,
    navigator: &'a dyn Navigator,
    login_path: String,
}

impl<'a> Gate<'a> {
    pub fn new(notifier: &'a dyn Notifier, navigator: &'a dyn Navigator) -> Self {
        Self {
            notifier,
            navigator,
            login_path: String::from(DEFAULT_LOGIN_PATH),
        }
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn require(
        &self,
        session: &dyn Authorizer,
        permission: Permission,
        redirect_to: &str,
    ) -> Access {
        self.check(
            session,
            session.has_permission(permission),
            &format!("You need the '{permission}' permission for this action."),
            redirect_to,
        )
    }

    pub fn require_admin(&self, session: &dyn Authorizer, redirect_to: &str) -> Access {
        self.check(
            session,
            session.is_admin(),
            "This area is restricted to administrators.",
            redirect_to,
        )
    }

    pub fn require_manager(&self, session: &dyn Authorizer, redirect_to: &str) -> Access {
        self.check(
            session,
            session.is_manager(),
            "This area is restricted to managers.",
            redirect_to,
        )
    }

    fn check(
        &self,
        session: &dyn Authorizer,
        allowed: bool,
        denial: &str,
        redirect_to: &str,
    ) -> Access {
        if !session.is_authenticated() {
            debug!("Gate: no session, redirecting to {}", self.login_path);
            self.notifier.notify(Notification::new(
                "Sign in required",
                "Please sign in to continue.",
                Severity::Warning,
            ));
            self.navigator.redirect(&self.login_path);
            return Access::SignInRequired;
        }

        if allowed {
            return Access::Granted;
        }

        debug!("Gate: denied, redirecting to {redirect_to}");
        self.notifier.notify(Notification::new(
            "Permission denied",
            denial,
            Severity::Error,
        ));
        self.navigator.redirect(redirect_to);
        Access::Denied
    }
}
