use if_core::{Permission, SessionUser};

/// Read side of the session, handed to anything that gates an action.
pub trait Authorizer {
    fn current_user(&self) -> Option<&SessionUser>;

    /// False when nobody is signed in; otherwise exact membership.
    fn has_permission(&self, permission: Permission) -> bool {
        self.current_user()
            .is_some_and(|user| user.has_permission(permission))
    }

    fn is_admin(&self) -> bool {
        self.current_user().is_some_and(SessionUser::is_admin)
    }

    /// Administrators also answer true here.
    fn is_manager(&self) -> bool {
        self.current_user().is_some_and(SessionUser::is_manager)
    }

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}
