use crate::{KeyValueStore, Notification, Notifier, Result as AuthResult, SessionManager, Severity};

use log::{error, warn};

/// Runs [`SessionManager::login`] and reports the outcome through `notifier`.
///
/// The result is returned unchanged so the caller can still branch on it.
pub async fn login_with_feedback<S: KeyValueStore>(
    session: &mut SessionManager<S>,
    notifier: &dyn Notifier,
    email: &str,
    password: &str,
) -> AuthResult<()> {
    match session.login(email, password).await {
        Ok(()) => {
            let name = session
                .current_user()
                .map(|user| user.name.as_str())
                .unwrap_or_default();
            notifier.notify(Notification::new(
                "Login successful",
                format!("Welcome back, {name}!"),
                Severity::Success,
            ));
            Ok(())
        }
        Err(e) => {
            if e.is_transient() {
                warn!("Login could not persist the session: {e}");
            } else if !e.is_invalid_credentials() {
                error!("Login failed unexpectedly: {e}");
            }
            notifier.notify(Notification::new(
                "Login failed",
                e.user_message(),
                Severity::Error,
            ));
            Err(e)
        }
    }
}
