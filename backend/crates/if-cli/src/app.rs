//! Runs one command against the session.

use crate::{CliResult, Commands};

use std::str::FromStr;

use if_auth::{
    Authorizer, Gate, KeyValueStore, Navigator, Notifier, SessionManager, login_with_feedback,
};
use if_core::Permission;
use serde_json::{Value, json};

/// Redirect target for denied checks
const HOME_PATH: &str = "/";

/// Command result: JSON for stdout plus whether the process should succeed.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub value: Value,
    pub success: bool,
}

impl Outcome {
    fn ok(value: Value) -> Self {
        Self {
            value,
            success: true,
        }
    }

    fn failed(value: Value) -> Self {
        Self {
            value,
            success: false,
        }
    }
}

/// Executes `command`.
///
/// Invalid credentials and denied checks are reported in the outcome; only
/// unexpected failures (storage, malformed input) come back as errors.
pub async fn execute<S: KeyValueStore>(
    command: Commands,
    session: &mut SessionManager<S>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> CliResult<Outcome> {
    match command {
        Commands::Login { email, password } => {
            match login_with_feedback(session, notifier, &email, &password).await {
                Ok(()) => Ok(Outcome::ok(whoami(session))),
                Err(e) if e.is_invalid_credentials() => Ok(Outcome::failed(json!({
                    "authenticated": false,
                    "error": e.user_message(),
                }))),
                Err(e) => Err(e.into()),
            }
        }

        Commands::Logout => {
            session.logout()?;
            Ok(Outcome::ok(json!({ "authenticated": false })))
        }

        Commands::Whoami => Ok(Outcome::ok(whoami(session))),

        Commands::Can { permission } => {
            let permission = Permission::from_str(&permission)?;
            let access = Gate::new(notifier, navigator).require(&*session, permission, HOME_PATH);
            let value = json!({
                "permission": permission,
                "granted": access.is_granted(),
            });
            if access.is_granted() {
                Ok(Outcome::ok(value))
            } else {
                Ok(Outcome::failed(value))
            }
        }

        Commands::Role => Ok(Outcome::ok(json!({
            "authenticated": session.is_authenticated(),
            "role": session.current_user().map(|user| user.role),
            "admin": session.is_admin(),
            "manager": session.is_manager(),
        }))),

        Commands::Users => {
            let users: Vec<_> = session
                .directory()
                .users()
                .map(|user| user.to_session_user())
                .collect();
            Ok(Outcome::ok(json!({ "users": users })))
        }
    }
}

fn whoami<S: KeyValueStore>(session: &SessionManager<S>) -> Value {
    match session.current_user() {
        Some(user) => json!({
            "authenticated": true,
            "user": user,
        }),
        None => json!({ "authenticated": false }),
    }
}
