//! Terminal stand-ins for the toast and navigation surfaces.

use if_auth::{Navigator, Notification, Notifier, Severity};
use log::info;

/// Prints notifications to stderr so stdout stays machine-readable.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let tag = match notification.severity {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Warning => "warn",
            Severity::Error => "error",
        };
        eprintln!(
            "[{tag}] {}: {}",
            notification.title, notification.description
        );
    }
}

/// There are no screens in a terminal; redirects are only logged.
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn redirect(&self, path: &str) {
        info!("Redirect to {path}");
    }
}
