pub mod access;
pub mod authorizer;
pub mod directory;
pub mod error;
pub mod feedback;
pub mod navigator;
pub mod notifier;
pub mod session_manager;
pub mod session_options;
pub mod session_state;
pub mod store;

pub use access::{Access, Gate};
pub use authorizer::Authorizer;
pub use directory::UserDirectory;
pub use error::{AuthError, Result};
pub use feedback::login_with_feedback;
pub use navigator::Navigator;
pub use notifier::{Notification, Notifier, Severity};
pub use session_manager::SessionManager;
pub use session_options::SessionOptions;
pub use session_state::SessionState;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

#[cfg(test)]
mod tests;
