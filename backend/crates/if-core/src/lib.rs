pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use models::directory_user::DirectoryUser;
pub use models::permission::Permission;
pub use models::permission_set::PermissionSet;
pub use models::role::Role;
pub use models::session_user::SessionUser;

#[cfg(test)]
mod tests;
