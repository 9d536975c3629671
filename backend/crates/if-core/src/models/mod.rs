pub mod directory_user;
pub mod permission;
pub mod permission_set;
pub mod role;
pub mod session_user;
