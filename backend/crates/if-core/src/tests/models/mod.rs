mod directory_user;
mod permission;
mod permission_set;
mod role;
mod session_user;
