//! Role assignments of users

mod api;
mod commands;
mod models;

pub use commands::{run_get_user_roles_command, run_grant_command, run_revoke_command};
pub use models::{PermissionsList, RoleIdsList};
