//! AIMS roles and their permission maps

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_role_command, run_delete_role_command, run_get_role_command,
    run_get_roles_command, run_update_role_command,
};
pub use models::{
    parse_permissions, CreateRoleRequest, Permission, Permissions, Role, RolesList,
    UpdateRoleRequest,
};
