//! AIMS users: authentication, lookup and management

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_user_command, run_delete_user_command, run_get_user_command,
    run_get_users_command, run_update_user_command, run_whoami_command,
};
pub use models::{
    AccessKey, Account, AuthenticateResponse, Authentication, CreateUserRequest, LinkedUser,
    UpdateUserRequest, User, UserCredential, UserList, UserQuery,
};
