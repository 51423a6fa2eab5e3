//! Arguments for granting and revoking user roles

use clap::Parser;

/// Arguments for 'grant' and 'revoke'
#[derive(Parser, Debug)]
pub struct UserRoleArgs {
    /// User ID
    pub user_id: String,

    /// Role ID
    pub role_id: String,
}
