//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a user
    User(DeleteUserArgs),

    /// Delete a role
    Role(DeleteRoleArgs),

    /// Remove an external DNS name asset from a deployment
    Asset(DeleteAssetArgs),
}

/// Arguments for 'delete user'
#[derive(Parser, Debug)]
pub struct DeleteUserArgs {
    /// User ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete role'
#[derive(Parser, Debug)]
pub struct DeleteRoleArgs {
    /// Role ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete asset'
#[derive(Parser, Debug)]
pub struct DeleteAssetArgs {
    /// Deployment ID
    pub deployment_id: String,

    /// DNS name of the asset
    pub dns_name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
