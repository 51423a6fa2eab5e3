//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a user in the current account
    User(CreateUserArgs),

    /// Create a role in the current account
    Role(CreateRoleArgs),

    /// Declare an external DNS name asset in a deployment
    Asset(CreateAssetArgs),
}

/// Arguments for 'create user'
#[derive(Parser, Debug)]
pub struct CreateUserArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// E-mail address (also the username)
    #[arg(long)]
    pub email: String,

    /// Initial password; without one the user is e-mailed a link to set it
    #[arg(long)]
    pub password: Option<String>,

    /// Require the password to be changed at first login
    #[arg(long, requires = "password")]
    pub one_time_password: bool,

    /// Role to assign
    #[arg(long)]
    pub role_id: Option<String>,

    /// Mobile phone number
    #[arg(long)]
    pub mobile_phone: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Webhook URL for notifications
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Create the user as active
    #[arg(long)]
    pub active: bool,

    /// User only receives notifications and cannot log in
    #[arg(long)]
    pub notifications_only: bool,
}

/// Arguments for 'create role'
#[derive(Parser, Debug)]
pub struct CreateRoleArgs {
    /// Role name
    #[arg(long)]
    pub name: String,

    /// Permission as KEY=allowed|denied (repeatable)
    ///
    /// Example: --permission '*:own:get:*=allowed'
    #[arg(short, long = "permission", value_name = "KEY=VALUE", required = true)]
    pub permissions: Vec<String>,
}

/// Arguments for 'create asset'
#[derive(Parser, Debug)]
pub struct CreateAssetArgs {
    /// Deployment ID
    pub deployment_id: String,

    /// DNS name of the asset
    pub dns_name: String,
}
