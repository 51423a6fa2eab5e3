//! CLI argument parsing

mod common;
mod create;
mod delete;
mod enums;
mod get;
mod grant;
mod update;

use clap::{Parser, Subcommand};

use crate::api::CliCredentials;
use crate::config::{credentials, defaults};

pub use common::{OutputArgs, OutputFormat};
pub use create::{CreateAssetArgs, CreateResource, CreateRoleArgs, CreateUserArgs};
pub use delete::{DeleteAssetArgs, DeleteResource, DeleteRoleArgs, DeleteUserArgs};
pub use enums::RelationshipKind;
pub use get::{
    AssetsArgs, DeploymentArgs, GetResource, RelationshipArgs, RoleArgs, RolesArgs, UserArgs,
    UserIncludeArgs, UserRolesArgs, UsersArgs,
};
pub use grant::UserRoleArgs;
pub use update::{
    UpdateAccountArgs, UpdateAssetArgs, UpdateResource, UpdateRoleArgs, UpdateUserArgs,
};

/// Alert Logic Cloud Insight CLI
#[derive(Parser, Debug)]
#[command(name = "alctl")]
#[command(version)]
#[command(about = "Manage Alert Logic Cloud Insight users, roles, deployments and assets")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Account ID every account-scoped call is made against
    #[arg(long, global = true, env = credentials::ACCOUNT_ID_ENV)]
    pub account_id: Option<String>,

    /// Username (console e-mail) to authenticate with
    #[arg(long, global = true, env = credentials::USERNAME_ENV)]
    pub username: Option<String>,

    /// Password for --username
    #[arg(long, global = true, env = credentials::PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// Access key ID to authenticate with
    #[arg(long, global = true, env = credentials::ACCESS_KEY_ID_ENV)]
    pub access_key_id: Option<String>,

    /// Secret key for --access-key-id
    #[arg(long, global = true, env = credentials::SECRET_KEY_ENV, hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Existing AIMS token (overrides other credentials)
    #[arg(short = 't', long, global = true, env = credentials::API_TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = credentials::API_URL_ENV)]
    pub api_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Non-interactive mode: no spinners, no prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

impl Cli {
    /// Credential values given on the command line or through the environment
    pub fn credentials(&self) -> CliCredentials {
        CliCredentials {
            account_id: self.account_id.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_key: self.secret_key.clone(),
            api_token: self.token.clone(),
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate and show the current user and account
    Whoami(OutputArgs),

    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Update resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete resources
    #[command(visible_alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Grant a role to a user
    Grant(UserRoleArgs),

    /// Revoke a role from a user
    Revoke(UserRoleArgs),
}
