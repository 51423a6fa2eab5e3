//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::{OutputArgs, OutputFormat};
use super::enums::RelationshipKind;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get details of the current account
    #[command(visible_alias = "acct")]
    Account(OutputArgs),

    /// Check whether another account is related to the current one
    #[command(visible_alias = "rel")]
    Relationship(RelationshipArgs),

    /// List users of the current account
    Users(UsersArgs),

    /// Get a single user
    User(UserArgs),

    /// List roles
    Roles(RolesArgs),

    /// Get a single role
    Role(RoleArgs),

    /// Get roles, role IDs or permissions assigned to a user
    #[command(visible_alias = "user-role")]
    UserRoles(UserRolesArgs),

    /// List deployments
    #[command(visible_alias = "deps")]
    Deployments(OutputArgs),

    /// Get a single deployment
    #[command(visible_alias = "dep")]
    Deployment(DeploymentArgs),

    /// List external DNS name assets
    Assets(AssetsArgs),
}

/// Arguments for 'get relationship'
#[derive(Parser, Debug)]
pub struct RelationshipArgs {
    /// Related account ID
    pub related_account_id: String,

    /// Kind of relationship to check
    #[arg(short, long, value_enum)]
    pub kind: RelationshipKind,
}

/// Detail flags shared by user lookups
#[derive(Parser, Debug, Clone, Default)]
pub struct UserIncludeArgs {
    /// Include access keys
    #[arg(long, default_value_t = false)]
    pub include_access_keys: bool,

    /// Include credential details
    #[arg(long, default_value_t = false)]
    pub include_credentials: bool,

    /// Include assigned role IDs
    #[arg(long, default_value_t = false)]
    pub include_role_ids: bool,
}

/// Arguments for 'get users'
#[derive(Parser, Debug)]
pub struct UsersArgs {
    /// Only users holding this role
    #[arg(long, conflicts_with = "email")]
    pub role_id: Option<String>,

    /// Look users up by e-mail address across accounts
    #[arg(long)]
    pub email: Option<String>,

    /// Filter users by name or e-mail (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    #[command(flatten)]
    pub include: UserIncludeArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get user'
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// User ID (or username with --by-username)
    pub id: String,

    /// Look the user up by ID without scoping to the current account
    #[arg(long, conflicts_with = "by_username")]
    pub by_id: bool,

    /// Treat the argument as a username
    #[arg(long)]
    pub by_username: bool,

    #[command(flatten)]
    pub include: UserIncludeArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get roles'
#[derive(Parser, Debug)]
pub struct RolesArgs {
    /// List global roles instead of account roles
    #[arg(short, long)]
    pub global: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get role'
#[derive(Parser, Debug)]
pub struct RoleArgs {
    /// Role ID
    pub id: String,

    /// Look up a global role
    #[arg(short, long)]
    pub global: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get user-roles'
#[derive(Parser, Debug)]
pub struct UserRolesArgs {
    /// User ID
    pub user_id: String,

    /// Only show role IDs
    #[arg(long, conflicts_with = "permissions")]
    pub ids: bool,

    /// Show the user's effective permissions
    #[arg(long)]
    pub permissions: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get deployment'
#[derive(Parser, Debug)]
pub struct DeploymentArgs {
    /// Deployment ID
    pub id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get assets'
#[derive(Parser, Debug)]
pub struct AssetsArgs {
    /// Only assets of this deployment
    #[arg(short, long)]
    pub deployment: Option<String>,

    /// Filter assets by DNS name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
