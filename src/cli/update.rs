//! Update command resource definitions and arguments

use clap::{ArgAction, Parser, Subcommand};

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update the current account
    #[command(visible_alias = "acct")]
    Account(UpdateAccountArgs),

    /// Update a user
    User(UpdateUserArgs),

    /// Update a role
    Role(UpdateRoleArgs),

    /// Rename an external DNS name asset
    Asset(UpdateAssetArgs),
}

/// Arguments for 'update account'
#[derive(Parser, Debug)]
pub struct UpdateAccountArgs {
    /// Require MFA for all users of the account
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub mfa_required: bool,
}

/// Arguments for 'update user'
///
/// Name and e-mail default to the user's current values.
#[derive(Parser, Debug)]
pub struct UpdateUserArgs {
    /// User ID
    pub id: String,

    /// New full name
    #[arg(long)]
    pub name: Option<String>,

    /// New e-mail address
    #[arg(long)]
    pub email: Option<String>,

    /// New password
    #[arg(long)]
    pub password: Option<String>,

    /// Require the new password to be changed at next login
    #[arg(long, requires = "password")]
    pub one_time_password: bool,

    /// Mobile phone number
    #[arg(long)]
    pub mobile_phone: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Webhook URL for notifications
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Mark the user active
    #[arg(long)]
    pub active: bool,

    /// User only receives notifications and cannot log in
    #[arg(long)]
    pub notifications_only: bool,
}

/// Arguments for 'update role'
#[derive(Parser, Debug)]
pub struct UpdateRoleArgs {
    /// Role ID
    pub id: String,

    /// New role name
    #[arg(long)]
    pub name: Option<String>,

    /// Replacement permission as KEY=allowed|denied (repeatable)
    #[arg(short, long = "permission", value_name = "KEY=VALUE")]
    pub permissions: Vec<String>,
}

/// Arguments for 'update asset'
#[derive(Parser, Debug)]
pub struct UpdateAssetArgs {
    /// Deployment ID
    pub deployment_id: String,

    /// New DNS name
    pub dns_name: String,

    /// DNS name the asset is currently declared under
    #[arg(long = "old", value_name = "OLD_DNS_NAME")]
    pub old_dns_name: String,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;

    use super::*;

    fn parse_update(args: &[&str]) -> UpdateResource {
        let mut argv = vec!["alctl", "update"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Update { resource } => resource,
            other => panic!("Expected Command::Update, got {:?}", other),
        }
    }

    #[test]
    fn test_update_account_mfa_value() {
        match parse_update(&["account", "--mfa-required", "true"]) {
            UpdateResource::Account(args) => assert!(args.mfa_required),
            other => panic!("Expected update account, got {:?}", other),
        }
        match parse_update(&["account", "--mfa-required", "false"]) {
            UpdateResource::Account(args) => assert!(!args.mfa_required),
            other => panic!("Expected update account, got {:?}", other),
        }
    }

    #[test]
    fn test_update_account_requires_mfa_value() {
        assert!(Cli::try_parse_from(["alctl", "update", "account"]).is_err());
    }

    #[test]
    fn test_update_asset_old_name() {
        match parse_update(&["asset", "dep-1", "new.example.com", "--old", "old.example.com"]) {
            UpdateResource::Asset(args) => {
                assert_eq!(args.dns_name, "new.example.com");
                assert_eq!(args.old_dns_name, "old.example.com");
            }
            other => panic!("Expected update asset, got {:?}", other),
        }
    }

    #[test]
    fn test_update_user_optional_fields() {
        match parse_update(&["user", "u-1", "--email", "new@email.com"]) {
            UpdateResource::User(args) => {
                assert_eq!(args.id, "u-1");
                assert!(args.name.is_none());
                assert_eq!(args.email.as_deref(), Some("new@email.com"));
                assert!(!args.one_time_password);
            }
            other => panic!("Expected update user, got {:?}", other),
        }
    }
}
