//! alctl - Alert Logic Cloud Insight CLI entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use alertlogic::api::{accounts, assets, deployments, roles, user_roles, users};
use alertlogic::{
    AlClient, Cli, Command, CreateResource, CredentialResolver, DeleteResource, GetResource,
    UpdateResource,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting alctl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = CredentialResolver::new().resolve(&cli.credentials())?;
    debug!("Using account {}", credentials.account_id());

    let client = AlClient::authenticated_from(&credentials, cli.api_url.as_deref()).await?;
    debug!("API base URL: {}", client.base_url());

    match &cli.command {
        Command::Whoami(args) => users::run_whoami_command(&client, cli, args).await,
        Command::Get { resource } => match resource {
            GetResource::Account(args) => {
                accounts::run_get_account_command(&client, cli, args).await
            }
            GetResource::Relationship(args) => {
                accounts::run_get_relationship_command(&client, cli, args).await
            }
            GetResource::Users(args) => users::run_get_users_command(&client, cli, args).await,
            GetResource::User(args) => users::run_get_user_command(&client, cli, args).await,
            GetResource::Roles(args) => roles::run_get_roles_command(&client, cli, args).await,
            GetResource::Role(args) => roles::run_get_role_command(&client, cli, args).await,
            GetResource::UserRoles(args) => {
                user_roles::run_get_user_roles_command(&client, cli, args).await
            }
            GetResource::Deployments(args) => {
                deployments::run_get_deployments_command(&client, cli, args).await
            }
            GetResource::Deployment(args) => {
                deployments::run_get_deployment_command(&client, cli, args).await
            }
            GetResource::Assets(args) => assets::run_get_assets_command(&client, cli, args).await,
        },
        Command::Create { resource } => match resource {
            CreateResource::User(args) => users::run_create_user_command(&client, cli, args).await,
            CreateResource::Role(args) => roles::run_create_role_command(&client, cli, args).await,
            CreateResource::Asset(args) => {
                assets::run_create_asset_command(&client, cli, args).await
            }
        },
        Command::Update { resource } => match resource {
            UpdateResource::Account(args) => {
                accounts::run_update_account_command(&client, cli, args).await
            }
            UpdateResource::User(args) => users::run_update_user_command(&client, cli, args).await,
            UpdateResource::Role(args) => roles::run_update_role_command(&client, cli, args).await,
            UpdateResource::Asset(args) => {
                assets::run_update_asset_command(&client, cli, args).await
            }
        },
        Command::Delete { resource } => match resource {
            DeleteResource::User(args) => users::run_delete_user_command(&client, cli, args).await,
            DeleteResource::Role(args) => roles::run_delete_role_command(&client, cli, args).await,
            DeleteResource::Asset(args) => {
                assets::run_delete_asset_command(&client, cli, args).await
            }
        },
        Command::Grant(args) => user_roles::run_grant_command(&client, cli, args).await,
        Command::Revoke(args) => user_roles::run_revoke_command(&client, cli, args).await,
    }
}
