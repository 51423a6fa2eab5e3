//! User command handlers

use log::debug;

use crate::api::AlClient;
use crate::cli::{
    Cli, CreateUserArgs, DeleteUserArgs, OutputArgs, UpdateUserArgs, UserArgs, UserIncludeArgs,
    UsersArgs,
};
use crate::output::{output_identity, output_user, output_users};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner};

use super::models::{CreateUserRequest, UpdateUserRequest, User, UserQuery};

fn user_query(include: &UserIncludeArgs) -> UserQuery {
    UserQuery {
        include_access_keys: include.include_access_keys,
        include_user_credential: include.include_credentials,
        include_role_ids: include.include_role_ids,
        role_id: None,
    }
}

/// Case-insensitive substring match on name, username and e-mail
fn matches_filter(user: &User, filter: &str) -> bool {
    let filter = filter.to_lowercase();
    [&user.name, &user.username, &user.email]
        .iter()
        .any(|field| field.to_lowercase().contains(&filter))
}

fn non_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Run the whoami command
pub async fn run_whoami_command(
    client: &AlClient,
    cli: &Cli,
    args: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !client.has_basic_credentials() {
        return Err(
            "whoami needs a username/password or access key pair; a token alone cannot be re-authenticated"
                .into(),
        );
    }

    let spinner = create_spinner("Authenticating...", cli.batch);
    let result = client.authenticate().await;
    finish_spinner(spinner);

    let response = result?;
    output_identity(&response.authentication, args.output, cli.no_header);
    Ok(())
}

/// Run the get users command
pub async fn run_get_users_command(
    client: &AlClient,
    cli: &Cli,
    args: &UsersArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut query = user_query(&args.include);

    let spinner = create_spinner("Fetching users...", cli.batch);
    let result = match &args.email {
        Some(email) => {
            debug!("Looking up users by e-mail '{}'", email);
            client.list_users_by_email(email, &query).await
        }
        None => {
            query.role_id = args.role_id.clone();
            debug!("Listing users (role filter: {:?})", query.role_id);
            client.list_users(&query).await
        }
    };
    finish_spinner(spinner);

    let mut users = result?.users;
    if let Some(filter) = &args.filter {
        users.retain(|u| matches_filter(u, filter));
        debug!("{} user(s) match filter '{}'", users.len(), filter);
    }

    output_users(&users, args.output, cli.no_header);
    Ok(())
}

/// Run the get user command
pub async fn run_get_user_command(
    client: &AlClient,
    cli: &Cli,
    args: &UserArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = user_query(&args.include);

    let spinner = create_spinner(&format!("Fetching user '{}'...", args.id), cli.batch);
    let result = if args.by_username {
        client.get_user_details_by_username(&args.id, &query).await
    } else if args.by_id {
        client.get_user_details_by_id(&args.id, &query).await
    } else {
        client.get_user_details(&args.id, &query).await
    };
    finish_spinner(spinner);

    output_user(&result?, args.output, cli.no_header);
    Ok(())
}

/// Run the create user command
pub async fn run_create_user_command(
    client: &AlClient,
    cli: &Cli,
    args: &CreateUserArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = CreateUserRequest {
        name: args.name.clone(),
        email: args.email.clone(),
        password: non_empty(&args.password),
        role_id: non_empty(&args.role_id),
        active: args.active,
        mobile_phone: non_empty(&args.mobile_phone),
        phone: non_empty(&args.phone),
        webhook_url: non_empty(&args.webhook_url),
        notifications_only: args.notifications_only,
    };

    let spinner = create_spinner(&format!("Creating user '{}'...", args.email), cli.batch);
    let result = client.create_user(&request, args.one_time_password).await;
    finish_spinner(spinner);

    let user = result?;
    println!("✓ Created user '{}' ({})", user.email, user.id);
    Ok(())
}

/// Run the update user command.
///
/// Name and e-mail are required by the API; missing ones are taken from the
/// user's current details.
pub async fn run_update_user_command(
    client: &AlClient,
    cli: &Cli,
    args: &UpdateUserArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Updating user '{}'...", args.id), cli.batch);

    let (name, email) = match (&args.name, &args.email) {
        (Some(name), Some(email)) => (name.clone(), email.clone()),
        _ => {
            debug!("Fetching current details of user {}", args.id);
            let current = match client.get_user_details(&args.id, &UserQuery::default()).await {
                Ok(user) => user,
                Err(e) => {
                    finish_spinner(spinner);
                    return Err(e.into());
                }
            };
            (
                args.name.clone().unwrap_or(current.name),
                args.email.clone().unwrap_or(current.email),
            )
        }
    };

    let request = UpdateUserRequest {
        name,
        email,
        password: non_empty(&args.password),
        active: args.active,
        mobile_phone: non_empty(&args.mobile_phone),
        phone: non_empty(&args.phone),
        webhook_url: non_empty(&args.webhook_url),
        notifications_only: args.notifications_only,
        ..Default::default()
    };

    let result = client
        .update_user_details(&args.id, &request, args.one_time_password)
        .await;
    finish_spinner(spinner);

    let user = result?;
    println!("✓ Updated user '{}' ({})", user.email, user.id);
    Ok(())
}

/// Run the delete user command
pub async fn run_delete_user_command(
    client: &AlClient,
    cli: &Cli,
    args: &DeleteUserArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = format!("Delete user {} from account {}?", args.id, client.account_id());
    if !confirm_destructive(&prompt, "delete user", args.yes, cli.batch)? {
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting user '{}'...", args.id), cli.batch);
    let result = client.delete_user(&args.id).await;
    finish_spinner(spinner);

    let status = result?;
    debug!("Delete user returned status {}", status);
    println!("✓ Deleted user {}", args.id);
    Ok(())
}
