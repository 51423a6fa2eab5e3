//! Role command handlers

use log::debug;

use crate::api::AlClient;
use crate::cli::{Cli, CreateRoleArgs, DeleteRoleArgs, RoleArgs, RolesArgs, UpdateRoleArgs};
use crate::output::{output_role, output_roles};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner};

use super::models::{parse_permissions, CreateRoleRequest, UpdateRoleRequest};

/// Run the get roles command
pub async fn run_get_roles_command(
    client: &AlClient,
    cli: &Cli,
    args: &RolesArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching roles...", cli.batch);
    let result = if args.global {
        client.list_global_roles().await
    } else {
        client.list_roles().await
    };
    finish_spinner(spinner);

    let roles = result?.roles;
    debug!("Fetched {} role(s)", roles.len());
    output_roles(&roles, args.output, cli.no_header);
    Ok(())
}

/// Run the get role command
pub async fn run_get_role_command(
    client: &AlClient,
    cli: &Cli,
    args: &RoleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Fetching role '{}'...", args.id), cli.batch);
    let result = if args.global {
        client.get_global_role_details(&args.id).await
    } else {
        client.get_role_details(&args.id).await
    };
    finish_spinner(spinner);

    output_role(&result?, args.output, cli.no_header);
    Ok(())
}

/// Run the create role command
pub async fn run_create_role_command(
    client: &AlClient,
    cli: &Cli,
    args: &CreateRoleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = CreateRoleRequest {
        name: args.name.clone(),
        permissions: parse_permissions(&args.permissions)?,
    };

    let spinner = create_spinner(&format!("Creating role '{}'...", args.name), cli.batch);
    let result = client.create_role(&request).await;
    finish_spinner(spinner);

    let role = result?;
    println!(
        "✓ Created role '{}' ({}) with {} permission(s)",
        role.name,
        role.id,
        role.permissions.len()
    );
    Ok(())
}

/// Run the update role command
pub async fn run_update_role_command(
    client: &AlClient,
    cli: &Cli,
    args: &UpdateRoleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let permissions = if args.permissions.is_empty() {
        None
    } else {
        Some(parse_permissions(&args.permissions)?)
    };
    if args.name.is_none() && permissions.is_none() {
        return Err("Nothing to update: pass --name and/or --permission".into());
    }

    let request = UpdateRoleRequest {
        name: args.name.clone(),
        permissions,
    };

    let spinner = create_spinner(&format!("Updating role '{}'...", args.id), cli.batch);
    let result = client.update_role_details(&args.id, &request).await;
    finish_spinner(spinner);

    let role = result?;
    println!("✓ Updated role '{}' ({})", role.name, role.id);
    Ok(())
}

/// Run the delete role command
pub async fn run_delete_role_command(
    client: &AlClient,
    cli: &Cli,
    args: &DeleteRoleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = format!("Delete role {} from account {}?", args.id, client.account_id());
    if !confirm_destructive(&prompt, "delete role", args.yes, cli.batch)? {
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting role '{}'...", args.id), cli.batch);
    let result = client.delete_role(&args.id).await;
    finish_spinner(spinner);

    let status = result?;
    debug!("Delete role returned status {}", status);
    println!("✓ Deleted role {}", args.id);
    Ok(())
}
