//! Role assignment command handlers

use log::debug;

use crate::api::AlClient;
use crate::cli::{Cli, UserRoleArgs, UserRolesArgs};
use crate::output::{output_role_ids, output_roles, output_user_permissions};
use crate::ui::{create_spinner, finish_spinner};

/// Run the get user-roles command
pub async fn run_get_user_roles_command(
    client: &AlClient,
    cli: &Cli,
    args: &UserRolesArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Fetching role assignments of user '{}'...", args.user_id),
        cli.batch,
    );

    if args.ids {
        let result = client.get_assigned_role_ids(&args.user_id).await;
        finish_spinner(spinner);
        output_role_ids(&result?, args.output, cli.no_header);
    } else if args.permissions {
        let result = client.get_user_permissions(&args.user_id).await;
        finish_spinner(spinner);
        output_user_permissions(&result?, args.output, cli.no_header);
    } else {
        let result = client.get_assigned_roles(&args.user_id).await;
        finish_spinner(spinner);
        let roles = result?.roles;
        debug!("User {} has {} role(s)", args.user_id, roles.len());
        output_roles(&roles, args.output, cli.no_header);
    }

    Ok(())
}

/// Run the grant command
pub async fn run_grant_command(
    client: &AlClient,
    cli: &Cli,
    args: &UserRoleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Granting role '{}' to user '{}'...", args.role_id, args.user_id),
        cli.batch,
    );
    let result = client.grant_user_role(&args.user_id, &args.role_id).await;
    finish_spinner(spinner);

    let status = result?;
    debug!("Grant returned status {}", status);
    println!("✓ Granted role {} to user {}", args.role_id, args.user_id);
    Ok(())
}

/// Run the revoke command
pub async fn run_revoke_command(
    client: &AlClient,
    cli: &Cli,
    args: &UserRoleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Revoking role '{}' from user '{}'...", args.role_id, args.user_id),
        cli.batch,
    );
    let result = client.revoke_user_role(&args.user_id, &args.role_id).await;
    finish_spinner(spinner);

    let status = result?;
    debug!("Revoke returned status {}", status);
    println!("✓ Revoked role {} from user {}", args.role_id, args.user_id);
    Ok(())
}
