//! Account command handlers

use log::debug;

use crate::api::AlClient;
use crate::cli::{Cli, OutputArgs, RelationshipArgs, UpdateAccountArgs};
use crate::output::output_account;
use crate::ui::{create_spinner, finish_spinner};

use super::models::{AccountRelationship, UpdateAccountDetailsRequest};

/// Run the get account command
pub async fn run_get_account_command(
    client: &AlClient,
    cli: &Cli,
    args: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching account details...", cli.batch);
    let result = client.get_account_details().await;
    finish_spinner(spinner);

    output_account(&result?, args.output, cli.no_header);
    Ok(())
}

/// Run the get relationship command
pub async fn run_get_relationship_command(
    client: &AlClient,
    cli: &Cli,
    args: &RelationshipArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let relationship = AccountRelationship::from(args.kind);
    debug!(
        "Checking '{}' relationship of {} to {}",
        relationship,
        args.related_account_id,
        client.account_id()
    );

    let spinner = create_spinner("Checking account relationship...", cli.batch);
    let result = client
        .get_account_relationship(&args.related_account_id, relationship)
        .await;
    finish_spinner(spinner);

    let status = result?;
    debug!("Relationship check returned status {}", status);
    println!(
        "✓ Account {} has relationship '{}' to account {}",
        args.related_account_id,
        relationship,
        client.account_id()
    );
    Ok(())
}

/// Run the update account command
pub async fn run_update_account_command(
    client: &AlClient,
    cli: &Cli,
    args: &UpdateAccountArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = UpdateAccountDetailsRequest {
        mfa_required: args.mfa_required,
    };

    let spinner = create_spinner("Updating account...", cli.batch);
    let result = client.update_account_details(&request).await;
    finish_spinner(spinner);

    let account = result?;
    println!(
        "✓ Updated account '{}' ({}): MFA required = {}",
        account.name, account.id, account.mfa_required
    );
    Ok(())
}
