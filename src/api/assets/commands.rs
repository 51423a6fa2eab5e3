//! Asset command handlers

use log::debug;

use crate::api::AlClient;
use crate::cli::{AssetsArgs, Cli, CreateAssetArgs, DeleteAssetArgs, UpdateAssetArgs};
use crate::output::output_assets;
use crate::ui::{confirm_destructive, create_spinner, finish_spinner};

use super::models::{ExternalDnsNameAsset, ExternalDnsNameAssets};

/// Assets of `deployment` (if given) whose DNS name contains `filter`
fn select_assets<'a>(
    assets: &'a ExternalDnsNameAssets,
    deployment: Option<&str>,
    filter: Option<&str>,
) -> Vec<&'a ExternalDnsNameAsset> {
    let filter = filter.map(str::to_lowercase);
    assets
        .iter()
        .filter(|a| deployment.map_or(true, |d| a.deployment_id == d))
        .filter(|a| {
            filter
                .as_deref()
                .map_or(true, |f| a.dns_name.to_lowercase().contains(f))
        })
        .collect()
}

/// Run the get assets command
pub async fn run_get_assets_command(
    client: &AlClient,
    cli: &Cli,
    args: &AssetsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching external DNS name assets...", cli.batch);
    let result = client.get_external_dns_name_assets().await;
    finish_spinner(spinner);

    let assets = result?;
    let selected = select_assets(&assets, args.deployment.as_deref(), args.filter.as_deref());
    debug!(
        "{} of {} asset row(s) selected",
        selected.len(),
        assets.rows
    );

    output_assets(&selected, args.output, cli.no_header);
    Ok(())
}

/// Run the create asset command
pub async fn run_create_asset_command(
    client: &AlClient,
    cli: &Cli,
    args: &CreateAssetArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Declaring asset '{}'...", args.dns_name), cli.batch);
    let result = client
        .create_external_dns_name_asset(&args.deployment_id, &args.dns_name)
        .await;
    finish_spinner(spinner);

    let status = result?;
    debug!("Declare asset returned status {}", status);
    println!(
        "✓ Declared asset '{}' in deployment {}",
        args.dns_name, args.deployment_id
    );
    Ok(())
}

/// Run the update asset command
pub async fn run_update_asset_command(
    client: &AlClient,
    cli: &Cli,
    args: &UpdateAssetArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Renaming asset '{}' to '{}'...", args.old_dns_name, args.dns_name),
        cli.batch,
    );
    let result = client
        .update_external_dns_name_asset(&args.deployment_id, &args.dns_name, &args.old_dns_name)
        .await;
    finish_spinner(spinner);

    let status = result?;
    debug!("Redeclare asset returned status {}", status);
    println!(
        "✓ Renamed asset '{}' to '{}' in deployment {}",
        args.old_dns_name, args.dns_name, args.deployment_id
    );
    Ok(())
}

/// Run the delete asset command
pub async fn run_delete_asset_command(
    client: &AlClient,
    cli: &Cli,
    args: &DeleteAssetArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = format!(
        "Remove asset '{}' from deployment {}?",
        args.dns_name, args.deployment_id
    );
    if !confirm_destructive(&prompt, "remove asset", args.yes, cli.batch)? {
        return Ok(());
    }

    let spinner = create_spinner(&format!("Removing asset '{}'...", args.dns_name), cli.batch);
    let result = client
        .remove_external_dns_name_asset(&args.deployment_id, &args.dns_name)
        .await;
    finish_spinner(spinner);

    let status = result?;
    debug!("Remove asset returned status {}", status);
    println!(
        "✓ Removed asset '{}' from deployment {}",
        args.dns_name, args.deployment_id
    );
    Ok(())
}
