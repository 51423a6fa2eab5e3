//! Deployment command handlers

use log::debug;

use crate::api::AlClient;
use crate::cli::{Cli, DeploymentArgs, OutputArgs};
use crate::output::{output_deployment, output_deployments};
use crate::ui::{create_spinner, finish_spinner};

/// Run the get deployments command
pub async fn run_get_deployments_command(
    client: &AlClient,
    cli: &Cli,
    args: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching deployments...", cli.batch);
    let result = client.list_deployments().await;
    finish_spinner(spinner);

    let deployments = result?;
    debug!("Fetched {} deployment(s)", deployments.len());
    output_deployments(&deployments, args.output, cli.no_header);
    Ok(())
}

/// Run the get deployment command
pub async fn run_get_deployment_command(
    client: &AlClient,
    cli: &Cli,
    args: &DeploymentArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Fetching deployment '{}'...", args.id), cli.batch);
    let result = client.get_deployment(&args.id).await;
    finish_spinner(spinner);

    output_deployment(&result?, args.output, cli.no_header);
    Ok(())
}
