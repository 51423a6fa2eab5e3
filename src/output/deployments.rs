//! Deployment output formatter

use super::common::{escape_csv, print_json, print_yaml, yes_no};
use crate::api::deployments::Deployment;
use crate::cli::OutputFormat;
use comfy_table::{presets::NOTHING, Table};

/// Scope summary such as "2 included, 1 excluded"
fn scope_summary(deployment: &Deployment) -> String {
    format!(
        "{} included, {} excluded",
        deployment.scope.include.len(),
        deployment.scope.exclude.len()
    )
}

/// Output deployments in the specified format
///
/// Structured formats print the full deployment documents.
pub fn output_deployments(deployments: &[Deployment], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec![
                    "ID", "NAME", "PLATFORM", "PLATFORM ID", "MODE", "ENABLED", "STATUS", "SCOPE",
                ]);
            }
            for d in deployments {
                table.add_row(vec![
                    d.id.clone(),
                    d.name.clone(),
                    d.platform.platform_type.clone(),
                    d.platform.id.clone(),
                    d.mode.clone(),
                    yes_no(d.enabled).to_string(),
                    d.status.status.clone(),
                    scope_summary(d),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,NAME,PLATFORM,PLATFORM_ID,MODE,ENABLED,STATUS");
            }
            for d in deployments {
                println!(
                    "{},{},{},{},{},{},{}",
                    escape_csv(&d.id),
                    escape_csv(&d.name),
                    escape_csv(&d.platform.platform_type),
                    escape_csv(&d.platform.id),
                    escape_csv(&d.mode),
                    d.enabled,
                    escape_csv(&d.status.status)
                );
            }
        }
        OutputFormat::Json => print_json(deployments),
        OutputFormat::Yaml => print_yaml(deployments),
    }
}

/// Output a single deployment, including its scope entries in table form
pub fn output_deployment(deployment: &Deployment, format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(deployment),
        OutputFormat::Yaml => print_yaml(deployment),
        OutputFormat::Csv => output_deployments(std::slice::from_ref(deployment), format, no_header),
        OutputFormat::Table => {
            output_deployments(std::slice::from_ref(deployment), format, no_header);

            if deployment.scope.include.is_empty() && deployment.scope.exclude.is_empty() {
                return;
            }

            println!();
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["SCOPE", "TYPE", "KEY", "POLICY"]);
            }
            for include in &deployment.scope.include {
                table.add_row(vec![
                    "include",
                    include.include_type.as_str(),
                    include.key.as_str(),
                    include.policy.id.as_str(),
                ]);
            }
            for exclude in &deployment.scope.exclude {
                table.add_row(vec![
                    "exclude",
                    exclude.exclude_type.as_str(),
                    exclude.key.as_str(),
                    "",
                ]);
            }
            println!("{table}");
        }
    }
}
