//! External DNS name asset output formatter

use super::common::{escape_csv, print_json, print_yaml, yes_no};
use crate::api::assets::ExternalDnsNameAsset;
use crate::api::format_epoch;
use crate::cli::OutputFormat;
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

/// Serializable asset for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableAsset<'a> {
    dns_name: &'a str,
    key: &'a str,
    deployment_id: &'a str,
    state: &'a str,
    declared: bool,
    threat_level: i64,
    threatiness: f64,
    created_on: String,
    modified_on: String,
}

impl<'a> From<&'a ExternalDnsNameAsset> for SerializableAsset<'a> {
    fn from(asset: &'a ExternalDnsNameAsset) -> Self {
        Self {
            dns_name: &asset.dns_name,
            key: &asset.key,
            deployment_id: &asset.deployment_id,
            state: &asset.state,
            declared: asset.declared,
            threat_level: asset.threat_level,
            threatiness: asset.threatiness,
            created_on: format_epoch(asset.created_on),
            modified_on: format_epoch(asset.modified_on),
        }
    }
}

/// Output external DNS name assets in the specified format
pub fn output_assets(assets: &[&ExternalDnsNameAsset], format: OutputFormat, no_header: bool) {
    let rows: Vec<SerializableAsset> = assets.iter().map(|a| SerializableAsset::from(*a)).collect();

    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec![
                    "DNS NAME", "DEPLOYMENT", "STATE", "DECLARED", "THREAT", "MODIFIED",
                ]);
            }
            for row in &rows {
                table.add_row(vec![
                    row.dns_name.to_string(),
                    row.deployment_id.to_string(),
                    row.state.to_string(),
                    yes_no(row.declared).to_string(),
                    row.threat_level.to_string(),
                    row.modified_on.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("DNS_NAME,DEPLOYMENT_ID,STATE,DECLARED,THREAT_LEVEL,MODIFIED");
            }
            for row in &rows {
                println!(
                    "{},{},{},{},{},{}",
                    escape_csv(row.dns_name),
                    escape_csv(row.deployment_id),
                    escape_csv(row.state),
                    row.declared,
                    row.threat_level,
                    row.modified_on
                );
            }
        }
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Yaml => print_yaml(&rows),
    }
}
