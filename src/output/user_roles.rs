//! Role assignment output formatter

use super::common::{escape_csv, print_json, print_yaml};
use crate::api::user_roles::{PermissionsList, RoleIdsList};
use crate::cli::OutputFormat;
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

#[derive(Serialize)]
struct SerializablePermission<'a> {
    permission: &'a str,
    grant: String,
}

/// Output the role IDs assigned to a user
pub fn output_role_ids(list: &RoleIdsList, format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            if !no_header {
                println!("ROLE ID");
            }
            for id in &list.role_ids {
                println!("{}", escape_csv(id));
            }
        }
        OutputFormat::Json => print_json(list),
        OutputFormat::Yaml => print_yaml(list),
    }
}

/// Output a user's effective permissions.
///
/// Several roles may grant the same key; every grant is shown in response order.
pub fn output_user_permissions(list: &PermissionsList, format: OutputFormat, no_header: bool) {
    let rows: Vec<SerializablePermission> = list
        .entries()
        .map(|(permission, grant)| SerializablePermission {
            permission,
            grant: grant.to_string(),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["PERMISSION", "GRANT"]);
            }
            for row in &rows {
                table.add_row(vec![row.permission, row.grant.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("PERMISSION,GRANT");
            }
            for row in &rows {
                println!("{},{}", escape_csv(row.permission), row.grant);
            }
        }
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Yaml => print_yaml(&rows),
    }
}
