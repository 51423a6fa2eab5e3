//! Role output formatter

use super::common::{escape_csv, print_json, print_yaml, yes_no};
use crate::api::roles::{Permissions, Role};
use crate::cli::OutputFormat;
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

/// Serializable role for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableRole<'a> {
    id: &'a str,
    account_id: &'a str,
    name: &'a str,
    global: bool,
    version: i64,
    permissions: &'a Permissions,
    created: String,
    modified: String,
}

impl<'a> From<&'a Role> for SerializableRole<'a> {
    fn from(role: &'a Role) -> Self {
        Self {
            id: &role.id,
            account_id: &role.account_id,
            name: &role.name,
            global: role.global,
            version: role.version,
            permissions: &role.permissions,
            created: role.created.at_rfc3339(),
            modified: role.modified.at_rfc3339(),
        }
    }
}

/// Output roles in the specified format
pub fn output_roles(roles: &[Role], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "NAME", "GLOBAL", "PERMISSIONS", "CREATED"]);
            }
            for role in roles {
                table.add_row(vec![
                    role.id.clone(),
                    role.name.clone(),
                    yes_no(role.global).to_string(),
                    role.permissions.len().to_string(),
                    role.created.at_rfc3339(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,NAME,GLOBAL,PERMISSIONS,CREATED");
            }
            for role in roles {
                println!(
                    "{},{},{},{},{}",
                    escape_csv(&role.id),
                    escape_csv(&role.name),
                    role.global,
                    role.permissions.len(),
                    role.created.at_rfc3339()
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<SerializableRole> = roles.iter().map(Into::into).collect();
            print_json(&rows);
        }
        OutputFormat::Yaml => {
            let rows: Vec<SerializableRole> = roles.iter().map(Into::into).collect();
            print_yaml(&rows);
        }
    }
}

/// Output a single role with every permission on its own row
pub fn output_role(role: &Role, format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => {
            println!("Role:   {} ({})", role.name, role.id);
            println!("Global: {}", yes_no(role.global));
            println!();
            output_permissions(&role.permissions, format, no_header);
        }
        OutputFormat::Csv => output_permissions(&role.permissions, format, no_header),
        OutputFormat::Json => print_json(&SerializableRole::from(role)),
        OutputFormat::Yaml => print_yaml(&SerializableRole::from(role)),
    }
}

/// Output a permission map as PERMISSION/GRANT rows
fn output_permissions(permissions: &Permissions, format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Csv => {
            if !no_header {
                println!("PERMISSION,GRANT");
            }
            for (key, grant) in permissions {
                println!("{},{}", escape_csv(key), grant);
            }
        }
        OutputFormat::Json => print_json(permissions),
        OutputFormat::Yaml => print_yaml(permissions),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["PERMISSION", "GRANT"]);
            }
            for (key, grant) in permissions {
                table.add_row(vec![key.clone(), grant.to_string()]);
            }
            println!("{table}");
        }
    }
}
