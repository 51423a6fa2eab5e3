//! Account and identity output formatter

use super::common::{escape_csv, print_json, print_yaml, yes_no};
use crate::api::accounts::AccountDetails;
use crate::api::format_epoch;
use crate::api::users::Authentication;
use crate::cli::OutputFormat;
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

/// Serializable account for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableAccount<'a> {
    id: &'a str,
    name: &'a str,
    active: bool,
    mfa_required: bool,
    default_location: &'a str,
    accessible_locations: &'a [String],
    created: String,
    modified: String,
}

impl<'a> From<&'a AccountDetails> for SerializableAccount<'a> {
    fn from(account: &'a AccountDetails) -> Self {
        Self {
            id: &account.id,
            name: &account.name,
            active: account.active,
            mfa_required: account.mfa_required,
            default_location: &account.default_location,
            accessible_locations: &account.accessible_locations,
            created: account.created.at_rfc3339(),
            modified: account.modified.at_rfc3339(),
        }
    }
}

/// Identity shown by `whoami`; the token itself is never printed
#[derive(Serialize)]
struct SerializableIdentity<'a> {
    user_id: &'a str,
    user_name: &'a str,
    email: &'a str,
    account_id: &'a str,
    account_name: &'a str,
    default_location: &'a str,
    token_expiration: String,
}

impl<'a> From<&'a Authentication> for SerializableIdentity<'a> {
    fn from(auth: &'a Authentication) -> Self {
        Self {
            user_id: &auth.user.id,
            user_name: &auth.user.name,
            email: &auth.user.email,
            account_id: &auth.account.id,
            account_name: &auth.account.name,
            default_location: &auth.account.default_location,
            token_expiration: format_epoch(auth.token_expiration),
        }
    }
}

/// Output account details in the specified format
pub fn output_account(account: &AccountDetails, format: OutputFormat, no_header: bool) {
    let row = SerializableAccount::from(account);
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            if !no_header {
                table.set_header(vec!["ID", "NAME", "ACTIVE", "MFA REQUIRED", "LOCATION", "CREATED"]);
            }
            table.add_row(vec![
                row.id.to_string(),
                row.name.to_string(),
                yes_no(row.active).to_string(),
                yes_no(row.mfa_required).to_string(),
                row.default_location.to_string(),
                row.created.clone(),
            ]);
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("ID,NAME,ACTIVE,MFA_REQUIRED,LOCATION,CREATED");
            }
            println!(
                "{},{},{},{},{},{}",
                escape_csv(row.id),
                escape_csv(row.name),
                row.active,
                row.mfa_required,
                escape_csv(row.default_location),
                row.created
            );
        }
        OutputFormat::Json => print_json(&row),
        OutputFormat::Yaml => print_yaml(&row),
    }
}

/// Output the authenticated identity in the specified format
pub fn output_identity(auth: &Authentication, format: OutputFormat, no_header: bool) {
    let identity = SerializableIdentity::from(auth);
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            let rows = [
                ("User ID:", identity.user_id),
                ("Name:", identity.user_name),
                ("Email:", identity.email),
                ("Account ID:", identity.account_id),
                ("Account:", identity.account_name),
                ("Location:", identity.default_location),
                ("Token expires:", identity.token_expiration.as_str()),
            ];
            for (label, value) in rows {
                table.add_row(vec![label, value]);
            }
            println!("{table}");
        }
        OutputFormat::Csv => {
            if !no_header {
                println!("USER_ID,NAME,EMAIL,ACCOUNT_ID,ACCOUNT,LOCATION,TOKEN_EXPIRES");
            }
            println!(
                "{},{},{},{},{},{},{}",
                escape_csv(identity.user_id),
                escape_csv(identity.user_name),
                escape_csv(identity.email),
                escape_csv(identity.account_id),
                escape_csv(identity.account_name),
                escape_csv(identity.default_location),
                identity.token_expiration
            );
        }
        OutputFormat::Json => print_json(&identity),
        OutputFormat::Yaml => print_yaml(&identity),
    }
}
