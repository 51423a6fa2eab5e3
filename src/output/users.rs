//! User output formatter

use super::common::{escape_csv, print_json, print_yaml, yes_no};
use crate::api::users::User;
use crate::cli::OutputFormat;
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

/// Serializable user for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableUser {
    id: String,
    account_id: String,
    name: String,
    username: String,
    email: String,
    active: bool,
    locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    mfa_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_login: Option<String>,
    created: String,
    modified: String,
}

impl From<&User> for SerializableUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            account_id: user.account_id.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            active: user.active,
            locked: user.locked,
            mfa_enabled: user.mfa_enabled,
            role_ids: user.role_ids.clone(),
            access_key_ids: user
                .access_keys
                .as_ref()
                .map(|keys| keys.iter().map(|k| k.access_key_id.clone()).collect()),
            last_login: user
                .user_credential
                .as_ref()
                .map(|c| crate::api::format_epoch(c.last_login)),
            created: user.created.at_rfc3339(),
            modified: user.modified.at_rfc3339(),
        }
    }
}

/// Output users in the specified format
pub fn output_users(users: &[User], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(users, no_header),
        OutputFormat::Csv => output_csv(users, no_header),
        OutputFormat::Json => {
            let serializable: Vec<SerializableUser> = users.iter().map(Into::into).collect();
            print_json(&serializable);
        }
        OutputFormat::Yaml => {
            let serializable: Vec<SerializableUser> = users.iter().map(Into::into).collect();
            print_yaml(&serializable);
        }
    }
}

/// Output a single user; structured formats print an object, not a list
pub fn output_user(user: &User, format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(&SerializableUser::from(user)),
        OutputFormat::Yaml => print_yaml(&SerializableUser::from(user)),
        _ => output_users(std::slice::from_ref(user), format, no_header),
    }
}

fn roles_cell(user: &User) -> String {
    user.role_ids
        .as_ref()
        .map(|ids| ids.join(" "))
        .unwrap_or_default()
}

fn output_table(users: &[User], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec![
            "ID", "NAME", "EMAIL", "ACTIVE", "LOCKED", "MFA", "ROLES", "CREATED",
        ]);
    }

    for user in users {
        table.add_row(vec![
            user.id.clone(),
            user.name.clone(),
            user.email.clone(),
            yes_no(user.active).to_string(),
            yes_no(user.locked).to_string(),
            user.mfa().to_string(),
            roles_cell(user),
            user.created.at_rfc3339(),
        ]);
    }

    println!("{table}");
}

fn output_csv(users: &[User], no_header: bool) {
    if !no_header {
        println!("ID,NAME,EMAIL,ACTIVE,LOCKED,MFA,ROLES,CREATED");
    }
    for user in users {
        println!("{}", csv_row(user));
    }
}

fn csv_row(user: &User) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        escape_csv(&user.id),
        escape_csv(&user.name),
        escape_csv(&user.email),
        user.active,
        user.locked,
        user.mfa(),
        escape_csv(&roles_cell(user)),
        user.created.at_rfc3339()
    )
}
