//! AIMS role data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::api::models::{null_default, ModifiedCreated};

/// Whether a permission is granted or denied
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Allowed,
    Denied,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Allowed => f.write_str("allowed"),
            Permission::Denied => f.write_str("denied"),
        }
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allowed" | "allow" => Ok(Permission::Allowed),
            "denied" | "deny" => Ok(Permission::Denied),
            _ => Err(format!(
                "Invalid permission value '{}', expected 'allowed' or 'denied'",
                s
            )),
        }
    }
}

/// Permission keys mapped to their grant
pub type Permissions = BTreeMap<String, Permission>;

/// AIMS role
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Role {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub account_id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub permissions: Permissions,
    pub version: i64,
    pub global: bool,
    #[serde(deserialize_with = "null_default")]
    pub legacy_permissions: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub created: ModifiedCreated,
    #[serde(deserialize_with = "null_default")]
    pub modified: ModifiedCreated,
}

/// List of roles
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RolesList {
    #[serde(deserialize_with = "null_default")]
    pub roles: Vec<Role>,
}

/// Request body for creating a role
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRoleRequest {
    pub name: String,
    pub permissions: Permissions,
}

/// Request body for updating a role; unset fields are left unchanged
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub permissions: Option<Permissions>,
}

/// Parse `KEY=allowed|denied` pairs into a permission map.
///
/// The value is whatever follows the last `=`.
pub fn parse_permissions(pairs: &[String]) -> std::result::Result<Permissions, String> {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair
                .rsplit_once('=')
                .ok_or_else(|| format!("Invalid permission '{}', expected KEY=VALUE", pair))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(format!("Invalid permission '{}': empty key", pair));
            }
            Ok((key.to_string(), value.trim().parse::<Permission>()?))
        })
        .collect()
}
