//! AIMS account data models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::models::{null_default, ModifiedCreated};

/// Account details as returned by the account endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AccountDetails {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub active: bool,
    pub version: i64,
    #[serde(deserialize_with = "null_default")]
    pub accessible_locations: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub default_location: String,
    pub mfa_required: bool,
    #[serde(deserialize_with = "null_default")]
    pub created: ModifiedCreated,
    #[serde(deserialize_with = "null_default")]
    pub modified: ModifiedCreated,
}

/// Relationship of one account to another
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountRelationship {
    BillsTo,
    Managed,
    Managing,
}

impl AccountRelationship {
    /// Path segment used by the relationship endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRelationship::BillsTo => "bills_to",
            AccountRelationship::Managed => "managed",
            AccountRelationship::Managing => "managing",
        }
    }
}

impl fmt::Display for AccountRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for updating an account; only MFA can be changed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateAccountDetailsRequest {
    pub mfa_required: bool,
}
