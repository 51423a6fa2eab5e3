//! Deployment data models

use serde::{Deserialize, Serialize};

use crate::api::models::{null_default, ModifiedCreated};

/// A deployment: a monitored cloud environment and what of it is in scope
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Deployment {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub account_id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub version: i64,
    #[serde(deserialize_with = "null_default")]
    pub status: Status,
    #[serde(deserialize_with = "null_default")]
    pub scope: Scope,
    pub scan: bool,
    #[serde(deserialize_with = "null_default")]
    pub platform: Platform,
    #[serde(deserialize_with = "null_default")]
    pub mode: String,
    pub enabled: bool,
    pub discover: bool,
    #[serde(deserialize_with = "null_default")]
    pub credentials: Vec<Credential>,
    #[serde(deserialize_with = "null_default")]
    pub cloud_defender: CloudDefender,
    #[serde(deserialize_with = "null_default")]
    pub created: ModifiedCreated,
    #[serde(deserialize_with = "null_default")]
    pub modified: ModifiedCreated,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CloudDefender {
    pub enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub location_id: String,
}

/// Credential attached to a deployment for a given purpose
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Credential {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub purpose: String,
    #[serde(deserialize_with = "null_default")]
    pub version: String,
}

/// Cloud platform a deployment runs on
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Platform {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub platform_type: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub monitor: Monitor,
    pub default: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Monitor {
    pub enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub ct_install_region: String,
}

/// What a deployment protects
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Scope {
    #[serde(deserialize_with = "null_default")]
    pub include: Vec<Include>,
    #[serde(deserialize_with = "null_default")]
    pub exclude: Vec<Exclude>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Include {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub include_type: String,
    #[serde(deserialize_with = "null_default")]
    pub key: String,
    #[serde(deserialize_with = "null_default")]
    pub policy: Policy,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Exclude {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub exclude_type: String,
    #[serde(deserialize_with = "null_default")]
    pub key: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Policy {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Status {
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    pub updated: i64,
}
