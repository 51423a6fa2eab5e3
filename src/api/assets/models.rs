//! Asset data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::models::null_default;

/// Asset type of external DNS names
pub const EXTERNAL_DNS_NAME: &str = "external-dns-name";

/// Scope external DNS name assets are declared in
pub const AWS_SCOPE: &str = "aws";

/// Result of an assets query: a row count and one group of assets per row
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExternalDnsNameAssets {
    pub rows: i64,
    #[serde(deserialize_with = "null_default")]
    pub assets: Vec<Vec<ExternalDnsNameAsset>>,
}

impl ExternalDnsNameAssets {
    /// All assets across rows
    pub fn iter(&self) -> impl Iterator<Item = &ExternalDnsNameAsset> {
        self.assets.iter().flatten()
    }
}

/// An external DNS name asset
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExternalDnsNameAsset {
    pub version: i64,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub asset_type: String,
    pub threatiness: f64,
    pub threat_level: i64,
    #[serde(deserialize_with = "null_default")]
    pub tags: BTreeMap<String, serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub tag_keys: BTreeMap<String, serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    #[serde(deserialize_with = "null_default")]
    pub scope_external_scan_request_id: String,
    pub scope_external_last_external_scan_time: i64,
    pub scope_external_last_dequeue_time: i64,
    pub scope_external_heartbeat: i64,
    #[serde(deserialize_with = "null_default")]
    pub scope_aws_state: String,
    #[serde(deserialize_with = "null_default")]
    pub scope_aws_name: String,
    #[serde(deserialize_with = "null_default")]
    pub scope_aws_dns_name: String,
    #[serde(deserialize_with = "null_default")]
    pub native_type: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Epoch milliseconds
    pub modified_on: i64,
    #[serde(deserialize_with = "null_default")]
    pub key: String,
    #[serde(deserialize_with = "null_default")]
    pub dns_name: String,
    #[serde(deserialize_with = "null_default")]
    pub deployment_id: String,
    pub deleted_on: i64,
    pub declared: bool,
    /// Epoch milliseconds
    pub created_on: i64,
    #[serde(deserialize_with = "null_default")]
    pub account_id: String,
}

/// Asset write request
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalDnsAssetRequest {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub operation: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub asset_type: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub scope: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub properties: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub relationships: Vec<Relationship>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub key: String,
}

/// Relationship of an asset to another asset
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationship {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub key: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub relationship_type: String,
}

impl ExternalDnsAssetRequest {
    fn for_key(operation: &str, key_dns_name: &str) -> Self {
        Self {
            operation: operation.to_string(),
            asset_type: EXTERNAL_DNS_NAME.to_string(),
            scope: AWS_SCOPE.to_string(),
            key: format!("/{}/{}", EXTERNAL_DNS_NAME, key_dns_name),
            ..Default::default()
        }
    }

    /// Declare `dns_name`, keyed by `old_dns_name` when renaming
    pub fn declare(dns_name: &str, old_dns_name: Option<&str>) -> Self {
        let key_dns_name = old_dns_name.filter(|o| !o.is_empty()).unwrap_or(dns_name);
        let mut request = Self::for_key("declare_asset", key_dns_name);
        request.properties = BTreeMap::from([
            ("dns_name".to_string(), dns_name.to_string()),
            ("name".to_string(), dns_name.to_string()),
            ("state".to_string(), "new".to_string()),
        ]);
        request
    }

    /// Remove the asset declared for `dns_name`
    pub fn remove(dns_name: &str) -> Self {
        Self::for_key("remove_asset", dns_name)
    }
}
