//! Role assignment data models

use serde::{Deserialize, Serialize};

use crate::api::models::null_default;
use crate::api::roles::Permissions;

/// IDs of the roles assigned to a user
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RoleIdsList {
    #[serde(deserialize_with = "null_default")]
    pub role_ids: Vec<String>,
}

/// Effective permissions of a user, one map per granting role
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PermissionsList {
    #[serde(deserialize_with = "null_default")]
    pub permissions: Vec<Permissions>,
}

impl PermissionsList {
    /// Flatten into `(key, grant)` pairs in response order
    pub fn entries(&self) -> impl Iterator<Item = (&str, crate::api::roles::Permission)> {
        self.permissions
            .iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), *v)))
    }
}
