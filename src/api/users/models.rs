//! AIMS user and authentication data models

use serde::{Deserialize, Serialize};

use crate::api::models::{is_false, null_default, ModifiedCreated};

/// Response from the authenticate endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AuthenticateResponse {
    pub authentication: Authentication,
}

/// Authentication information: who logged in, for which account, and the token
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Authentication {
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    #[serde(deserialize_with = "null_default")]
    pub account: Account,
    #[serde(deserialize_with = "null_default")]
    pub token: String,
    pub token_expiration: i64,
}

/// Account level information carried in an authentication response
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Account {
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
    #[serde(deserialize_with = "null_default")]
    pub default_esb_location: String,
    #[serde(deserialize_with = "null_default")]
    pub created: ModifiedCreated,
    #[serde(deserialize_with = "null_default")]
    pub modified: ModifiedCreated,
}

/// AIMS user
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub account_id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    pub active: bool,
    pub locked: bool,
    pub version: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub linked_users: Vec<LinkedUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_credential: Option<UserCredential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_keys: Option<Vec<AccessKey>>,
    #[serde(deserialize_with = "null_default")]
    pub created: ModifiedCreated,
    #[serde(deserialize_with = "null_default")]
    pub modified: ModifiedCreated,
}

/// Credential details of a user
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserCredential {
    pub version: i64,
    pub one_time_password: bool,
    pub last_login: i64,
    #[serde(deserialize_with = "null_default")]
    pub created: ModifiedCreated,
    #[serde(deserialize_with = "null_default")]
    pub modified: ModifiedCreated,
}

/// API access key belonging to a user
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccessKey {
    #[serde(deserialize_with = "null_default")]
    pub label: String,
    pub last_login: i64,
    #[serde(deserialize_with = "null_default")]
    pub created: ModifiedCreated,
    #[serde(deserialize_with = "null_default")]
    pub modified: ModifiedCreated,
    #[serde(deserialize_with = "null_default")]
    pub access_key_id: String,
}

/// User linked to another user in a different location
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LinkedUser {
    pub user_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub location: String,
}

/// List of users
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UserList {
    #[serde(deserialize_with = "null_default")]
    pub users: Vec<User>,
}

/// Request body for creating a user
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub role_id: String,
    #[serde(skip_serializing_if = "is_false", default)]
    pub active: bool,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub mobile_phone: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "is_false", default)]
    pub notifications_only: bool,
}

/// Request body for updating a user; same shape as a create
pub type UpdateUserRequest = CreateUserRequest;

/// Extra detail to include in user lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub include_access_keys: bool,
    pub include_user_credential: bool,
    pub include_role_ids: bool,
    /// Only honoured when listing users
    pub role_id: Option<String>,
}

impl UserQuery {
    /// Query including access keys, credentials and role IDs
    pub fn everything() -> Self {
        Self {
            include_access_keys: true,
            include_user_credential: true,
            include_role_ids: true,
            role_id: None,
        }
    }

    /// Restrict a user listing to members of a role
    pub fn with_role(mut self, role_id: &str) -> Self {
        self.role_id = Some(role_id.to_string());
        self
    }

    /// The include flags are always sent, explicitly true or false
    pub(crate) fn params(&self, with_role: bool) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("include_access_keys", self.include_access_keys.to_string()),
            (
                "include_user_credential",
                self.include_user_credential.to_string(),
            ),
            ("include_role_ids", self.include_role_ids.to_string()),
        ];
        if with_role {
            if let Some(role_id) = self.role_id.as_deref().filter(|r| !r.is_empty()) {
                params.push(("role_id", role_id.to_string()));
            }
        }
        params
    }
}

impl User {
    /// Whether MFA is enabled, shown as text
    pub fn mfa(&self) -> &str {
        match self.mfa_enabled {
            Some(true) => "yes",
            Some(false) => "no",
            None => "",
        }
    }
}
