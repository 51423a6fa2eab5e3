//! Role assignment API operations

use log::debug;
use reqwest::Method;

use crate::api::roles::RolesList;
use crate::api::AlClient;
use crate::config::api;
use crate::error::Result;

use super::models::{PermissionsList, RoleIdsList};

impl AlClient {
    fn user_path(&self, user_id: &str, rest: &str) -> String {
        self.account_path(api::AIMS, &format!("users/{}/{}", user_id, rest))
    }

    /// Get all roles assigned to a user
    pub async fn get_assigned_roles(&self, user_id: &str) -> Result<RolesList> {
        self.get_json(&self.user_path(user_id, "roles"), &[]).await
    }

    /// Get the IDs of all roles assigned to a user
    pub async fn get_assigned_role_ids(&self, user_id: &str) -> Result<RoleIdsList> {
        self.get_json(&self.user_path(user_id, "role_ids"), &[])
            .await
    }

    /// Get all permissions a user holds through its roles
    pub async fn get_user_permissions(&self, user_id: &str) -> Result<PermissionsList> {
        self.get_json(&self.user_path(user_id, "permissions"), &[])
            .await
    }

    /// Grant a role to a user, returning the status code
    pub async fn grant_user_role(&self, user_id: &str, role_id: &str) -> Result<u16> {
        let path = self.user_path(user_id, &format!("roles/{}", role_id));
        debug!("Granting role {} to user {}", role_id, user_id);

        self.send_status::<()>(Method::PUT, &path, None).await
    }

    /// Revoke a role from a user, returning the status code
    pub async fn revoke_user_role(&self, user_id: &str, role_id: &str) -> Result<u16> {
        let path = self.user_path(user_id, &format!("roles/{}", role_id));
        debug!("Revoking role {} from user {}", role_id, user_id);

        self.send_status::<()>(Method::DELETE, &path, None).await
    }
}
