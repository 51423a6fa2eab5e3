//! AIMS role API operations

use log::debug;
use reqwest::Method;

use crate::api::AlClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateRoleRequest, Role, RolesList, UpdateRoleRequest};

impl AlClient {
    /// List roles of the client's account
    pub async fn list_roles(&self) -> Result<RolesList> {
        let path = self.account_path(api::AIMS, "roles");
        self.get_json(&path, &[]).await
    }

    /// List global roles shared by all accounts
    pub async fn list_global_roles(&self) -> Result<RolesList> {
        self.get_json(&format!("{}/roles", api::AIMS), &[]).await
    }

    /// Get a role of the client's account
    pub async fn get_role_details(&self, role_id: &str) -> Result<Role> {
        let path = self.account_path(api::AIMS, &format!("roles/{}", role_id));
        self.get_json(&path, &[]).await
    }

    /// Get a global role
    pub async fn get_global_role_details(&self, role_id: &str) -> Result<Role> {
        self.get_json(&format!("{}/roles/{}", api::AIMS, role_id), &[])
            .await
    }

    /// Create a role in the client's account
    pub async fn create_role(&self, request: &CreateRoleRequest) -> Result<Role> {
        let path = self.account_path(api::AIMS, "roles");
        debug!(
            "Creating role '{}' with {} permission(s)",
            request.name,
            request.permissions.len()
        );

        self.send_json(Method::POST, &path, &[], Some(request)).await
    }

    /// Update a role; fields left unset keep their current value
    pub async fn update_role_details(
        &self,
        role_id: &str,
        request: &UpdateRoleRequest,
    ) -> Result<Role> {
        let path = self.account_path(api::AIMS, &format!("roles/{}", role_id));
        debug!("Updating role {}", role_id);

        self.send_json(Method::POST, &path, &[], Some(request)).await
    }

    /// Delete a role, returning the status code
    pub async fn delete_role(&self, role_id: &str) -> Result<u16> {
        let path = self.account_path(api::AIMS, &format!("roles/{}", role_id));
        debug!("Deleting role {}", role_id);

        self.send_status::<()>(Method::DELETE, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ModifiedCreated;
    use crate::api::roles::models::{Permission, Permissions};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ROLE_ID: &str = "F578CCE5-9574-4489-BF05-A04075838DE3";

    fn perms(pairs: &[(&str, Permission)]) -> Permissions {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    fn system() -> ModifiedCreated {
        ModifiedCreated {
            at: 1430184599,
            by: "System".to_string(),
        }
    }

    fn read_only_json(account_id: &str, global: bool) -> serde_json::Value {
        serde_json::json!({
            "id": ROLE_ID,
            "account_id": account_id,
            "name": "Read Only",
            "permissions": {
                "*:own:list:*": "allowed",
                "*:own:get:*": "allowed"
            },
            "legacy_permissions": ["PERM1", "PERM2"],
            "version": 1,
            "global": global,
            "created": {"at": 1430184599, "by": "System"},
            "modified": {"at": 1430184599, "by": "System"}
        })
    }

    fn read_only(account_id: &str, global: bool) -> Role {
        Role {
            id: ROLE_ID.to_string(),
            account_id: account_id.to_string(),
            name: "Read Only".to_string(),
            permissions: perms(&[
                ("*:own:list:*", Permission::Allowed),
                ("*:own:get:*", Permission::Allowed),
            ]),
            version: 1,
            global,
            legacy_permissions: vec!["PERM1".to_string(), "PERM2".to_string()],
            created: system(),
            modified: system(),
        }
    }

    fn power_user_json() -> serde_json::Value {
        serde_json::json!({
            "id": "2A33175D-86EF-44B5-AA39-C9549F6306DF",
            "account_id": "12345678",
            "name": "Power User",
            "permissions": {
                "aims:own:create:*": "denied",
                "*:own:*:*": "allowed"
            },
            "legacy_permissions": [],
            "version": 1,
            "global": false,
            "created": {"at": 1430184599, "by": "System"},
            "modified": {"at": 1430184599, "by": "System"}
        })
    }

    #[tokio::test]
    async fn test_list_roles() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aims/v1/12345678/roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "roles": [read_only_json("12345678", false), power_user_json()]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let roles = client.list_roles().await.unwrap();

        assert_eq!(roles.roles.len(), 2);
        assert_eq!(roles.roles[0], read_only("12345678", false));
        assert_eq!(roles.roles[1].name, "Power User");
        assert_eq!(
            roles.roles[1].permissions,
            perms(&[
                ("aims:own:create:*", Permission::Denied),
                ("*:own:*:*", Permission::Allowed),
            ])
        );
        assert!(roles.roles[1].legacy_permissions.is_empty());
    }

    #[tokio::test]
    async fn test_list_global_roles() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aims/v1/roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "roles": [read_only_json("*", true)]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let roles = client.list_global_roles().await.unwrap();

        assert_eq!(roles.roles, vec![read_only("*", true)]);
    }

    #[tokio::test]
    async fn test_get_role_details() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/aims/v1/12345678/roles/{}", ROLE_ID)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(read_only_json("12345678", false)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let role = client.get_role_details(ROLE_ID).await.unwrap();

        assert_eq!(role, read_only("12345678", false));
    }

    #[tokio::test]
    async fn test_get_global_role_details() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/aims/v1/roles/{}", ROLE_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(read_only_json("*", true)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let role = client.get_global_role_details(ROLE_ID).await.unwrap();

        assert_eq!(role, read_only("*", true));
    }

    #[tokio::test]
    async fn test_get_role_details_forbidden() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/aims/v1/12345678/roles/{}", ROLE_ID)))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let err = client.get_role_details(ROLE_ID).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "error from makeRequest: HTTP status 403: insufficient permissions"
        );
    }

    #[tokio::test]
    async fn test_create_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/aims/v1/12345678/roles"))
            .and(body_json(serde_json::json!({
                "name": "Read Only",
                "permissions": {
                    "*:own:list:*": "allowed",
                    "*:own:get:*": "allowed"
                }
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(read_only_json("12345678", false)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let request = CreateRoleRequest {
            name: "Read Only".to_string(),
            permissions: perms(&[
                ("*:own:list:*", Permission::Allowed),
                ("*:own:get:*", Permission::Allowed),
            ]),
        };
        let role = client.create_role(&request).await.unwrap();

        assert_eq!(role, read_only("12345678", false));
    }

    #[tokio::test]
    async fn test_update_role_details() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/aims/v1/12345678/roles/{}", ROLE_ID)))
            .and(body_json(serde_json::json!({
                "permissions": {"*:own:*:*": "allowed"}
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(read_only_json("12345678", false)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let request = UpdateRoleRequest {
            name: None,
            permissions: Some(perms(&[("*:own:*:*", Permission::Allowed)])),
        };
        let role = client.update_role_details(ROLE_ID, &request).await.unwrap();

        assert_eq!(role.id, ROLE_ID);
    }

    #[tokio::test]
    async fn test_delete_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(format!("/aims/v1/12345678/roles/{}", ROLE_ID)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        assert_eq!(client.delete_role(ROLE_ID).await.unwrap(), 204);
    }

    #[tokio::test]
    async fn test_delete_role_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(format!("/aims/v1/12345678/roles/{}", ROLE_ID)))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not_found"}"#))
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let err = client.delete_role(ROLE_ID).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            r#"error from makeRequest: HTTP status 404: content "{\"error\":\"not_found\"}""#
        );
    }
}
