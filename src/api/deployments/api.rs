//! Deployment API operations

use crate::api::AlClient;
use crate::config::api;
use crate::error::Result;

use super::models::Deployment;

impl AlClient {
    /// List deployments of the client's account
    pub async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        let path = self.account_path(api::DEPLOYMENTS, "deployments");
        self.get_json(&path, &[]).await
    }

    /// Get a deployment by ID
    pub async fn get_deployment(&self, deployment_id: &str) -> Result<Deployment> {
        let path = self.account_path(api::DEPLOYMENTS, &format!("deployments/{}", deployment_id));
        self.get_json(&path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::deployments::models::{
        CloudDefender, Credential, Exclude, Include, Monitor, Platform, Policy, Scope, Status,
    };
    use crate::api::models::ModifiedCreated;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DEPLOYMENT_ID: &str = "50668317-feb8-49d1-b401-7219bfa22417";

    fn aws_deployment_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "account_id": "01000001",
            "name": "AWS Production Deployment",
            "platform": {
                "type": "aws",
                "id": "111111111111",
                "monitor": {"enabled": true, "ct_install_region": "us-east-1"}
            },
            "mode": "automatic",
            "enabled": true,
            "discover": true,
            "scan": true,
            "scope": {
                "include": [
                    {"type": "region", "key": "/aws/us-east-1"},
                    {
                        "type": "vpc",
                        "key": "/aws/us-west-1/vpc/vpc-12345678",
                        "policy": {"id": "D12D5E67-166C-474F-87AA-6F86FC9FB9BC"}
                    }
                ],
                "exclude": [{"type": "region", "key": "/aws/ap-southeast-1"}]
            },
            "cloud_defender": {"enabled": true, "location_id": "defender-us-denver"},
            "credentials": [{
                "id": "E09F0AF8-18F8-49CE-B9AC-01C3E214B4EB",
                "purpose": "discover",
                "version": "2018-01-01"
            }],
            "status": {"status": "ok", "updated": 1493671342},
            "created": {"at": 1496673172, "by": "BBCAE827-22A6-433D-884E-22AABF2DC82B"},
            "modified": {"at": 1496673245, "by": "1443C74F-2AF7-4D7F-BF4A-FDFFE9C67182"},
            "version": 2
        })
    }

    fn aws_deployment(id: &str) -> Deployment {
        Deployment {
            id: id.to_string(),
            account_id: "01000001".to_string(),
            name: "AWS Production Deployment".to_string(),
            version: 2,
            status: Status {
                status: "ok".to_string(),
                updated: 1493671342,
            },
            scope: Scope {
                include: vec![
                    Include {
                        include_type: "region".to_string(),
                        key: "/aws/us-east-1".to_string(),
                        policy: Policy::default(),
                    },
                    Include {
                        include_type: "vpc".to_string(),
                        key: "/aws/us-west-1/vpc/vpc-12345678".to_string(),
                        policy: Policy {
                            id: "D12D5E67-166C-474F-87AA-6F86FC9FB9BC".to_string(),
                        },
                    },
                ],
                exclude: vec![Exclude {
                    exclude_type: "region".to_string(),
                    key: "/aws/ap-southeast-1".to_string(),
                }],
            },
            scan: true,
            platform: Platform {
                platform_type: "aws".to_string(),
                id: "111111111111".to_string(),
                monitor: Monitor {
                    enabled: true,
                    ct_install_region: "us-east-1".to_string(),
                },
                default: false,
            },
            mode: "automatic".to_string(),
            enabled: true,
            discover: true,
            credentials: vec![Credential {
                id: "E09F0AF8-18F8-49CE-B9AC-01C3E214B4EB".to_string(),
                purpose: "discover".to_string(),
                version: "2018-01-01".to_string(),
            }],
            cloud_defender: CloudDefender {
                enabled: true,
                location_id: "defender-us-denver".to_string(),
            },
            created: ModifiedCreated {
                at: 1496673172,
                by: "BBCAE827-22A6-433D-884E-22AABF2DC82B".to_string(),
            },
            modified: ModifiedCreated {
                at: 1496673245,
                by: "1443C74F-2AF7-4D7F-BF4A-FDFFE9C67182".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_list_deployments() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deployments/v1/12345678/deployments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                aws_deployment_json("AF50CF2D-3E77-46E3-B003-0262D77B2A65"),
                {
                    "id": "86975343-2DA7-4E77-9F52-8488C4217191",
                    "account_id": "01000001",
                    "name": "Azure Production Deployment",
                    "platform": {"type": "azure", "id": "93B0107D-21AD-48B0-9101-C60F20E09966"},
                    "mode": "manual",
                    "enabled": true
                }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let deployments = client.list_deployments().await.unwrap();

        assert_eq!(deployments.len(), 2);
        assert_eq!(
            deployments[0],
            aws_deployment("AF50CF2D-3E77-46E3-B003-0262D77B2A65")
        );
        assert_eq!(deployments[1].platform.platform_type, "azure");
        assert_eq!(deployments[1].mode, "manual");
        assert!(deployments[1].scope.include.is_empty());
        assert!(!deployments[1].platform.monitor.enabled);
    }

    #[tokio::test]
    async fn test_list_deployments_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deployments/v1/12345678/deployments"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        assert!(client.list_deployments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_deployments_service_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deployments/v1/12345678/deployments"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let err = client.list_deployments().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "error from makeRequest: HTTP status 503: service failure"
        );
    }

    #[tokio::test]
    async fn test_get_deployment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!(
                "/deployments/v1/12345678/deployments/{}",
                DEPLOYMENT_ID
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(aws_deployment_json(DEPLOYMENT_ID)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let deployment = client.get_deployment(DEPLOYMENT_ID).await.unwrap();

        assert_eq!(deployment, aws_deployment(DEPLOYMENT_ID));
    }

    #[tokio::test]
    async fn test_get_deployment_unmarshal_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!(
                "/deployments/v1/12345678/deployments/{}",
                DEPLOYMENT_ID
            )))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let err = client.get_deployment(DEPLOYMENT_ID).await.unwrap_err();

        assert!(err
            .to_string()
            .starts_with("error unmarshalling the JSON response: "));
    }
}
