//! Asset query and write API operations

use log::debug;
use reqwest::Method;

use crate::api::AlClient;
use crate::config::api;
use crate::error::Result;

use super::models::{ExternalDnsAssetRequest, ExternalDnsNameAssets, EXTERNAL_DNS_NAME};

impl AlClient {
    fn deployment_assets_path(&self, deployment_id: &str) -> String {
        self.account_path(
            api::ASSETS_WRITE,
            &format!("deployments/{}/assets", deployment_id),
        )
    }

    /// Get all external DNS name assets of the client's account
    pub async fn get_external_dns_name_assets(&self) -> Result<ExternalDnsNameAssets> {
        let path = self.account_path(api::ASSETS_QUERY, "assets");
        let query = [("asset_types", format!("e:{}", EXTERNAL_DNS_NAME))];
        self.get_json(&path, &query).await
    }

    /// Declare an external DNS name asset in a deployment, returning the status code
    pub async fn create_external_dns_name_asset(
        &self,
        deployment_id: &str,
        dns_name: &str,
    ) -> Result<u16> {
        debug!("Declaring asset {} in deployment {}", dns_name, deployment_id);
        let request = ExternalDnsAssetRequest::declare(dns_name, None);
        self.send_status(Method::PUT, &self.deployment_assets_path(deployment_id), Some(&request))
            .await
    }

    /// Rename an external DNS name asset from `old_dns_name` to `dns_name`
    pub async fn update_external_dns_name_asset(
        &self,
        deployment_id: &str,
        dns_name: &str,
        old_dns_name: &str,
    ) -> Result<u16> {
        debug!(
            "Redeclaring asset {} as {} in deployment {}",
            old_dns_name, dns_name, deployment_id
        );
        let request = ExternalDnsAssetRequest::declare(dns_name, Some(old_dns_name));
        self.send_status(Method::PUT, &self.deployment_assets_path(deployment_id), Some(&request))
            .await
    }

    /// Remove an external DNS name asset from a deployment
    pub async fn remove_external_dns_name_asset(
        &self,
        deployment_id: &str,
        dns_name: &str,
    ) -> Result<u16> {
        debug!("Removing asset {} from deployment {}", dns_name, deployment_id);
        let request = ExternalDnsAssetRequest::remove(dns_name);
        self.send_status(Method::PUT, &self.deployment_assets_path(deployment_id), Some(&request))
            .await
    }
}
