//! AIMS account API operations

use log::debug;
use reqwest::Method;

use crate::api::AlClient;
use crate::config::api;
use crate::error::Result;

use super::models::{AccountDetails, AccountRelationship, UpdateAccountDetailsRequest};

impl AlClient {
    /// Get details of the client's account
    pub async fn get_account_details(&self) -> Result<AccountDetails> {
        let path = self.account_path(api::AIMS, "account");
        self.get_json(&path, &[]).await
    }

    /// Update the client's account; only `mfa_required` can be changed
    pub async fn update_account_details(
        &self,
        request: &UpdateAccountDetailsRequest,
    ) -> Result<AccountDetails> {
        let path = self.account_path(api::AIMS, "account");
        debug!("Setting mfa_required={} on account", request.mfa_required);

        self.send_json(Method::POST, &path, &[], Some(request)).await
    }

    /// Check whether `related_account_id` has `relationship` to the client's account.
    ///
    /// The API answers 204 when the relationship exists and 404 when it does
    /// not; the 404 surfaces as an error carrying that status.
    pub async fn get_account_relationship(
        &self,
        related_account_id: &str,
        relationship: AccountRelationship,
    ) -> Result<u16> {
        let path = self.account_path(
            api::AIMS,
            &format!("accounts/{}/{}", relationship, related_account_id),
        );
        self.send_status::<()>(Method::GET, &path, None).await
    }
}
