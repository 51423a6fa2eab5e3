//! AIMS user and authentication API operations

use log::debug;
use reqwest::Method;

use crate::api::AlClient;
use crate::config::api;
use crate::error::{AlError, Result};

use super::models::{AuthenticateResponse, CreateUserRequest, UpdateUserRequest, User, UserList, UserQuery};

const ONE_TIME_PASSWORD_ERROR: &str =
    "oneTimePassword must be accompanied by CreateUserRequest.Password";

/// Query for the one-time password flag; empty when not requested
fn one_time_password_query(
    password: &str,
    one_time_password: bool,
) -> Result<Vec<(&'static str, String)>> {
    if !one_time_password {
        return Ok(Vec::new());
    }
    if password.is_empty() {
        return Err(AlError::InvalidRequest(ONE_TIME_PASSWORD_ERROR.to_string()));
    }
    Ok(vec![("one_time_password", "true".to_string())])
}

impl AlClient {
    /// Authenticate and return a token plus user and account details.
    ///
    /// The username/password and access key constructors already call this
    /// and keep the token; call it directly only to inspect the response.
    pub async fn authenticate(&self) -> Result<AuthenticateResponse> {
        let path = format!("{}/authenticate", api::AIMS);
        self.send_json::<AuthenticateResponse, ()>(Method::POST, &path, &[], None)
            .await
    }

    /// Create a user.
    ///
    /// With `one_time_password` the supplied password must be changed at
    /// first login. Without a password the user is e-mailed a link to set
    /// one.
    pub async fn create_user(
        &self,
        user: &CreateUserRequest,
        one_time_password: bool,
    ) -> Result<User> {
        let query = one_time_password_query(&user.password, one_time_password)?;
        let path = self.account_path(api::AIMS, "users");
        debug!("Creating user {}", user.email);

        self.send_json(Method::POST, &path, &query, Some(user)).await
    }

    /// Delete a user, returning the status code.
    ///
    /// The API answers 204 even for unknown IDs; deleting the user that owns
    /// the current token is rejected with 400.
    pub async fn delete_user(&self, user_id: &str) -> Result<u16> {
        let path = self.account_path(api::AIMS, &format!("users/{}", user_id));
        debug!("Deleting user {}", user_id);

        self.send_status::<()>(Method::DELETE, &path, None).await
    }

    /// List users with a given e-mail address across accounts
    pub async fn list_users_by_email(&self, email: &str, query: &UserQuery) -> Result<UserList> {
        let path = format!(
            "{}/users/email/{}",
            api::AIMS,
            urlencoding::encode(email)
        );
        self.get_json(&path, &query.params(false)).await
    }

    /// Get a user by ID without knowing its account
    pub async fn get_user_details_by_id(&self, user_id: &str, query: &UserQuery) -> Result<User> {
        let path = format!("{}/user/{}", api::AIMS, user_id);
        self.get_json(&path, &query.params(false)).await
    }

    /// Get a user of this account by ID
    pub async fn get_user_details(&self, user_id: &str, query: &UserQuery) -> Result<User> {
        let path = self.account_path(api::AIMS, &format!("users/{}", user_id));
        self.get_json(&path, &query.params(false)).await
    }

    /// List users of this account, optionally only members of `query.role_id`
    pub async fn list_users(&self, query: &UserQuery) -> Result<UserList> {
        let path = self.account_path(api::AIMS, "users");
        self.get_json(&path, &query.params(true)).await
    }

    /// Update a user; the one-time password rule is the same as for create
    pub async fn update_user_details(
        &self,
        user_id: &str,
        user: &UpdateUserRequest,
        one_time_password: bool,
    ) -> Result<User> {
        let query = one_time_password_query(&user.password, one_time_password)?;
        let path = self.account_path(api::AIMS, &format!("users/{}", user_id));
        debug!("Updating user {}", user_id);

        self.send_json(Method::POST, &path, &query, Some(user)).await
    }

    /// Get a user by username
    pub async fn get_user_details_by_username(
        &self,
        username: &str,
        query: &UserQuery,
    ) -> Result<User> {
        let path = format!("{}/user/username/{}", api::AIMS, username);
        self.get_json(&path, &query.params(false)).await
    }
}
