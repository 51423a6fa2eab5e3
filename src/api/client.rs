//! Alert Logic HTTP client and the shared request pipeline

use log::debug;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::api::credentials::Credentials;
use crate::config::api;
use crate::error::{self, AlError, Result};

/// Query parameters for a request, appended in order
pub type Query = [(&'static str, String)];

/// Alert Logic API client
///
/// Holds the account every account-scoped call is made against and whatever
/// credentials were supplied. Username/password (or an access key pair) are
/// exchanged for an AIMS token during construction; the token is then sent
/// with every request.
#[derive(Debug, Clone)]
pub struct AlClient {
    client: Client,
    account_id: String,
    username: Option<String>,
    password: Option<String>,
    api_token: Option<String>,
    base_url: String,
    user_agent: String,
}

impl AlClient {
    fn new(account_id: &str) -> Result<Self> {
        if account_id.is_empty() {
            return Err(AlError::Config(error::EMPTY_ACCOUNT_ID.to_string()));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            account_id: account_id.to_string(),
            username: None,
            password: None,
            api_token: None,
            base_url: api::BASE_URL.to_string(),
            user_agent: format!("alertlogic-rs/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Create a client that authenticates with an existing AIMS token
    pub fn with_api_token(account_id: &str, api_token: &str) -> Result<Self> {
        if api_token.is_empty() {
            return Err(AlError::Config(error::EMPTY_API_TOKEN.to_string()));
        }

        let mut client = Self::new(account_id)?;
        client.api_token = Some(api_token.to_string());
        Ok(client)
    }

    /// Create a client from a username and password and authenticate it.
    ///
    /// The username and password should be an access key and secret key, but
    /// the e-mail and password used for the Alert Logic console also work.
    pub async fn with_username_password(
        account_id: &str,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        if username.is_empty() || password.is_empty() {
            return Err(AlError::Config(
                error::EMPTY_USERNAME_OR_PASSWORD.to_string(),
            ));
        }

        Self::new(account_id)?
            .with_basic_credentials(username, password)
            .bootstrap()
            .await
    }

    /// Create a client from an access key pair and authenticate it
    pub async fn with_access_key(
        account_id: &str,
        access_key_id: &str,
        secret_key: &str,
    ) -> Result<Self> {
        if access_key_id.is_empty() || secret_key.is_empty() {
            return Err(AlError::Config(error::EMPTY_ACCESS_KEY.to_string()));
        }

        Self::new(account_id)?
            .with_basic_credentials(access_key_id, secret_key)
            .bootstrap()
            .await
    }

    /// Build a client from resolved credentials, authenticating when needed
    pub async fn authenticated_from(
        credentials: &Credentials,
        base_url: Option<&str>,
    ) -> Result<Self> {
        let apply_url = |client: Self| match base_url {
            Some(url) => client.with_base_url(url),
            None => client,
        };

        let client = match credentials {
            Credentials::Token {
                account_id,
                api_token,
            } => return Ok(apply_url(Self::with_api_token(account_id, api_token)?)),
            Credentials::AccessKey {
                account_id,
                access_key_id,
                secret_key,
            } => {
                if access_key_id.is_empty() || secret_key.is_empty() {
                    return Err(AlError::Config(error::EMPTY_ACCESS_KEY.to_string()));
                }
                Self::new(account_id)?.with_basic_credentials(access_key_id, secret_key)
            }
            Credentials::Basic {
                account_id,
                username,
                password,
            } => {
                if username.is_empty() || password.is_empty() {
                    return Err(AlError::Config(
                        error::EMPTY_USERNAME_OR_PASSWORD.to_string(),
                    ));
                }
                Self::new(account_id)?.with_basic_credentials(username, password)
            }
        };

        apply_url(client).bootstrap().await
    }

    /// Override the base URL (tests, private endpoints)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    fn with_basic_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    /// Exchange the basic credentials for a token and keep it
    async fn bootstrap(mut self) -> Result<Self> {
        let response = self.authenticate().await?;
        debug!(
            "Authenticated as {} for account {}",
            response.authentication.user.id, self.account_id
        );
        self.api_token = Some(response.authentication.token);
        Ok(self)
    }

    /// Account all account-scoped paths are built for
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Current AIMS token, if any
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a username/password or access key pair is held, so the
    /// client can authenticate again
    pub fn has_basic_credentials(&self) -> bool {
        matches!(
            (&self.username, &self.password),
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty()
        )
    }

    /// Attach authentication headers.
    ///
    /// Basic auth goes out when both username and password are known, the
    /// token header when a token is known. After a username/password
    /// bootstrap both are present and both are sent.
    fn with_auth(&self, mut builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            if !username.is_empty() && !password.is_empty() {
                builder = builder.basic_auth(username, Some(password));
            }
        }
        if let Some(token) = self.api_token.as_deref().filter(|t| !t.is_empty()) {
            builder = builder.header(api::AUTH_TOKEN_HEADER, token);
        }
        builder
    }

    /// Build the request URL for a service-relative path and query
    pub(crate) fn request_url(&self, path: &str, query: &Query) -> String {
        let mut url = format!("{}/{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Make an HTTP request against the API.
    ///
    /// Returns the raw body and status code on any 2xx response. All other
    /// statuses are mapped to an [`AlError`] carrying the status code.
    pub async fn make_request<B>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<(Vec<u8>, u16)>
    where
        B: Serialize + ?Sized,
    {
        let url = self.request_url(path, query);
        debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method, &url)
            .header("User-Agent", &self.user_agent);
        if let Some(payload) = body {
            builder = builder.json(payload);
        }
        builder = self.with_auth(builder);

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?.to_vec();

        debug!("Response status {} ({} bytes)", status, bytes.len());

        if (200..300).contains(&status) {
            Ok((bytes, status))
        } else {
            Err(AlError::from_status(status, &bytes))
        }
    }

    /// Send a request and decode the JSON response body
    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (bytes, _) = self.make_request(method, path, query, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET a path and decode the JSON response body
    pub(crate) async fn get_json<T>(&self, path: &str, query: &Query) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send_json::<T, ()>(Method::GET, path, query, None).await
    }

    /// Send a request whose only interesting outcome is the status code
    pub(crate) async fn send_status<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<u16>
    where
        B: Serialize + ?Sized,
    {
        let (_, status) = self.make_request(method, path, &[], body).await?;
        Ok(status)
    }

    /// Path under a service, scoped to this client's account
    pub(crate) fn account_path(&self, service: &str, rest: &str) -> String {
        if rest.is_empty() {
            format!("{}/{}", service, self.account_id)
        } else {
            format!("{}/{}/{}", service, self.account_id, rest)
        }
    }
}

#[cfg(test)]
impl AlClient {
    /// Create a token-authenticated test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_api_token("12345678", "my_token")
            .unwrap()
            .with_base_url(base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_with_api_token() {
        let client = AlClient::with_api_token("12345678", "abcd1234").unwrap();
        assert_eq!(client.account_id(), "12345678");
        assert_eq!(client.api_token(), Some("abcd1234"));
        assert_eq!(client.base_url(), "https://api.cloudinsight.alertlogic.com");
    }

    #[test]
    fn test_with_api_token_empty_token() {
        let err = AlClient::with_api_token("12345678", "").unwrap_err();
        assert_eq!(err.to_string(), "API token must not be empty");
    }

    #[test]
    fn test_with_api_token_empty_account() {
        let err = AlClient::with_api_token("", "abcd1234").unwrap_err();
        assert_eq!(err.to_string(), "account ID must not be empty");
    }

    #[tokio::test]
    async fn test_with_username_password_missing_credentials() {
        for (username, password) in [("", ""), ("username", ""), ("", "password")] {
            let err = AlClient::with_username_password("12345678", username, password)
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "username or password must not be empty");
        }
    }

    #[tokio::test]
    async fn test_with_username_password_empty_account() {
        let err = AlClient::with_username_password("", "username", "password")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "account ID must not be empty");
    }

    #[tokio::test]
    async fn test_with_access_key_missing_secret() {
        let err = AlClient::with_access_key("12345678", "key", "")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "accessKeyId or secretKey must not be empty");
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let client = AlClient::with_api_token("1", "t")
            .unwrap()
            .with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[test]
    fn test_has_basic_credentials() {
        let client = AlClient::test_client("http://mock");
        assert!(!client.has_basic_credentials());
        assert!(client
            .with_basic_credentials("bob@example.com", "secret")
            .has_basic_credentials());
    }

    #[test]
    fn test_request_url_without_query() {
        let client = AlClient::test_client("http://mock");
        assert_eq!(
            client.request_url("aims/v1/12345678/account", &[]),
            "http://mock/aims/v1/12345678/account"
        );
    }

    #[test]
    fn test_request_url_encodes_query() {
        let client = AlClient::test_client("http://mock");
        let url = client.request_url(
            "assets_query/v1/12345678/assets",
            &[("asset_types", "e:external-dns-name".to_string())],
        );
        assert_eq!(
            url,
            "http://mock/assets_query/v1/12345678/assets?asset_types=e%3Aexternal-dns-name"
        );
    }

    #[test]
    fn test_account_path() {
        let client = AlClient::test_client("http://mock");
        assert_eq!(client.account_path("aims/v1", ""), "aims/v1/12345678");
        assert_eq!(
            client.account_path("aims/v1", "roles"),
            "aims/v1/12345678/roles"
        );
    }

    #[tokio::test]
    async fn test_make_request_sends_token_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aims/v1/12345678/account"))
            .and(header("X-Aims-Auth-Token", "my_token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let (body, status) = client
            .make_request::<()>(Method::GET, "aims/v1/12345678/account", &[], None)
            .await
            .unwrap();

        assert_eq!(status, 200);
        assert_eq!(body, b"{}");
    }

    #[tokio::test]
    async fn test_make_request_sends_query_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .and(query_param("a", "1"))
            .and(query_param("b", "two words"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let (_, status) = client
            .make_request::<()>(
                Method::GET,
                "things",
                &[("a", "1".to_string()), ("b", "two words".to_string())],
                None,
            )
            .await
            .unwrap();

        assert_eq!(status, 204);
    }

    #[tokio::test]
    async fn test_make_request_sends_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/things"))
            .and(header("content-type", "application/json"))
            .and(wiremock::matchers::body_json(serde_json::json!({"k": "v"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let status = client
            .send_status(Method::POST, "things", Some(&serde_json::json!({"k": "v"})))
            .await
            .unwrap();

        assert_eq!(status, 201);
    }

    #[tokio::test]
    async fn test_make_request_status_errors() {
        let cases = [
            (401, "error from makeRequest: HTTP status 401: invalid credentials"),
            (403, "error from makeRequest: HTTP status 403: insufficient permissions"),
            (502, "error from makeRequest: HTTP status 502: service failure"),
            (503, "error from makeRequest: HTTP status 503: service failure"),
            (504, "error from makeRequest: HTTP status 504: service failure"),
            (522, "error from makeRequest: HTTP status 522: service failure"),
            (523, "error from makeRequest: HTTP status 523: service failure"),
            (524, "error from makeRequest: HTTP status 524: service failure"),
            (404, "error from makeRequest: HTTP status 404: content \"\""),
        ];

        for (status, expected) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/status"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&mock_server)
                .await;

            let client = AlClient::test_client(&mock_server.uri());
            let err = client
                .make_request::<()>(Method::GET, "status", &[], None)
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), expected);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[tokio::test]
    async fn test_make_request_bad_request_body_passthrough() {
        let mock_server = MockServer::start().await;
        let body = r#"{"error":"Invalid operation"}"#;

        Mock::given(method("PUT"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(400).set_body_string(body))
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let err = client
            .send_status::<()>(Method::PUT, "status", None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), format!("error from makeRequest: {}", body));
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_make_request_other_status_includes_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(409).set_body_string("already exists"))
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let err = client
            .make_request::<()>(Method::GET, "status", &[], None)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "error from makeRequest: HTTP status 409: content \"already exists\""
        );
    }

    #[tokio::test]
    async fn test_get_json_unmarshal_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = AlClient::test_client(&mock_server.uri());
        let err = client
            .get_json::<serde_json::Value>("json", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, AlError::Json(_)));
        assert!(err
            .to_string()
            .starts_with("error unmarshalling the JSON response: "));
    }

    #[tokio::test]
    async fn test_username_password_bootstrap_stores_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/aims/v1/authenticate"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "authentication": {
                    "user": {"id": "715A4EC0-9833-4D6E-9C03-A537E3F98D23"},
                    "account": {"id": "12345678"},
                    "token": "my_long_token",
                    "token_expiration": 1434042731
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let creds = Credentials::Basic {
            account_id: "12345678".to_string(),
            username: "bob".to_string(),
            password: "secret".to_string(),
        };
        let client = AlClient::authenticated_from(&creds, Some(&mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(client.api_token(), Some("my_long_token"));
    }

    #[tokio::test]
    async fn test_bootstrapped_token_sent_on_later_calls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/aims/v1/authenticate"))
            .and(header("authorization", "Basic Ym9iOnNlY3JldA=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "authentication": {
                    "user": {"id": "715A4EC0-9833-4D6E-9C03-A537E3F98D23"},
                    "account": {"id": "12345678"},
                    "token": "my_long_token"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/aims/v1/12345678/account"))
            .and(header("X-Aims-Auth-Token", "my_long_token"))
            .and(header("authorization", "Basic Ym9iOnNlY3JldA=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "12345678",
                "name": "Company Name"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let creds = Credentials::Basic {
            account_id: "12345678".to_string(),
            username: "bob".to_string(),
            password: "secret".to_string(),
        };
        let client = AlClient::authenticated_from(&creds, Some(&mock_server.uri()))
            .await
            .unwrap();
        let account = client.get_account_details().await.unwrap();
        assert_eq!(account.name, "Company Name");

        let requests = mock_server.received_requests().await.unwrap();
        let authenticate = requests
            .iter()
            .find(|r| r.url.path() == "/aims/v1/authenticate")
            .unwrap();
        assert!(!authenticate.headers.contains_key("x-aims-auth-token"));
    }

    #[tokio::test]
    async fn test_access_key_bootstrap_uses_key_pair() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/aims/v1/authenticate"))
            .and(header("authorization", "Basic Ym9iOnNlY3JldA=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "authentication": {"token": "key_token"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let creds = Credentials::AccessKey {
            account_id: "12345678".to_string(),
            access_key_id: "bob".to_string(),
            secret_key: "secret".to_string(),
        };
        let client = AlClient::authenticated_from(&creds, Some(&mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(client.api_token(), Some("key_token"));
        assert!(client.has_basic_credentials());
    }

    #[tokio::test]
    async fn test_empty_access_key_reports_access_key_error() {
        let creds = Credentials::AccessKey {
            account_id: "12345678".to_string(),
            access_key_id: String::new(),
            secret_key: "secret".to_string(),
        };
        let err = AlClient::authenticated_from(&creds, None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), error::EMPTY_ACCESS_KEY);
    }

    #[tokio::test]
    async fn test_empty_password_reports_username_error() {
        let creds = Credentials::Basic {
            account_id: "12345678".to_string(),
            username: "bob".to_string(),
            password: String::new(),
        };
        let err = AlClient::authenticated_from(&creds, None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), error::EMPTY_USERNAME_OR_PASSWORD);
    }

    #[tokio::test]
    async fn test_bootstrap_failure_surfaces_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/aims/v1/authenticate"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let creds = Credentials::Basic {
            account_id: "12345678".to_string(),
            username: "bob".to_string(),
            password: "wrong".to_string(),
        };
        let err = AlClient::authenticated_from(&creds, Some(&mock_server.uri()))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "error from makeRequest: HTTP status 401: invalid credentials"
        );
    }
}
