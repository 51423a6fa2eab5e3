/// Configuration constants for the Alert Logic API
pub mod api {
    /// Default base URL for the Cloud Insight API
    pub const BASE_URL: &str = "https://api.cloudinsight.alertlogic.com";

    /// AIMS (identity and access management) service path
    pub const AIMS: &str = "aims/v1";

    /// Deployments service path
    pub const DEPLOYMENTS: &str = "deployments/v1";

    /// Assets query service path
    pub const ASSETS_QUERY: &str = "assets_query/v1";

    /// Assets write service path
    pub const ASSETS_WRITE: &str = "assets_write/v1";

    /// Header carrying the AIMS token on authenticated requests
    pub const AUTH_TOKEN_HEADER: &str = "X-Aims-Auth-Token";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".alertlogic/credentials.json";

    pub const ACCOUNT_ID_ENV: &str = "ALERTLOGIC_ACCOUNT_ID";
    pub const USERNAME_ENV: &str = "ALERTLOGIC_USERNAME";
    pub const PASSWORD_ENV: &str = "ALERTLOGIC_PASSWORD";
    pub const ACCESS_KEY_ID_ENV: &str = "ALERTLOGIC_ACCESS_KEY_ID";
    pub const SECRET_KEY_ENV: &str = "ALERTLOGIC_SECRET_KEY";
    pub const API_TOKEN_ENV: &str = "ALERTLOGIC_API_TOKEN";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV: &str = "ALERTLOGIC_API_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
