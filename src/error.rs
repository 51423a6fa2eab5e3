use std::fmt;

/// Prefix applied to failures raised by the request executor
pub const MAKE_REQUEST_ERROR: &str = "error from makeRequest";

/// Prefix applied to JSON decoding failures
pub const UNMARSHAL_ERROR: &str = "error unmarshalling the JSON response";

pub const EMPTY_API_TOKEN: &str = "API token must not be empty";
pub const EMPTY_USERNAME_OR_PASSWORD: &str = "username or password must not be empty";
pub const EMPTY_ACCESS_KEY: &str = "accessKeyId or secretKey must not be empty";
pub const EMPTY_ACCOUNT_ID: &str = "account ID must not be empty";

/// Custom error type for Alert Logic operations
#[derive(Debug)]
pub enum AlError {
    /// HTTP request could not be sent or its body read
    Http(reqwest::Error),
    /// 401 from the API
    InvalidCredentials { status: u16 },
    /// 403 from the API
    InsufficientPermissions { status: u16 },
    /// Gateway errors and the CDN 52x family
    ServiceFailure { status: u16 },
    /// 400 from the API; the body is passed through untouched
    BadRequest { body: String },
    /// Any other non-success status
    Api { status: u16, content: String },
    /// JSON decoding error
    Json(String),
    /// Client construction error
    Config(String),
    /// Request rejected before it was sent
    InvalidRequest(String),
    /// No credentials in any source
    CredentialsNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
}

impl AlError {
    /// HTTP status code carried by the error, if the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AlError::InvalidCredentials { status }
            | AlError::InsufficientPermissions { status }
            | AlError::ServiceFailure { status }
            | AlError::Api { status, .. } => Some(*status),
            AlError::BadRequest { .. } => Some(400),
            AlError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error came out of the request executor
    fn from_request(&self) -> bool {
        matches!(
            self,
            AlError::Http(_)
                | AlError::InvalidCredentials { .. }
                | AlError::InsufficientPermissions { .. }
                | AlError::ServiceFailure { .. }
                | AlError::BadRequest { .. }
                | AlError::Api { .. }
        )
    }

    /// Map a non-success HTTP status and its body to an error
    pub(crate) fn from_status(status: u16, body: &[u8]) -> Self {
        match status {
            401 => AlError::InvalidCredentials { status },
            403 => AlError::InsufficientPermissions { status },
            502 | 503 | 504 | 522 | 523 | 524 => AlError::ServiceFailure { status },
            400 => AlError::BadRequest {
                body: String::from_utf8_lossy(body).into_owned(),
            },
            _ => AlError::Api {
                status,
                content: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }
}

impl fmt::Display for AlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from_request() {
            write!(f, "{}: ", MAKE_REQUEST_ERROR)?;
        }
        match self {
            AlError::Http(e) => write!(f, "{}", e),
            AlError::InvalidCredentials { status } => {
                write!(f, "HTTP status {}: invalid credentials", status)
            }
            AlError::InsufficientPermissions { status } => {
                write!(f, "HTTP status {}: insufficient permissions", status)
            }
            AlError::ServiceFailure { status } => {
                write!(f, "HTTP status {}: service failure", status)
            }
            AlError::BadRequest { body } => write!(f, "{}", body),
            AlError::Api { status, content } => {
                write!(f, "HTTP status {}: content {:?}", status, content)
            }
            AlError::Json(msg) => write!(f, "{}: {}", UNMARSHAL_ERROR, msg),
            AlError::Config(msg) => write!(f, "{}", msg),
            AlError::InvalidRequest(msg) => write!(f, "{}", msg),
            AlError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            AlError::Credentials(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AlError {
    fn from(err: reqwest::Error) -> Self {
        AlError::Http(err)
    }
}

impl From<serde_json::Error> for AlError {
    fn from(err: serde_json::Error) -> Self {
        AlError::Json(err.to_string())
    }
}

impl From<std::io::Error> for AlError {
    fn from(err: std::io::Error) -> Self {
        AlError::Credentials(err.to_string())
    }
}

/// Result type alias for Alert Logic operations
pub type Result<T> = std::result::Result<T, AlError>;
