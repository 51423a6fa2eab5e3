//! Credential resolution from CLI flags, environment and credentials file

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{AlError, Result};

/// Credentials a client can be built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// An AIMS token obtained earlier
    Token {
        account_id: String,
        api_token: String,
    },
    /// Access key ID and secret key, exchanged for a token
    AccessKey {
        account_id: String,
        access_key_id: String,
        secret_key: String,
    },
    /// Username and password, exchanged for a token
    Basic {
        account_id: String,
        username: String,
        password: String,
    },
}

impl Credentials {
    pub fn account_id(&self) -> &str {
        match self {
            Credentials::Token { account_id, .. }
            | Credentials::AccessKey { account_id, .. }
            | Credentials::Basic { account_id, .. } => account_id,
        }
    }
}

/// Credentials file structure
#[derive(Deserialize, Debug, Default)]
struct CredentialsFile {
    account_id: Option<String>,
    username: Option<String>,
    password: Option<String>,
    access_key_id: Option<String>,
    secret_key: Option<String>,
    api_token: Option<String>,
}

/// Raw values supplied on the command line
#[derive(Debug, Default, Clone)]
pub struct CliCredentials {
    pub account_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_key: Option<String>,
    pub api_token: Option<String>,
}

/// Credential resolution with fallback logic
pub struct CredentialResolver {
    file_path: Option<PathBuf>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver {
    /// Resolver reading the default credentials file
    pub fn new() -> Self {
        Self {
            file_path: dirs::home_dir().map(|p| p.join(credentials::FILE_PATH)),
        }
    }

    /// Resolver reading a specific credentials file
    pub fn with_file(path: &Path) -> Self {
        Self {
            file_path: Some(path.to_path_buf()),
        }
    }

    /// Resolve credentials from multiple sources with fallback:
    /// 1. CLI arguments (clap also fills these from ALERTLOGIC_* variables)
    /// 2. Credentials file (~/.alertlogic/credentials.json)
    ///
    /// Within a source an API token wins over an access key pair, which wins
    /// over a username and password.
    pub fn resolve(&self, cli: &CliCredentials) -> Result<Credentials> {
        if let Some(creds) = Self::from_values(
            cli.account_id.as_deref(),
            cli.api_token.as_deref(),
            cli.access_key_id.as_deref(),
            cli.secret_key.as_deref(),
            cli.username.as_deref(),
            cli.password.as_deref(),
        )? {
            debug!("Using credentials from CLI arguments or environment");
            return Ok(creds);
        }

        debug!("No complete credentials on CLI or in environment, trying credentials file");
        let file = self.read_file()?;
        let account_id = cli.account_id.as_deref().or(file.account_id.as_deref());

        Self::from_values(
            account_id,
            file.api_token.as_deref(),
            file.access_key_id.as_deref(),
            file.secret_key.as_deref(),
            file.username.as_deref(),
            file.password.as_deref(),
        )?
        .ok_or_else(|| AlError::CredentialsNotFound(self.not_found_message()))
    }

    fn from_values(
        account_id: Option<&str>,
        api_token: Option<&str>,
        access_key_id: Option<&str>,
        secret_key: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<Credentials>> {
        let account_id = || {
            account_id
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    AlError::CredentialsNotFound(format!(
                        "No account ID found. Set --account-id or {}",
                        credentials::ACCOUNT_ID_ENV
                    ))
                })
        };

        let creds = match (api_token, access_key_id, secret_key, username, password) {
            (Some(token), ..) => Credentials::Token {
                account_id: account_id()?,
                api_token: token.to_string(),
            },
            (None, Some(key), Some(secret), ..) => Credentials::AccessKey {
                account_id: account_id()?,
                access_key_id: key.to_string(),
                secret_key: secret.to_string(),
            },
            (None, _, _, Some(user), Some(pass)) => Credentials::Basic {
                account_id: account_id()?,
                username: user.to_string(),
                password: pass.to_string(),
            },
            _ => return Ok(None),
        };
        Ok(Some(creds))
    }

    fn read_file(&self) -> Result<CredentialsFile> {
        let Some(path) = &self.file_path else {
            return Ok(CredentialsFile::default());
        };

        debug!("Looking for credentials file at: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Ok(CredentialsFile::default()),
        };

        serde_json::from_str(&content).map_err(|e| {
            AlError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Generate helpful error message when no credentials are found
    fn not_found_message(&self) -> String {
        let file_info = self
            .file_path
            .as_ref()
            .map(|p| format!(" or credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No Alert Logic credentials found. Provide one of:\n\
             \n\
             1. API token:         --token <TOKEN>  or  export {}=<TOKEN>\n\
             2. Access key:        --access-key-id <ID> --secret-key <KEY>  ({} / {})\n\
             3. Username/password: --username <USER> --password <PASS>  ({} / {})\n\
             \n\
             Checked: CLI arguments, environment{}",
            credentials::API_TOKEN_ENV,
            credentials::ACCESS_KEY_ID_ENV,
            credentials::SECRET_KEY_ENV,
            credentials::USERNAME_ENV,
            credentials::PASSWORD_ENV,
            file_info
        )
    }
}
