//! alertlogic - Typed client and CLI for the Alert Logic Cloud Insight API
//!
//! Manage AIMS users, roles and role assignments, inspect accounts and
//! deployments, and maintain external DNS name assets.
//!
//! # Features
//!
//! - Authenticate with a username/password, an access key pair or an AIMS token
//! - Typed request and response models for every supported endpoint
//! - HTTP failures mapped to errors carrying the status code
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Who am I?
//! alctl whoami --account-id 12345678 --access-key-id KEY --secret-key SECRET
//!
//! # List users with their role IDs
//! alctl get users --include-role-ids
//!
//! # Create a role
//! alctl create role --name Auditors -p '*:own:get:*=allowed'
//!
//! # Grant it
//! alctl grant USER_ID ROLE_ID
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use api::{
    AccountDetails, AccountRelationship, AlClient, CliCredentials, CredentialResolver,
    Credentials, ModifiedCreated,
};
pub use cli::{Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat, UpdateResource};
pub use error::{AlError, Result};
