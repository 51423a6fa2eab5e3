//! Alert Logic Cloud Insight API client module
//!
//! [`AlClient`] carries the account and credentials; each resource module
//! adds its operations to it and provides the matching command handlers.

pub mod accounts;
pub mod assets;
mod client;
mod credentials;
pub mod deployments;
mod models;
pub mod roles;
pub mod user_roles;
pub mod users;

pub use accounts::{AccountDetails, AccountRelationship, UpdateAccountDetailsRequest};
pub use client::{AlClient, Query};
pub use credentials::{CliCredentials, CredentialResolver, Credentials};
pub use models::{format_epoch, ModifiedCreated};
