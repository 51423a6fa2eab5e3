//! Deployments: monitored cloud environments

mod api;
mod commands;
mod models;

pub use commands::{run_get_deployment_command, run_get_deployments_command};
pub use models::{
    CloudDefender, Credential, Deployment, Exclude, Include, Monitor, Platform, Policy, Scope,
    Status,
};
