//! AIMS account details and account relationships

mod api;
mod commands;
mod models;

pub use commands::{
    run_get_account_command, run_get_relationship_command, run_update_account_command,
};
pub use models::{AccountDetails, AccountRelationship, UpdateAccountDetailsRequest};
