//! Output formatting module
//!
//! Every resource renders as a table, CSV, JSON or YAML. Table and CSV show a
//! summary row per item; JSON and YAML carry the full structured record.

mod accounts;
mod assets;
pub mod common;
mod deployments;
mod roles;
mod user_roles;
mod users;

pub use accounts::{output_account, output_identity};
pub use assets::output_assets;
pub use deployments::{output_deployment, output_deployments};
pub use roles::{output_role, output_roles};
pub use user_roles::{output_role_ids, output_user_permissions};
pub use users::{output_user, output_users};
