//! External DNS name assets

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_asset_command, run_delete_asset_command, run_get_assets_command,
    run_update_asset_command,
};
pub use models::{
    ExternalDnsAssetRequest, ExternalDnsNameAsset, ExternalDnsNameAssets, Relationship,
    AWS_SCOPE, EXTERNAL_DNS_NAME,
};
