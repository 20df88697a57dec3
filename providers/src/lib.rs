pub mod rpc_provider_config;
pub mod rpc_snapshot_provider;
pub mod validators_app;
