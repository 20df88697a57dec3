use std::env;

use epochsnap_providers::validators_app::DEFAULT_NETWORK;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RPC_URL is not set")]
    MissingRpcUrl,
}

/// Environment-derived configuration, resolved once at startup.
pub struct CollectorConfig {
    pub rpc_url: String,
    pub validators_app_api_key: Option<String>,
    pub network: String,
}

impl CollectorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let rpc_url =
            env::var("RPC_URL").map_err(|_| ConfigError::MissingRpcUrl)?;
        let validators_app_api_key = env::var("VALIDATORS_APP_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        Ok(Self {
            rpc_url,
            validators_app_api_key,
            network: DEFAULT_NETWORK.to_string(),
        })
    }
}
