use std::time::Duration;

use solana_sdk::commitment_config::CommitmentLevel;

pub const DEVNET_URL: &str = "https://api.devnet.solana.com";

/// Request timeout sized for full program-account scans, which can take
/// tens of seconds against the stake program.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(50);

#[derive(Debug, Clone)]
pub struct RpcProviderConfig {
    url: String,
    commitment: Option<CommitmentLevel>,
    timeout: Duration,
}

impl RpcProviderConfig {
    pub fn new(url: String, commitment: Option<CommitmentLevel>) -> Self {
        Self {
            url,
            commitment,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn devnet() -> Self {
        Self::new(DEVNET_URL.to_string(), None)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn commitment(&self) -> Option<CommitmentLevel> {
        self.commitment
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
