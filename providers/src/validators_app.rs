use async_trait::async_trait;
use epochsnap_core::{errors::CoreResult, ValidatorStatsProvider};
use serde_json::Value;

pub const VALIDATORS_APP_BASE_URL: &str = "https://www.validators.app/api/v1";

/// Network name used when none is configured.
pub const DEFAULT_NETWORK: &str = "mainnet";

/// Thin client for the validators.app aggregated statistics API.
/// One authenticated GET per call, the response body is passed through
/// undecoded beyond JSON parsing.
pub struct ValidatorsAppClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl ValidatorsAppClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ValidatorStatsProvider for ValidatorsAppClient {
    async fn get_validator_stats(&self, network: &str) -> CoreResult<Value> {
        let url = format!(
            "{}/validators/{}.json",
            VALIDATORS_APP_BASE_URL, network
        );
        let response = self
            .http_client
            .get(url)
            .query(&[("order", "stake")])
            .header("Token", &self.api_key)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
