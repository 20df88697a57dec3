use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use epochsnap_core::{
    errors::{CoreError, CoreResult},
    ValidatorStatsProvider,
};
use serde_json::Value;

#[derive(Default, Clone)]
pub struct ValidatorStatsProviderStub {
    pub stats: Value,
    pub fails: bool,
    invocations: Arc<AtomicUsize>,
}

impl ValidatorStatsProviderStub {
    pub fn with_stats(stats: Value) -> Self {
        Self {
            stats,
            ..Self::default()
        }
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ValidatorStatsProvider for ValidatorStatsProviderStub {
    async fn get_validator_stats(&self, _network: &str) -> CoreResult<Value> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        if self.fails {
            return Err(CoreError::FailedToGetValidatorStats);
        }
        Ok(self.stats.clone())
    }
}
