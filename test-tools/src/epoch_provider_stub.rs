use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use epochsnap_core::{
    errors::{CoreError, CoreResult},
    EpochProvider,
};
use solana_sdk::{
    clock::{Slot, UnixTimestamp},
    epoch_info::EpochInfo,
};

/// Cloneable so tests can keep a handle and assert on invocation counts
/// after moving the stub into the orchestrator.
#[derive(Default, Clone)]
pub struct EpochProviderStub {
    pub epoch: u64,
    pub fails: bool,
    invocations: Arc<AtomicUsize>,
}

impl EpochProviderStub {
    pub fn with_epoch(epoch: u64) -> Self {
        Self {
            epoch,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fails: true,
            ..Self::default()
        }
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EpochProvider for EpochProviderStub {
    async fn get_epoch_info(&self) -> CoreResult<EpochInfo> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        if self.fails {
            return Err(CoreError::FailedToGetEpochInfoFromCluster);
        }
        Ok(EpochInfo {
            epoch: self.epoch,
            slot_index: 0,
            slots_in_epoch: 432_000,
            absolute_slot: self.epoch * 432_000,
            block_height: 0,
            transaction_count: None,
        })
    }

    async fn get_block_time(
        &self,
        _slot: Slot,
    ) -> CoreResult<Option<UnixTimestamp>> {
        Ok(None)
    }
}
