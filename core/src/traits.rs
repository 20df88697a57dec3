use async_trait::async_trait;
use serde_json::Value;
use solana_sdk::{
    clock::{Slot, UnixTimestamp},
    epoch_info::EpochInfo,
    pubkey::Pubkey,
};

use crate::errors::CoreResult;

#[async_trait]
pub trait EpochProvider {
    async fn get_epoch_info(&self) -> CoreResult<EpochInfo>;
    async fn get_block_time(
        &self,
        slot: Slot,
    ) -> CoreResult<Option<UnixTimestamp>>;
}

/// Fetches every account owned by a program as jsonParsed documents.
/// A single batch request; the returned order is preserved as-is.
#[async_trait]
pub trait ProgramAccountsProvider {
    async fn get_program_accounts_parsed(
        &self,
        program_id: &Pubkey,
    ) -> CoreResult<Vec<Value>>;
}

#[async_trait]
pub trait ValidatorStatsProvider {
    async fn get_validator_stats(&self, network: &str) -> CoreResult<Value>;
}
