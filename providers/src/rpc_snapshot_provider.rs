use async_trait::async_trait;
use epochsnap_core::{
    errors::CoreResult, EpochProvider, ProgramAccountsProvider,
};
use serde_json::{json, Value};
use solana_account_decoder::UiAccountEncoding;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::{
    config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    request::RpcRequest,
};
use solana_sdk::{
    clock::{Slot, UnixTimestamp},
    commitment_config::CommitmentConfig,
    epoch_info::EpochInfo,
    pubkey::Pubkey,
};

use crate::rpc_provider_config::RpcProviderConfig;

pub struct RpcSnapshotProvider {
    rpc_client: RpcClient,
}

impl RpcSnapshotProvider {
    pub fn new(config: RpcProviderConfig) -> Self {
        let rpc_client = RpcClient::new_with_timeout_and_commitment(
            config.url().to_string(),
            config.timeout(),
            CommitmentConfig {
                commitment: config.commitment().unwrap_or_default(),
            },
        );
        Self { rpc_client }
    }

    pub fn devnet() -> Self {
        Self::new(RpcProviderConfig::devnet())
    }
}

#[async_trait]
impl EpochProvider for RpcSnapshotProvider {
    async fn get_epoch_info(&self) -> CoreResult<EpochInfo> {
        Ok(self.rpc_client.get_epoch_info().await?)
    }

    async fn get_block_time(
        &self,
        slot: Slot,
    ) -> CoreResult<Option<UnixTimestamp>> {
        // Raw send so a null block time maps to None instead of a
        // client error.
        let block_time = self
            .rpc_client
            .send(RpcRequest::GetBlockTime, json!([slot]))
            .await?;
        Ok(block_time)
    }
}

#[async_trait]
impl ProgramAccountsProvider for RpcSnapshotProvider {
    async fn get_program_accounts_parsed(
        &self,
        program_id: &Pubkey,
    ) -> CoreResult<Vec<Value>> {
        let config = RpcProgramAccountsConfig {
            filters: None,
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::JsonParsed),
                data_slice: None,
                commitment: Some(self.rpc_client.commitment()),
                min_context_slot: None,
            },
            with_context: None,
        };
        // The typed get_program_accounts helpers decode into binary
        // accounts and cannot carry jsonParsed documents, so we issue
        // the request directly and keep each record opaque.
        let accounts = self
            .rpc_client
            .send(
                RpcRequest::GetProgramAccounts,
                json!([program_id.to_string(), config]),
            )
            .await?;
        Ok(accounts)
    }
}
