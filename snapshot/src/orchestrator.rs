use chrono::Local;
use epochsnap_core::{
    EpochProvider, ProgramAccountsProvider, SnapshotKind,
    ValidatorStatsProvider,
};
use log::info;

use crate::{
    errors::{SnapshotError, SnapshotResult},
    writer::SnapshotWriter,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct SnapshotFlags {
    pub vote_only: bool,
    pub stake_only: bool,
    pub save_validator_stats: bool,
}

impl SnapshotFlags {
    /// Rejects the one invalid combination before any provider is
    /// touched. `save_validator_stats` takes precedence over the other
    /// two flags.
    pub fn validate(&self) -> SnapshotResult<()> {
        if self.vote_only && self.stake_only {
            return Err(SnapshotError::ConflictingFlags);
        }
        Ok(())
    }
}

/// Drives one collection run: resolve the current epoch, then fetch and
/// write the requested account snapshots strictly in sequence, or fetch
/// the validators.app statistics instead when that mode is requested.
pub struct SnapshotOrchestrator<E, A, S>
where
    E: EpochProvider,
    A: ProgramAccountsProvider,
    S: ValidatorStatsProvider,
{
    epoch_provider: E,
    accounts_provider: A,
    stats_provider: Option<S>,
    writer: SnapshotWriter,
    network: String,
}

impl<E, A, S> SnapshotOrchestrator<E, A, S>
where
    E: EpochProvider,
    A: ProgramAccountsProvider,
    S: ValidatorStatsProvider,
{
    pub fn new(
        epoch_provider: E,
        accounts_provider: A,
        stats_provider: Option<S>,
        writer: SnapshotWriter,
        network: String,
    ) -> Self {
        Self {
            epoch_provider,
            accounts_provider,
            stats_provider,
            writer,
            network,
        }
    }

    pub async fn run(&self, flags: &SnapshotFlags) -> SnapshotResult<()> {
        flags.validate()?;

        if flags.save_validator_stats {
            return self.save_validator_stats().await;
        }

        let epoch_info = self.epoch_provider.get_epoch_info().await?;
        let epoch = epoch_info.epoch;
        info!("Saving json data to file for epoch {}", epoch);

        if !flags.stake_only {
            self.snapshot_program_accounts(SnapshotKind::Vote, epoch)
                .await?;
        }
        if !flags.vote_only {
            self.snapshot_program_accounts(SnapshotKind::Stake, epoch)
                .await?;
        }

        Ok(())
    }

    async fn snapshot_program_accounts(
        &self,
        kind: SnapshotKind,
        epoch: u64,
    ) -> SnapshotResult<()> {
        info!("Fetching {} accounts", kind);
        let accounts = self
            .accounts_provider
            .get_program_accounts_parsed(&kind.program_id())
            .await?;
        info!("{} account results len: {}", kind, accounts.len());
        self.writer.write_account_snapshot(kind, epoch, &accounts)?;
        Ok(())
    }

    async fn save_validator_stats(&self) -> SnapshotResult<()> {
        let stats_provider = self
            .stats_provider
            .as_ref()
            .ok_or(SnapshotError::MissingValidatorsAppApiKey)?;
        let stats =
            stats_provider.get_validator_stats(&self.network).await?;
        self.writer
            .write_validator_stats(&stats, Local::now().date_naive())?;
        Ok(())
    }
}
