use clap::Parser;
use epochsnap_providers::{
    rpc_provider_config::RpcProviderConfig,
    rpc_snapshot_provider::RpcSnapshotProvider,
    validators_app::ValidatorsAppClient,
};
use epochsnap_snapshot::{
    SnapshotFlags, SnapshotOrchestrator, SnapshotWriter,
};
use log::*;

mod config;

use config::CollectorConfig;

/// Downloads vote/stake account snapshots for the current epoch, or the
/// validators.app statistics, into the current working directory.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Only download and store the vote account data
    #[arg(long, alias = "vo")]
    vote_only: bool,

    /// Only download and store the stake account data
    #[arg(long, alias = "so")]
    stake_only: bool,

    /// Save the validators.app data locally instead of RPC snapshots
    #[arg(long, alias = "sva")]
    save_validator_app_data: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let flags = SnapshotFlags {
        vote_only: cli.vote_only,
        stake_only: cli.stake_only,
        save_validator_stats: cli.save_validator_app_data,
    };

    let config = match CollectorConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let rpc_config = RpcProviderConfig::new(config.rpc_url.clone(), None);
    let stats_provider = config
        .validators_app_api_key
        .clone()
        .map(ValidatorsAppClient::new);

    let orchestrator = SnapshotOrchestrator::new(
        RpcSnapshotProvider::new(rpc_config.clone()),
        RpcSnapshotProvider::new(rpc_config),
        stats_provider,
        SnapshotWriter::new("."),
        config.network,
    );

    if let Err(err) = orchestrator.run(&flags).await {
        error!("Error: {:?}", err);
        std::process::exit(1);
    }
}
