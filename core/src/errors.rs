use thiserror::Error;

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("RpcClientError")]
    RpcClientError(#[from] solana_rpc_client_api::client_error::Error),
    #[error("HttpClientError")]
    HttpClientError(#[from] reqwest::Error),
    #[error("Failed to get epoch info from cluster")]
    FailedToGetEpochInfoFromCluster,
    #[error("Failed to get program accounts from cluster")]
    FailedToGetProgramAccountsFromCluster,
    #[error("Failed to get validator stats from validators.app")]
    FailedToGetValidatorStats,
}
