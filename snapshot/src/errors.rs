use thiserror::Error;

pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error(
        "cannot use --stake-only and --vote-only flags at the same time"
    )]
    ConflictingFlags,
    #[error("VALIDATORS_APP_API_KEY is not configured")]
    MissingValidatorsAppApiKey,
    #[error("CoreError")]
    CoreError(#[from] epochsnap_core::errors::CoreError),
    #[error("IoError")]
    IoError(#[from] std::io::Error),
    #[error("JsonError")]
    JsonError(#[from] serde_json::Error),
}
