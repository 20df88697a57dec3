pub mod epoch_provider_stub;
pub mod program_accounts_provider_stub;
pub mod records;
pub mod validator_stats_provider_stub;
