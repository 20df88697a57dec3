use std::fmt;

use solana_sdk::{pubkey::Pubkey, stake, vote};

/// The two account snapshots a run can produce. Each maps to one of the
/// network's built-in programs whose accounts get scanned in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Vote,
    Stake,
}

impl SnapshotKind {
    pub fn program_id(&self) -> Pubkey {
        match self {
            SnapshotKind::Vote => vote::program::id(),
            SnapshotKind::Stake => stake::program::id(),
        }
    }

    pub fn file_prefix(&self) -> &'static str {
        match self {
            SnapshotKind::Vote => "vote_account",
            SnapshotKind::Stake => "stake_account",
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotKind::Vote => write!(f, "vote"),
            SnapshotKind::Stake => write!(f, "stake"),
        }
    }
}
