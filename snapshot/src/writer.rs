use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use epochsnap_core::SnapshotKind;
use log::info;
use serde_json::Value;

use crate::errors::SnapshotResult;

pub fn account_snapshot_filename(kind: SnapshotKind, epoch: u64) -> String {
    format!("{}_epoch_{}.json", kind.file_prefix(), epoch)
}

pub fn validator_stats_filename(date: NaiveDate) -> String {
    format!("validators-app-data-{}.json", date.format("%d-%m-%y"))
}

/// Writes snapshot files into a fixed output directory.
///
/// Filenames are fully determined by the snapshot kind and the epoch
/// ordinal (or calendar date for validator stats), so re-running against
/// the same epoch overwrites the previous file instead of appending or
/// versioning.
pub struct SnapshotWriter {
    out_dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    pub fn write_account_snapshot(
        &self,
        kind: SnapshotKind,
        epoch: u64,
        accounts: &[Value],
    ) -> SnapshotResult<PathBuf> {
        // Serialize the full array before touching the file so a failed
        // run leaves no partial snapshot behind.
        let bytes = serde_json::to_vec(accounts)?;
        let path = self.out_dir.join(account_snapshot_filename(kind, epoch));
        fs::write(&path, bytes)?;
        info!("Wrote to file {}", path.display());
        Ok(path)
    }

    pub fn write_validator_stats(
        &self,
        stats: &Value,
        date: NaiveDate,
    ) -> SnapshotResult<PathBuf> {
        let bytes = serde_json::to_vec(stats)?;
        let path = self.out_dir.join(validator_stats_filename(date));
        fs::write(&path, bytes)?;
        info!("Wrote to file {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_account_snapshot_filenames() {
        assert_eq!(
            account_snapshot_filename(SnapshotKind::Vote, 318),
            "vote_account_epoch_318.json"
        );
        assert_eq!(
            account_snapshot_filename(SnapshotKind::Stake, 318),
            "stake_account_epoch_318.json"
        );
    }

    #[test]
    fn test_validator_stats_filename_uses_two_digit_components() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(
            validator_stats_filename(date),
            "validators-app-data-05-01-24.json"
        );
    }

    #[test]
    fn test_write_preserves_record_order() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SnapshotWriter::new(dir.path());
        let accounts: Vec<Value> = (0..5)
            .map(|n| json!({ "pubkey": n.to_string(), "account": {} }))
            .collect();

        let path = writer
            .write_account_snapshot(SnapshotKind::Vote, 42, &accounts)
            .unwrap();

        let written: Vec<Value> =
            serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(written, accounts);
    }

    #[test]
    fn test_write_overwrites_existing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SnapshotWriter::new(dir.path());

        let first = vec![json!({ "pubkey": "a" })];
        let second = vec![json!({ "pubkey": "b" }), json!({ "pubkey": "c" })];
        writer
            .write_account_snapshot(SnapshotKind::Stake, 7, &first)
            .unwrap();
        let path = writer
            .write_account_snapshot(SnapshotKind::Stake, 7, &second)
            .unwrap();

        let written: Vec<Value> =
            serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(written, second);
    }
}
