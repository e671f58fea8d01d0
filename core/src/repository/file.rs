use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::day_record::Ledger;
use crate::repository::traits::LedgerRepository;
use crate::usecase::transfer;

const LEDGER_FILE_NAME: &str = "ledger.json";
const DEFAULT_DIR_NAME: &str = ".frontdesk";

#[derive(Clone, Debug)]
pub struct FileLedgerRepository {
    file_path: PathBuf,
}

impl FileLedgerRepository {
    /// Uses `base_dir`, or `~/.frontdesk` when none is given. The directory
    /// is created on the first save, not here.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => Self::default_dir()?,
        };
        Ok(FileLedgerRepository {
            file_path: dir.join(LEDGER_FILE_NAME),
        })
    }

    pub fn default_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or_else(|| Error::StorageUnavailable {
            path: PathBuf::from("~"),
            source: std::io::Error::new(ErrorKind::NotFound, "could not determine home directory"),
        })?;
        Ok(home_dir.join(DEFAULT_DIR_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn unavailable(&self, source: std::io::Error) -> Error {
        Error::StorageUnavailable {
            path: self.file_path.clone(),
            source,
        }
    }

    fn write_ledger(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()
    }
}

impl LedgerRepository for FileLedgerRepository {
    fn load(&self) -> Ledger {
        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no ledger file yet");
                return Ledger::new();
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "ledger unreadable, starting empty");
                return Ledger::new();
            }
        };

        match transfer::import_all(&bytes) {
            Ok(ledger) => {
                debug!(path = %self.file_path.display(), days = ledger.len(), "ledger loaded");
                ledger
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "ledger malformed, starting empty");
                Ledger::new()
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let bytes = transfer::export_all(ledger)?;
        self.write_ledger(&bytes)
            .map_err(|e| self.unavailable(e))?;
        debug!(path = %self.file_path.display(), days = ledger.len(), "ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::day_record::DayRecord;

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.insert(
            "2024-01-01".to_string(),
            DayRecord {
                checkins: vec!["101 / JOHN DOE / 2 PAX".to_string()],
                ..DayRecord::default()
            },
        );
        ledger
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().join("nested"))).unwrap();
        repo.save(&sample()).unwrap();
        assert_eq!(repo.load(), sample());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
        repo.save(&sample()).unwrap();
        repo.save(&Ledger::new()).unwrap();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(repo.path(), "{ not json").unwrap();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_unwritable_location_is_storage_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let repo = FileLedgerRepository::new(Some(blocker)).unwrap();
        let err = repo.save(&sample()).unwrap_err();
        assert!(matches!(err, Error::StorageUnavailable { .. }));
    }
}
