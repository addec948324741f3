use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::quiz_engine::best_time::RecordStore;

const ORG_NAME: &str = "practice";
const APP_NAME: &str = "math_drill_gen";
const SAVE_FILE: &str = "records.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
    #[error("record file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("record file encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed [`RecordStore`]: a JSON map of record keys to text values.
///
/// Writes are best-effort — a failed persist is logged and the in-memory view
/// stays authoritative for the rest of the process. A missing file is an
/// empty store; an unreadable one degrades to empty rather than failing the
/// session that is about to record a time.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at the platform data directory, creating it if needed.
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("com", ORG_NAME, APP_NAME).ok_or(StorageError::NoDataDir)?;
        fs::create_dir_all(dirs.data_dir())?;
        Self::open(dirs.data_dir().join(SAVE_FILE))
    }

    /// Open a store at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        target: "storage",
                        path = %path.display(),
                        error = %e,
                        "record file unreadable, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(target: "storage", path = %path.display(), records = records.len(), "record store opened");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.records.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            error!(
                target: "storage",
                path = %self.path.display(),
                error = %e,
                "failed to persist records"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::best_time::BEST_TIME_KEY;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("math_drill_gen_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn records_survive_a_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::open(&path).unwrap();
        store.set(BEST_TIME_KEY, "12.34");
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(BEST_TIME_KEY).as_deref(), Some("12.34"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_opens_empty() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(BEST_TIME_KEY), None);
    }

    #[test]
    fn corrupt_file_opens_empty_and_stays_usable() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(BEST_TIME_KEY), None);

        store.set(BEST_TIME_KEY, "9.5");
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(BEST_TIME_KEY).as_deref(), Some("9.5"));

        let _ = fs::remove_file(&path);
    }
}
