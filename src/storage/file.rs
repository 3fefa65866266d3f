//! File-backed best-score store.
//!
//! Persists a single bincode-encoded record at a path of the shell's
//! choosing. A missing file means no best score has been recorded yet.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::store::{BestScoreStore, Result};

/// The on-disk record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct BestScoreRecord {
    best: u32,
}

/// Best-score store persisted to a file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given path.
    ///
    /// The file is not touched until the first write; reads of a missing
    /// file yield `None`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileStore {
    fn best_score(&self) -> Result<Option<u32>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: BestScoreRecord = bincode::deserialize(&bytes)?;
        Ok(Some(record.best))
    }

    fn set_best_score(&mut self, score: u32) -> Result<()> {
        let bytes = bincode::serialize(&BestScoreRecord { best: score })?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("memory-pairs-{}-{}", tag, std::process::id()));
        path
    }

    #[test]
    fn test_missing_file_is_none() {
        let store = FileStore::new(temp_path("missing"));
        assert_eq!(store.best_score().unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_path("roundtrip");
        let mut store = FileStore::new(&path);

        store.set_best_score(6).unwrap();
        assert_eq!(store.best_score().unwrap(), Some(6));

        // A second store over the same path sees the persisted value.
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.best_score().unwrap(), Some(6));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let path = temp_path("corrupt");
        // Too short to hold the record; decoding hits EOF.
        fs::write(&path, b"xx").unwrap();

        let store = FileStore::new(&path);
        assert!(store.best_score().is_err());

        let _ = fs::remove_file(&path);
    }
}
