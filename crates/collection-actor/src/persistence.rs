//! # JSON File Persistence
//!
//! Each collection lives in one file holding a pretty-printed JSON array. The file is read
//! once when the actor opens and rewritten in full after every mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Backing file of one collection.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection.
    ///
    /// A missing, unreadable or malformed file yields an empty collection; the problem is
    /// logged and never returned to the caller.
    pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Collection file missing, starting empty");
                return Vec::new();
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read collection file");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to parse collection file");
                Vec::new()
            }
        }
    }

    /// Overwrites the file with the full collection.
    ///
    /// The bytes go to a sibling temporary file first and are renamed over the target, so
    /// a crash mid-write leaves the previous contents in place.
    pub async fn save<T: Serialize>(&self, items: &[T]) -> Result<(), PersistenceError> {
        let bytes =
            serde_json::to_vec_pretty(items).map_err(|source| PersistenceError::Encode {
                path: self.path.clone(),
                source,
            })?;

        let staging = self.staging_path();
        let write_err = |source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        };
        tokio::fs::write(&staging, &bytes).await.map_err(write_err)?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(write_err)?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Saved");
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_corrupt_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();

        let missing = JsonFile::new(dir.path().join("nope.json"));
        assert!(missing.load::<u32>().is_empty());

        let corrupt_path = dir.path().join("corrupt.json");
        std::fs::write(&corrupt_path, "[1, 2,").unwrap();
        assert!(JsonFile::new(&corrupt_path).load::<u32>().is_empty());

        let blank_path = dir.path().join("blank.json");
        std::fs::write(&blank_path, "").unwrap();
        assert!(JsonFile::new(&blank_path).load::<u32>().is_empty());
    }

    #[tokio::test]
    async fn save_writes_pretty_array_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("numbers.json"));

        file.save(&[3u32, 1, 2]).await.unwrap();

        let raw = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(raw, "[\n  3,\n  1,\n  2\n]");
        assert_eq!(file.load::<u32>(), vec![3, 1, 2]);
        assert!(!dir.path().join("numbers.json.tmp").exists());
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("gone").join("numbers.json"));

        let err = file.save(&[1u32]).await.unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
    }
}
