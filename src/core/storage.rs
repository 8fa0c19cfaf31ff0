//! # Preference Store
//!
//! A tiny persistent key-value store under `~/.railshub/`. Each key is one
//! file holding a UTF-8 string value.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.
//! There is no cross-process locking: two instances writing the same key
//! race, and the last writer wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no home directory")]
    NoHome,
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("store encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Directory-backed key-value store.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Opens the store at `~/.railshub/`.
    pub fn open_default() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHome)?;
        Self::open(home.join(".railshub"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Reads a value. A missing key is `Ok(None)`.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically replaces a value (via `.tmp` + rename).
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!("{key}.tmp"));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        debug!("Stored {} ({} bytes)", path.display(), value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_set_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        store.set("k", "v").unwrap();
        assert!(!dir.path().join("k.tmp").exists());
    }

    #[test]
    fn test_open_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = Store::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }
}
