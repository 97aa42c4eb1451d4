//! File-backed profile store
//!
//! Stores every key of one profile in a single JSON object file. Nothing is
//! cached: each `get` reads the file and each `set` does a read-modify-write,
//! so two handles on the same profile behave like two browser tabs.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::StorageResult;
use super::kv::KeyValueStore;

/// Name of the profile file inside the profile directory
pub const PROFILE_FILE_NAME: &str = "local_storage.json";

/// A profile directory holding a `local_storage.json` file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open (or lazily create) the profile stored under `profile_dir`
    pub fn open(profile_dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = profile_dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(PROFILE_FILE_NAME),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `read_entries`, but a corrupted file is replaced on the next write
    fn read_entries_for_write(&self) -> StorageResult<BTreeMap<String, String>> {
        match self.read_entries() {
            Ok(entries) => Ok(entries),
            Err(super::StorageError::Serialization(e)) => {
                warn!("Discarding corrupted profile file {:?}: {}", self.path, e);
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let payload = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.read_entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        debug!(key, bytes = value.len(), "profile key written");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.read_entries_for_write()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{StorageError, CART_KEY, THEME_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get(CART_KEY).unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_get_persists_across_handles() {
        let dir = tempdir().unwrap();
        let first = FileStore::open(dir.path()).unwrap();
        first.set(THEME_KEY, "dark").unwrap();
        first.set(CART_KEY, "[]").unwrap();

        let second = FileStore::open(dir.path()).unwrap();
        assert_eq!(second.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(second.get(CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set(THEME_KEY, "light").unwrap();
        store.remove(THEME_KEY).unwrap();
        store.remove("never-set").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupted_file_errors_on_read_and_heals_on_write() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        fs::write(store.path(), b"{not json").unwrap();

        assert!(matches!(
            store.get(CART_KEY),
            Err(StorageError::Serialization(_))
        ));

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_open_creates_nested_profile_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("profiles").join("default");
        let store = FileStore::open(&nested).unwrap();
        store.set(CART_KEY, "[]").unwrap();
        assert!(nested.join(PROFILE_FILE_NAME).exists());
    }
}
