//! JSON file backed key-value store with atomic writes.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::{Map, Value};

use super::{KeyValueStore, StorageError};

/// Stores every key in a single JSON object file.
///
/// Each write rewrites the whole file through a temp file and a rename, so the
/// file is either the old or the new document, never a torn one. Access is
/// serialized across processes with an advisory lock on a sidecar
/// `<file>.lock` (the data file itself is replaced on every write, so it
/// cannot carry the lock).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFileStore {
    pub const FILE_NAME: &'static str = "store.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut lock_path = path.clone().into_os_string();
        lock_path.push(".lock");
        Self {
            path,
            lock_path: PathBuf::from(lock_path),
        }
    }

    /// Store at `<dir>/store.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self, exclusive: bool) -> Result<File, StorageError> {
        if let Some(parent) = self.lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|e| StorageError::Io {
                path: self.lock_path.clone(),
                source: e,
            })?;

        let locked = if exclusive {
            file.lock_exclusive()
        } else {
            FileExt::lock_shared(&file)
        };
        locked.map_err(|e| StorageError::Lock {
            path: self.lock_path.clone(),
            source: e,
        })?;

        // Released when the handle is dropped.
        Ok(file)
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        let temp_path = self.path.with_extension("json.tmp");
        let io_error = |path: &Path, e: std::io::Error| StorageError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let file = File::create(&temp_path).map_err(|e| io_error(&temp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, map).map_err(StorageError::Encode)?;
        writer.flush().map_err(|e| io_error(&temp_path, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| io_error(&temp_path, e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            io_error(&self.path, e)
        })
    }

    fn update(&self, apply: impl FnOnce(&mut Map<String, Value>)) -> Result<(), StorageError> {
        let _lock = self.lock(true)?;
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StorageError::Corrupt { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "Replacing unreadable store file");
                Map::new()
            }
            Err(err) => return Err(err),
        };
        apply(&mut map);
        self.write_map(&map)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let _lock = self.lock(false)?;
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.update(|map| {
            map.insert(key.to_string(), value);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn set_then_get_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(dir.path());
        store.set("favoriteRepos", json!([{"id": 1}])).unwrap();

        let reopened = JsonFileStore::in_dir(dir.path());
        assert_eq!(
            reopened.get("favoriteRepos").unwrap(),
            Some(json!([{"id": 1}]))
        );
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(dir.path());
        store.set("a", json!(1)).unwrap();
        store.set("b", json!(2)).unwrap();
        store.set("a", json!(3)).unwrap();

        assert_eq!(store.get("a").unwrap(), Some(json!(3)));
        assert_eq!(store.get("b").unwrap(), Some(json!(2)));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        std::fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.get("a"),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn set_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(dir.path());
        std::fs::write(store.path(), "\"garbage\"").unwrap();

        store.set("favoriteRepos", json!([{"id": 3}])).unwrap();
        assert_eq!(store.get("favoriteRepos").unwrap(), Some(json!([{"id": 3}])));

        let reopened = JsonFileStore::in_dir(dir.path());
        assert_eq!(
            reopened.get("favoriteRepos").unwrap(),
            Some(json!([{"id": 3}]))
        );
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper").join("still");
        let mut store = JsonFileStore::in_dir(&nested);
        store.set("k", json!("v")).unwrap();
        assert!(nested.join(JsonFileStore::FILE_NAME).exists());
        assert!(!nested.join("store.json.tmp").exists());
    }
}
