//! Cache Store Module
//!
//! JSON-file-backed mapping from a string key to an arbitrary JSON value.
//! The file is the only source of truth: every read loads it fresh and every
//! mutation rewrites it wholesale.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::StoreError;

// == Json File Store ==
/// Flat cache stored as one pretty-printed JSON object.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Backing file
    path: PathBuf,
}

impl JsonFileStore {
    // == Constructor ==
    /// Creates a store backed by `path`. Nothing touches the disk until the first load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Load ==
    /// Reads the whole mapping.
    ///
    /// A missing file is initialized to `{}`. Unreadable or non-object
    /// content is treated as an empty mapping; this never fails.
    pub fn load(&self) -> Map<String, Value> {
        if !self.path.exists() {
            let empty = Map::new();
            if let Err(e) = self.save(&empty) {
                warn!("Could not initialize cache file: {}", e);
            }
            return empty;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Could not read cache file {}: {}", self.path.display(), e);
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!(
                    "Cache file {} is not a JSON object, treating as empty",
                    self.path.display()
                );
                Map::new()
            }
        }
    }

    // == Save ==
    /// Overwrites the backing file with `map`.
    ///
    /// Each save writes its own temp file next to the target and renames it
    /// into place, so readers never see a truncated file and concurrent
    /// saves never share a temp file.
    pub fn save(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(map)?;

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
                parent
            }
            None => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| self.write_error(e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| self.write_error(e))?;
        temp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        debug!("Saved {} cache entries to {}", map.len(), self.path.display());
        Ok(())
    }

    // == Delete ==
    /// Removes `key` and persists. Returns whether the key was present.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut map = self.load();
        if map.remove(key).is_none() {
            return Ok(false);
        }
        self.save(&map)?;
        Ok(true)
    }

    // == Contains ==
    /// Returns true if `key` is cached.
    pub fn contains(&self, key: &str) -> bool {
        self.load().contains_key(key)
    }

    // == Get ==
    /// Reads `key` as `T`. A value of the wrong shape counts as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.load().remove(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                warn!("Ignoring cache entry '{}' with unexpected shape: {}", key, e);
                None
            }
        }
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous value, and persists.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let mut map = self.load();
        map.insert(key.to_string(), serde_json::to_value(value)?);
        self.save(&map)
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PostEntry;
    use serde_json::json;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("cache.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_creates_empty_object() {
        let (_dir, store) = temp_store();

        assert!(store.load().is_empty());
        assert!(store.path().exists());
        assert_eq!(fs::read_to_string(store.path()).unwrap().trim(), "{}");
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{not json").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_non_object_is_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "[1, 2, 3]").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_heals_on_write() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "garbage").unwrap();

        store.put("alice", &"profile").unwrap();

        assert_eq!(store.get::<String>("alice").as_deref(), Some("profile"));
    }

    #[test]
    fn test_put_and_get_string() {
        let (_dir, store) = temp_store();

        store.put("alice", &"Lieu de vie: Paris").unwrap();

        assert_eq!(
            store.get::<String>("alice"),
            Some("Lieu de vie: Paris".to_string())
        );
        assert!(store.contains("alice"));
    }

    #[test]
    fn test_put_and_get_post_entry() {
        let (_dir, store) = temp_store();
        let entry = PostEntry {
            summary: Some("résumé".to_string()),
            answer: None,
        };

        store.put("https://www.reddit.com/r/x/comments/abc/", &entry).unwrap();

        let read: PostEntry = store.get("https://www.reddit.com/r/x/comments/abc/").unwrap();
        assert_eq!(read, entry);
    }

    #[test]
    fn test_non_ascii_written_verbatim() {
        let (_dir, store) = temp_store();

        store.put("bob", &"métier: développeur").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("métier: développeur"));
    }

    #[test]
    fn test_get_wrong_shape_is_none() {
        let (_dir, store) = temp_store();
        store.put("alice", &json!({"summary": 42})).unwrap();

        assert!(store.get::<PostEntry>("alice").is_none());
    }

    #[test]
    fn test_delete() {
        let (_dir, store) = temp_store();
        store.put("alice", &"a").unwrap();
        store.put("bob", &"b").unwrap();

        assert!(store.delete("alice").unwrap());
        assert!(!store.contains("alice"));
        assert!(store.contains("bob"));
    }

    #[test]
    fn test_delete_missing_key() {
        let (_dir, store) = temp_store();

        assert!(!store.delete("ghost").unwrap());
    }

    #[test]
    fn test_overwrite() {
        let (_dir, store) = temp_store();
        store.put("alice", &"old").unwrap();
        store.put("alice", &"new").unwrap();

        assert_eq!(store.get::<String>("alice").as_deref(), Some("new"));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/cache.json"));

        store.put("k", &"v").unwrap();

        assert!(store.path().exists());
        let leftovers: Vec<_> = fs::read_dir(dir.path().join("nested/deeper"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec!["cache.json"]);
    }

    #[test]
    fn test_concurrent_puts_keep_file_intact() {
        let (_dir, store) = temp_store();
        store.put("seed", &"untouched").unwrap();

        let failures: usize = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8)
                .map(|worker| {
                    let store = &store;
                    scope.spawn(move || {
                        (0..100)
                            .filter(|i| {
                                let key = format!("worker{}-{}", worker, i);
                                store.put(&key, &i).is_err()
                            })
                            .count()
                    })
                })
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).sum()
        });

        assert_eq!(failures, 0);
        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["seed"], "untouched");
        assert_eq!(store.get::<String>("seed").as_deref(), Some("untouched"));
    }
}
