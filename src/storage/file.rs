// ABOUTME: File-backed keyed record store writing one JSON document per key
// ABOUTME: Writes go through a temp file and rename so a crash never leaves a torn record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use formfit_core::errors::{AppError, AppResult};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use super::{KeyValueStore, UpdateFn};
use crate::logging::AppLogger;

/// Store that keeps `<key>.json` files under a data directory
///
/// Clones share one write lock, so writes through any clone are serialized.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::storage(format!(
                "Cannot create data directory {}: {e}",
                root.display()
            ))
            .with_source(e)
        })?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self {
            root,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Directory holding the records
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // The guarded data is (); a panic mid-write leaves nothing to repair
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self, key: &str) -> AppResult<Option<Value>> {
        let path = self.path_for(key)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!("Cannot read {}: {e}", path.display()))
                    .with_resource_id(key)
                    .with_source(e));
            }
        };
        let value = serde_json::from_str(&raw).map_err(|e| {
            AppError::serialization(format!("{} is not valid JSON: {e}", path.display()))
                .with_resource_id(key)
                .with_source(e)
        })?;
        Ok(Some(value))
    }

    fn write(&self, key: &str, value: &Value) -> AppResult<()> {
        let start = Instant::now();
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.{}.tmp", Uuid::new_v4()));

        let encoded = serde_json::to_vec_pretty(value)?;
        let result = fs::write(&tmp, encoded).and_then(|()| fs::rename(&tmp, &path));
        if result.is_err() {
            // Best effort; the original error is what matters
            let _ = fs::remove_file(&tmp);
        }

        AppLogger::log_storage_operation(
            "set",
            key,
            result.is_ok(),
            start.elapsed().as_millis() as u64,
        );
        result.map_err(|e| {
            AppError::storage(format!("Cannot write {}: {e}", path.display()))
                .with_resource_id(key)
                .with_source(e)
        })
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::invalid_input(format!("Invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        self.read(key)
    }

    fn set(&self, key: &str, value: Value) -> AppResult<()> {
        let _guard = self.lock_writes();
        self.write(key, &value)
    }

    fn update(&self, key: &str, apply: &mut UpdateFn<'_>) -> AppResult<()> {
        let _guard = self.lock_writes();
        match apply(self.read(key)?)? {
            Some(next) => self.write(key, &next),
            None => Ok(()),
        }
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let _guard = self.lock_writes();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Cannot remove {}: {e}", path.display()))
                .with_resource_id(key)
                .with_source(e)),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfit_core::errors::ErrorCode;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let err = store.get("../etc/passwd").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("formfit_plans", json!([])).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["formfit_plans.json".to_owned()]);
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("formfit_logs.json"), "{oops").unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let err = store.get("formfit_logs").unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
        assert_eq!(err.context.resource_id.as_deref(), Some("formfit_logs"));
    }
}
