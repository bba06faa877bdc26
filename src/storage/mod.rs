// ABOUTME: Keyed record store abstraction with in-memory and file backends
// ABOUTME: Typed repositories for performance logs, workout plans, and the user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Records are JSON values stored under fixed keys (see
//! [`formfit_core::constants::storage_keys`]). Backends implement
//! [`KeyValueStore`]; the typed repositories ([`LogStore`], [`PlanStore`],
//! [`ProfileStore`]) work over any backend.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use formfit::storage::{InMemoryStore, LogStore};
//!
//! # fn example() -> formfit_core::errors::AppResult<()> {
//! let logs = LogStore::new(Arc::new(InMemoryStore::new()));
//! let last = logs.last_log("squat")?;
//! assert!(last.is_none());
//! # Ok(())
//! # }
//! ```

/// One JSON file per key
pub mod file;
/// Performance log repository
pub mod logs;
/// Concurrent in-memory backend
pub mod memory;
/// Workout plan repository
pub mod plans;
/// User profile repository
pub mod profile;

use std::sync::Arc;

use formfit_core::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use file::FileStore;
pub use logs::LogStore;
pub use memory::InMemoryStore;
pub use plans::PlanStore;
pub use profile::ProfileStore;

use crate::config::StorageBackend;

/// Keyed record store
///
/// Implementations must be safe to share across threads. A key that has
/// never been written reads as `None`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the stored value
    /// is not valid JSON
    fn get(&self, key: &str) -> AppResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: Value) -> AppResult<()>;

    /// Remove `key`; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;

    /// Atomically replace the value under `key` with the result of `apply`
    ///
    /// `apply` receives the current value and returns the value to store, or
    /// `None` to leave the record untouched. No other write to the store can
    /// interleave between the read and the write. `apply` must not call back
    /// into the same store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or written, or the
    /// error returned by `apply`
    fn update(&self, key: &str, apply: &mut UpdateFn<'_>) -> AppResult<()>;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// Read-modify-write step passed to [`KeyValueStore::update`]
pub type UpdateFn<'a> = dyn FnMut(Option<Value>) -> AppResult<Option<Value>> + 'a;

/// Read and decode a typed record
///
/// # Errors
///
/// Returns an error if the read fails or the value does not decode as `T`
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    store.get(key)?.map(|value| decode(key, value)).transpose()
}

/// Encode and write a typed record
///
/// # Errors
///
/// Returns an error if encoding or the write fails
pub fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let encoded = serde_json::to_value(value)?;
    store.set(key, encoded)
}

/// Atomically decode, modify, and re-encode a typed record
///
/// `apply` receives the decoded current value and returns the value to
/// write, or `None` to skip the write.
///
/// # Errors
///
/// Returns an error if the stored value does not decode as `T`, encoding or
/// the backend fails, or `apply` fails
pub fn update_json<T, F>(store: &dyn KeyValueStore, key: &str, mut apply: F) -> AppResult<()>
where
    T: Serialize + DeserializeOwned,
    F: FnMut(Option<T>) -> AppResult<Option<T>>,
{
    store.update(key, &mut |current| {
        let current = current.map(|value| decode(key, value)).transpose()?;
        match apply(current)? {
            Some(next) => Ok(Some(serde_json::to_value(next)?)),
            None => Ok(None),
        }
    })
}

fn decode<T: DeserializeOwned>(key: &str, value: Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| {
        AppError::serialization(format!("Stored value under {key} is malformed: {e}"))
            .with_resource_id(key)
            .with_source(e)
    })
}

/// Build the store selected by configuration
///
/// # Errors
///
/// Returns an error if the file store directory cannot be created
pub fn open_store(backend: &StorageBackend) -> AppResult<Arc<dyn KeyValueStore>> {
    match backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryStore::new())),
        StorageBackend::File { path } => Ok(Arc::new(FileStore::open(path.clone())?)),
    }
}
