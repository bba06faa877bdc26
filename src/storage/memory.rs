// ABOUTME: In-memory keyed record store backed by a concurrent map
// ABOUTME: Used by tests and by ephemeral sessions selected with FORMFIT_DATA_DIR=memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use formfit_core::errors::AppResult;
use serde_json::Value;

use super::{KeyValueStore, UpdateFn};

/// Process-local store; contents are lost when it is dropped
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, Value>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: Value) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn update(&self, key: &str, apply: &mut UpdateFn<'_>) -> AppResult<()> {
        // The entry guard holds the shard write lock until the new value is in place
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(mut occupied) => {
                if let Some(next) = apply(Some(occupied.get().clone()))? {
                    occupied.insert(next);
                }
            }
            Entry::Vacant(vacant) => {
                if let Some(next) = apply(None)? {
                    vacant.insert(next);
                }
            }
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
