// ABOUTME: Integration tests for the keyed record stores and the log repository
// ABOUTME: Covers memory and file backends, persistence across reopen, and history order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use common::{at, init_test_logging, log_at};
use formfit::config::StorageBackend;
use formfit::errors::{AppError, ErrorCode};
use formfit::storage::{
    get_json, open_store, set_json, update_json, FileStore, InMemoryStore, KeyValueStore,
    LogStore,
};
use serde_json::json;
use tempfile::TempDir;

fn exercise_backend(store: &dyn KeyValueStore) -> Result<()> {
    assert!(store.get("formfit_logs")?.is_none());

    store.set("formfit_logs", json!([{"a": 1}]))?;
    assert_eq!(store.get("formfit_logs")?, Some(json!([{"a": 1}])));

    store.set("formfit_logs", json!([]))?;
    assert_eq!(store.get("formfit_logs")?, Some(json!([])));

    store.remove("formfit_logs")?;
    assert!(store.get("formfit_logs")?.is_none());
    store.remove("formfit_logs")?;
    Ok(())
}

#[test]
fn test_memory_backend_contract() -> Result<()> {
    init_test_logging();
    let store = InMemoryStore::new();
    exercise_backend(&store)?;
    assert_eq!(store.backend_name(), "memory");
    Ok(())
}

#[test]
fn test_file_backend_contract() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    let store = FileStore::open(dir.path().join("nested"))?;
    exercise_backend(&store)?;
    assert_eq!(store.backend_name(), "file");
    Ok(())
}

#[test]
fn test_file_store_survives_reopen() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    {
        let store = FileStore::open(dir.path())?;
        set_json(&store, "formfit_profile", &json!({"name": "Sam"}))?;
    }

    let reopened = FileStore::open(dir.path())?;
    let value: Option<serde_json::Value> = get_json(&reopened, "formfit_profile")?;
    assert_eq!(value, Some(json!({"name": "Sam"})));
    Ok(())
}

#[test]
fn test_file_store_rejects_path_like_keys() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::open(dir.path())?;
    let err = store.set("../escape", json!(1)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(store.get("").is_err());
    Ok(())
}

#[test]
fn test_file_store_reports_corrupt_records() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::open(dir.path())?;
    fs::write(dir.path().join("formfit_logs.json"), "{not json")?;
    let err = store.get("formfit_logs").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    Ok(())
}

#[test]
fn test_open_store_selects_backend() -> Result<()> {
    let dir = TempDir::new()?;
    let memory = open_store(&StorageBackend::Memory)?;
    assert_eq!(memory.backend_name(), "memory");

    let file = open_store(&StorageBackend::File {
        path: dir.path().to_path_buf(),
    })?;
    assert_eq!(file.backend_name(), "file");
    Ok(())
}

#[test]
fn test_history_is_newest_first() -> Result<()> {
    init_test_logging();
    let logs = LogStore::new(Arc::new(InMemoryStore::new()));
    logs.save_log(&log_at("squat", 2_000, 62.5, 8, 7.0))?;
    logs.save_log(&log_at("bench_press", 2_500, 40.0, 8, 6.0))?;
    logs.save_log(&log_at("squat", 1_000, 60.0, 8, 6.0))?;
    logs.save_log(&log_at("squat", 3_000, 65.0, 6, 9.0))?;

    let history = logs.history_for_exercise("squat")?;
    let weights: Vec<f64> = history.iter().map(|log| log.weight_used).collect();
    assert_eq!(weights, vec![65.0, 62.5, 60.0]);

    let last = logs.last_log("squat")?.unwrap();
    assert_eq!(last, history[0]);
    assert_eq!(logs.all_logs()?.len(), 4);
    Ok(())
}

#[test]
fn test_same_timestamp_prefers_latest_write() -> Result<()> {
    let logs = LogStore::new(Arc::new(InMemoryStore::new()));
    logs.save_log(&log_at("rdl", 5_000, 50.0, 10, 7.0))?;
    logs.save_log(&log_at("rdl", 5_000, 52.5, 10, 7.0))?;
    logs.save_log(&log_at("rdl", 4_000, 47.5, 10, 7.0))?;

    let weights: Vec<f64> = logs
        .history_for_exercise("rdl")?
        .iter()
        .map(|log| log.weight_used)
        .collect();
    assert_eq!(weights, vec![52.5, 50.0, 47.5]);

    let last = logs.last_log("rdl")?.unwrap();
    assert!((last.weight_used - 52.5).abs() < f64::EPSILON);
    Ok(())
}

const WRITERS: usize = 8;
const APPENDS_PER_WRITER: usize = 50;

fn append_concurrently(logs: &LogStore) {
    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let logs = logs.clone();
            scope.spawn(move || {
                for n in 0..APPENDS_PER_WRITER {
                    let millis = i64::try_from(writer * APPENDS_PER_WRITER + n).unwrap();
                    logs.save_log(&log_at("squat", millis, 60.0, 8, 7.0)).unwrap();
                }
            });
        }
    });
}

#[test]
fn test_concurrent_appends_keep_every_log() -> Result<()> {
    init_test_logging();
    let logs = LogStore::new(Arc::new(InMemoryStore::new()));
    append_concurrently(&logs);

    assert_eq!(logs.all_logs()?.len(), WRITERS * APPENDS_PER_WRITER);
    assert_eq!(
        logs.last_log("squat")?.unwrap().date,
        at(i64::try_from(WRITERS * APPENDS_PER_WRITER - 1)?)
    );
    Ok(())
}

#[test]
fn test_concurrent_appends_keep_every_log_in_file_store() -> Result<()> {
    let dir = TempDir::new()?;
    let logs = LogStore::new(Arc::new(FileStore::open(dir.path())?));
    append_concurrently(&logs);

    let reopened = LogStore::new(Arc::new(FileStore::open(dir.path())?));
    assert_eq!(reopened.all_logs()?.len(), WRITERS * APPENDS_PER_WRITER);
    Ok(())
}

#[test]
fn test_update_skips_write_and_surfaces_apply_errors() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::open(dir.path())?;

    update_json(&store, "formfit_plans", |_: Option<Vec<u32>>| Ok(None))?;
    assert!(store.get("formfit_plans")?.is_none());

    set_json(&store, "formfit_plans", &[1_u32])?;
    let err = update_json(&store, "formfit_plans", |_: Option<Vec<u32>>| {
        Err(AppError::invalid_input("rejected"))
    })
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(get_json::<Vec<u32>>(&store, "formfit_plans")?, Some(vec![1]));
    Ok(())
}

#[test]
fn test_unknown_exercise_has_no_history() -> Result<()> {
    let logs = LogStore::new(Arc::new(InMemoryStore::new()));
    logs.save_log(&log_at("squat", 1_000, 60.0, 8, 6.0))?;
    assert!(logs.history_for_exercise("deadlift")?.is_empty());
    assert!(logs.last_log("deadlift")?.is_none());
    Ok(())
}

#[test]
fn test_logs_persist_in_file_store() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    {
        let logs = LogStore::new(Arc::new(FileStore::open(dir.path())?));
        logs.save_log(&log_at("deadlift", 1_000, 80.0, 5, 8.0))?;
    }

    let logs = LogStore::new(Arc::new(FileStore::open(dir.path())?));
    let last = logs.last_log("deadlift")?.unwrap();
    assert_eq!(last, log_at("deadlift", 1_000, 80.0, 5, 8.0));

    let raw = fs::read_to_string(dir.path().join("formfit_logs.json"))?;
    assert!(raw.contains("\"exerciseId\": \"deadlift\""));
    Ok(())
}
