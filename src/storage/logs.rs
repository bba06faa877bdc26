// ABOUTME: Append-only repository of exercise performance logs
// ABOUTME: Provides per-exercise history in newest-first order and the latest log lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Reverse;
use std::sync::Arc;

use formfit_core::constants::storage_keys;
use formfit_core::errors::AppResult;
use formfit_core::models::ExercisePerformanceLog;
use tracing::debug;

use super::{get_json, update_json, KeyValueStore};

/// Performance log repository
#[derive(Clone)]
pub struct LogStore {
    store: Arc<dyn KeyValueStore>,
}

impl LogStore {
    /// Wrap a backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Every stored log in insertion order; empty when nothing is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails or the stored list is malformed
    pub fn all_logs(&self) -> AppResult<Vec<ExercisePerformanceLog>> {
        Ok(get_json(self.store.as_ref(), storage_keys::LOGS)?.unwrap_or_default())
    }

    /// Append a log
    ///
    /// Concurrent appends through any handle on the same backend are all kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails
    pub fn save_log(&self, log: &ExercisePerformanceLog) -> AppResult<()> {
        let mut total_logs = 0;
        update_json(
            self.store.as_ref(),
            storage_keys::LOGS,
            |current: Option<Vec<ExercisePerformanceLog>>| {
                let mut logs = current.unwrap_or_default();
                logs.push(log.clone());
                total_logs = logs.len();
                Ok(Some(logs))
            },
        )?;
        debug!(
            exercise.id = %log.exercise_id,
            total_logs,
            "Appended performance log"
        );
        Ok(())
    }

    /// Logs for one exercise, newest first
    ///
    /// Logs sharing a timestamp come out latest-written first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    pub fn history_for_exercise(
        &self,
        exercise_id: &str,
    ) -> AppResult<Vec<ExercisePerformanceLog>> {
        let mut history: Vec<ExercisePerformanceLog> = self
            .all_logs()?
            .into_iter()
            .filter(|log| log.exercise_id == exercise_id)
            .collect();
        history.reverse();
        history.sort_by_key(|log| Reverse(log.date));
        Ok(history)
    }

    /// Most recent log for an exercise, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    pub fn last_log(&self, exercise_id: &str) -> AppResult<Option<ExercisePerformanceLog>> {
        Ok(self.history_for_exercise(exercise_id)?.into_iter().next())
    }
}
