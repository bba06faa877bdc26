// ABOUTME: Workout session service computing targets and recording completed sets
// ABOUTME: Joins the exercise catalog, the log store, and the progressive overload engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formfit_core::constants::catalog::find_exercise;
use formfit_core::errors::{AppError, AppResult, ErrorCode};
use formfit_core::models::{ExerciseDefinition, ExercisePerformanceLog, WorkoutPlan, WorkoutTarget};
use formfit_intelligence::{compute_target_for, ProgressSeries};
use tracing::warn;

use crate::logging::AppLogger;
use crate::storage::LogStore;

/// Upper bound of the RPE scale
const MAX_RPE: f64 = 10.0;

/// An exercise in today's session with its recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    /// Catalog entry
    pub exercise: &'static ExerciseDefinition,
    /// Most recent log, if the exercise has been trained before
    pub last_log: Option<ExercisePerformanceLog>,
    /// Recommendation for this session
    pub target: WorkoutTarget,
}

/// Session workflow over the log store
#[derive(Clone)]
pub struct WorkoutSessionService {
    logs: LogStore,
}

impl WorkoutSessionService {
    /// Create a service over a log repository
    #[must_use]
    pub const fn new(logs: LogStore) -> Self {
        Self { logs }
    }

    /// Targets for every known exercise in a plan, in plan order
    ///
    /// Unknown exercise ids are skipped with a warning.
    #[must_use]
    pub fn plan_targets(&self, plan: &WorkoutPlan) -> Vec<PlannedExercise> {
        plan.exercise_ids
            .iter()
            .filter_map(|id| {
                let exercise = find_exercise(id);
                if exercise.is_none() {
                    warn!(
                        plan.id = %plan.id,
                        exercise.id = %id,
                        "Plan references unknown exercise"
                    );
                }
                exercise
            })
            .map(|exercise| self.plan_exercise(exercise))
            .collect()
    }

    /// Target for a single exercise
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise is not in the catalog
    pub fn target_for(&self, exercise_id: &str) -> AppResult<PlannedExercise> {
        Ok(self.plan_exercise(lookup(exercise_id)?))
    }

    /// Record a completed set stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown exercise, `ValueOutOfRange`
    /// for a negative weight or an RPE outside 0-10, or a storage error
    pub fn record_set(
        &self,
        exercise_id: &str,
        weight: f64,
        reps: u32,
        rpe: f64,
    ) -> AppResult<ExercisePerformanceLog> {
        let exercise = lookup(exercise_id)?;
        if !(0.0..=f64::MAX).contains(&weight) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("Weight must be a non-negative number, got {weight}"),
            ));
        }
        if !(0.0..=MAX_RPE).contains(&rpe) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("RPE must be between 0 and {MAX_RPE}, got {rpe}"),
            ));
        }

        let log = ExercisePerformanceLog::now(exercise.id.as_str(), weight, reps, rpe);
        self.logs.save_log(&log)?;
        AppLogger::log_set_recorded(&log.exercise_id, weight, reps, rpe);
        Ok(log)
    }

    /// Logs for an exercise, newest first
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown exercise or a storage error
    pub fn history(&self, exercise_id: &str) -> AppResult<Vec<ExercisePerformanceLog>> {
        let exercise = lookup(exercise_id)?;
        self.logs.history_for_exercise(&exercise.id)
    }

    /// Chronological load series for an exercise
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown exercise or a storage error
    pub fn progress(&self, exercise_id: &str) -> AppResult<ProgressSeries> {
        Ok(ProgressSeries::from_history(&self.history(exercise_id)?))
    }

    fn plan_exercise(&self, exercise: &'static ExerciseDefinition) -> PlannedExercise {
        let last_log = self.logs.last_log(&exercise.id).unwrap_or_else(|e| {
            warn!(
                exercise.id = %exercise.id,
                error = %e,
                "Log lookup failed, treating as no history"
            );
            None
        });
        let target = compute_target_for(exercise, last_log.as_ref());
        AppLogger::log_target_computed(&exercise.id, target.weight, target.reps, target.reason);
        PlannedExercise {
            exercise,
            last_log,
            target,
        }
    }
}

fn lookup(exercise_id: &str) -> AppResult<&'static ExerciseDefinition> {
    find_exercise(exercise_id).ok_or_else(|| {
        AppError::not_found(format!("Exercise {exercise_id}")).with_resource_id(exercise_id)
    })
}
