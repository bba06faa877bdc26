// ABOUTME: Performance log and workout target models for progressive overload
// ABOUTME: ExercisePerformanceLog, WorkoutTarget, and the TargetReason rule tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// One record of a completed session for an exercise
///
/// Logs are immutable once written; the log store only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePerformanceLog {
    /// Identifier of the exercise performed
    pub exercise_id: String,
    /// Completion time, stored as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Load used (kg)
    pub weight_used: f64,
    /// Repetitions completed
    pub reps_performed: u32,
    /// Rating of Perceived Exertion, nominally 1-10
    pub rpe: f64,
}

impl ExercisePerformanceLog {
    /// Create a log entry stamped with the current time
    ///
    /// The timestamp is truncated to the millisecond precision it is stored with.
    #[must_use]
    pub fn now(
        exercise_id: impl Into<String>,
        weight_used: f64,
        reps_performed: u32,
        rpe: f64,
    ) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            date: Utc::now().trunc_subsecs(3),
            weight_used,
            reps_performed,
            rpe,
        }
    }
}

/// Which overload rule produced a [`WorkoutTarget`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetReason {
    /// No history, starting from catalog defaults
    Calibration,
    /// Previous session was easy, load increased
    Overload,
    /// Target met at high effort, load held
    Maintenance,
    /// Rep target missed by more than half, load reduced
    Deload,
    /// Rep target narrowly missed, reps lowered to the achieved count
    Adaptation,
    /// Nothing else matched
    Standard,
}

impl TargetReason {
    /// Stable tag identifying the rule
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calibration => "CALIBRATION",
            Self::Overload => "OVERLOAD",
            Self::Maintenance => "MAINTENANCE",
            Self::Deload => "DELOAD",
            Self::Adaptation => "ADAPTATION",
            Self::Standard => "STANDARD",
        }
    }

    /// Sentence shown to the user alongside the target
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Calibration => "Calibration: Starting with baseline.",
            Self::Overload => "Progressive Overload: Previous set was easy (RPE < 7).",
            Self::Maintenance => "Maintenance: Good effort, reinforcing strength at this weight.",
            Self::Deload => "Deload: Missed rep target significantly. Form check.",
            Self::Adaptation => "Adaptation: Matching previous rep max to build consistency.",
            Self::Standard => "Standard: Maintaining target.",
        }
    }
}

impl Display for TargetReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Recommendation for the next session of an exercise
///
/// Computed on demand and never persisted by the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkoutTarget {
    /// Load to use next (kg)
    pub weight: f64,
    /// Rep target to use next
    pub reps: u32,
    /// Rule that fired
    pub reason: TargetReason,
}

impl WorkoutTarget {
    /// Create a new target
    #[must_use]
    pub const fn new(weight: f64, reps: u32, reason: TargetReason) -> Self {
        Self {
            weight,
            reps,
            reason,
        }
    }
}
