// ABOUTME: Progress analytics for a single exercise's performance history
// ABOUTME: Chronological weight/rep series and starting-vs-current gain summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use formfit_core::models::ExercisePerformanceLog;
use serde::{Deserialize, Serialize};

/// One point of the weight chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressPoint {
    /// Session date
    pub date: DateTime<Utc>,
    /// Load used (kg)
    pub weight: f64,
    /// Reps performed
    pub reps: u32,
}

/// Start-to-current comparison for an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressSummary {
    /// Load of the oldest session (kg)
    pub starting_weight: f64,
    /// Load of the newest session (kg)
    pub current_weight: f64,
    /// `current_weight - starting_weight`, negative after a deload
    pub total_gain: f64,
}

/// Chronological series built from an exercise's history
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressSeries {
    points: Vec<ProgressPoint>,
}

impl ProgressSeries {
    /// Build the series from history in any order
    #[must_use]
    pub fn from_history(history: &[ExercisePerformanceLog]) -> Self {
        let mut points: Vec<ProgressPoint> = history
            .iter()
            .map(|log| ProgressPoint {
                date: log.date,
                weight: log.weight_used,
                reps: log.reps_performed,
            })
            .collect();
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// Points oldest first
    #[must_use]
    pub fn points(&self) -> &[ProgressPoint] {
        &self.points
    }

    /// Number of sessions in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Heaviest load in the series
    #[must_use]
    pub fn best_weight(&self) -> Option<f64> {
        self.points.iter().map(|p| p.weight).reduce(f64::max)
    }

    /// Gain summary, `None` until there are at least two sessions
    #[must_use]
    pub fn summary(&self) -> Option<ProgressSummary> {
        if self.points.len() < 2 {
            return None;
        }
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some(ProgressSummary {
            starting_weight: first.weight,
            current_weight: last.weight,
            total_gain: last.weight - first.weight,
        })
    }
}
