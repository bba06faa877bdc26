// ABOUTME: Exercise catalog entry model with default load and rep target
// ABOUTME: ExerciseDefinition and MuscleGroup definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Muscle group bucket used to organize the exercise library
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MuscleGroup {
    /// Squat patterns
    Legs,
    /// Pressing movements
    Push,
    /// Hinges and pulls
    Pull,
}

impl Display for MuscleGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Legs => write!(f, "Legs"),
            Self::Push => write!(f, "Push"),
            Self::Pull => write!(f, "Pull"),
        }
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legs" => Ok(Self::Legs),
            "push" => Ok(Self::Push),
            "pull" => Ok(Self::Pull),
            other => Err(AppError::invalid_input(format!(
                "Unknown muscle group '{other}' (expected legs, push or pull)"
            ))),
        }
    }
}

/// Static catalog entry for an exercise
///
/// Reference data, identical for every user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDefinition {
    /// Stable identifier (e.g. `bench_press`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Demonstration image
    pub image_url: String,
    /// Baseline recommended weight (kg) for a user with no history
    pub default_weight: f64,
    /// Canonical rep target for the current programming cycle
    pub target_reps: u32,
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Short coaching cues
    pub instructions: String,
}
