// ABOUTME: Derived profile statistics shown on the dashboard
// ABOUTME: Experience level banding and daily protein target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use formfit_core::constants::derived_stats::{
    ADVANCED_MIN_YEARS, INTERMEDIATE_MIN_YEARS, PROTEIN_G_PER_KG,
};
use serde::{Deserialize, Serialize};

/// Training experience band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExperienceLevel {
    /// Less than one year of training
    Beginner,
    /// One to three years
    Intermediate,
    /// Three years or more
    Advanced,
}

impl Display for ExperienceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Band training experience into a level
///
/// Lower bounds are inclusive: exactly 1.0 years is `Intermediate`, exactly
/// 3.0 is `Advanced`.
#[must_use]
pub fn compute_experience_level(years: f64) -> ExperienceLevel {
    if years < INTERMEDIATE_MIN_YEARS {
        ExperienceLevel::Beginner
    } else if years < ADVANCED_MIN_YEARS {
        ExperienceLevel::Intermediate
    } else {
        ExperienceLevel::Advanced
    }
}

/// Daily protein target in grams at 2 g per kg of body weight
///
/// Rounds half away from zero, which for real (positive) body weights is
/// round-half-up. Negative or NaN input saturates to zero.
#[must_use]
pub fn compute_protein_target(weight_kg: f64) -> u32 {
    (weight_kg * PROTEIN_G_PER_KG).round() as u32
}
