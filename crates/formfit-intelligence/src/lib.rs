// ABOUTME: Training intelligence for FormFit: overload engine, derived stats, progress
// ABOUTME: Pure functions over core models with no storage or network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FormFit` Intelligence
//!
//! Deterministic decision logic consumed by the workout session flow:
//!
//! - **progression**: next-session weight and rep target from the last performance
//! - **`derived_stats`**: experience level and daily protein target from the profile
//! - **progress**: chronological weight series and gain summary for an exercise
//!
//! Everything here is synchronous and side-effect free, so it can be called
//! from any thread without coordination.

/// Progressive overload recommendation engine
pub mod progression;

/// Experience level and protein target calculators
pub mod derived_stats;

/// Per-exercise progress series and summary
pub mod progress;

pub use derived_stats::{compute_experience_level, compute_protein_target, ExperienceLevel};
pub use progress::{ProgressPoint, ProgressSeries, ProgressSummary};
pub use progression::{classify_performance, compute_next_target, compute_target_for};
