// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, progression constants, service names, and the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. The exercise catalog and the
//! default routines live in their own submodules.

/// Built-in exercise library
pub mod catalog;
/// Routines offered before the user saves their own
pub mod default_plans;

/// Keys used in the keyed record store
pub mod storage_keys {
    /// Append-only list of performance logs
    pub const LOGS: &str = "formfit_logs";
    /// Single user profile record
    pub const PROFILE: &str = "formfit_profile";
    /// List of saved workout plans
    pub const PLANS: &str = "formfit_plans";
}

/// Progressive overload rule parameters
pub mod progression {
    /// RPE below which a completed session counts as easy
    pub const EASY_RPE_CEILING: f64 = 7.0;
    /// Highest RPE still treated as a controlled, hard success
    pub const HARD_RPE_CEILING: f64 = 9.0;
    /// Load added after an easy success (kg)
    pub const OVERLOAD_INCREMENT_KG: f64 = 2.5;
    /// Load removed after a severe rep failure (kg)
    pub const DELOAD_DECREMENT_KG: f64 = 5.0;
    /// Fraction of the rep target below which a miss is severe
    pub const SEVERE_MISS_RATIO: f64 = 0.5;
}

/// Derived stat parameters
pub mod derived_stats {
    /// Daily protein per kilogram of body weight (grams)
    pub const PROTEIN_G_PER_KG: f64 = 2.0;
    /// Years of training at which a lifter stops being a beginner
    pub const INTERMEDIATE_MIN_YEARS: f64 = 1.0;
    /// Years of training at which a lifter is considered advanced
    pub const ADVANCED_MIN_YEARS: f64 = 3.0;
}

/// Form coaching thresholds
pub mod coaching {
    /// RPE at or above which a completed set warrants a form tip
    pub const HIGH_RPE_THRESHOLD: f64 = 9.0;
}

/// Service names for structured logging
pub mod service_names {
    /// Main application
    pub const FORMFIT: &str = "formfit";
}
