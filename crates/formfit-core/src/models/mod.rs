// ABOUTME: Core data models for the FormFit training tracker
// ABOUTME: Re-exports exercise, performance log, profile, plan, and diet types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records persisted by the storage layer use camelCase field names so that
//! existing browser-exported data (`formfit_logs`, `formfit_plans`,
//! `formfit_profile`) loads without conversion.
//!
//! - `ExercisePerformanceLog`: one completed session for an exercise (append-only)
//! - `ExerciseDefinition`: static catalog entry with default weight and rep target
//! - `WorkoutTarget`: recommendation produced by the progressive overload engine
//! - `UserProfile`: onboarding data used for derived stats and diet prompts
//! - `WorkoutPlan`: named routine with an ordered exercise list
//! - `DailyDietPlan`: structured diet plan returned by the AI service

mod diet;
mod exercise;
mod performance;
mod plan;
mod profile;

pub use diet::{DailyDietPlan, DietGoal, DietMeal, MealType};
pub use exercise::{ExerciseDefinition, MuscleGroup};
pub use performance::{ExercisePerformanceLog, TargetReason, WorkoutTarget};
pub use plan::{TrainingDay, WorkoutPlan};
pub use profile::{Allergy, DietType, UserProfile};
