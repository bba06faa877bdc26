// ABOUTME: Domain services composing storage, the overload engine, and the AI provider
// ABOUTME: Workout sessions, diet planning, form coaching, and image editing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain services
//!
//! Each service owns the policy for one screen of the app. AI-backed
//! services take an optional provider and degrade to offline content when
//! none is configured.

/// Form coaching tips after hard or failed sets
pub mod coaching;
/// AI daily meal planner with offline and fallback plans
pub mod diet;
/// AI photo editing
pub mod image_studio;
/// Targets, set logging, and progress for a training session
pub mod session;

pub use coaching::{FormCoach, FormIssue};
pub use diet::DietPlanner;
pub use image_studio::ImageStudio;
pub use session::{PlannedExercise, WorkoutSessionService};
