// ABOUTME: Default push/pull/legs routines returned when no plans are stored
// ABOUTME: Seeds the plan store for first-run users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{TrainingDay, WorkoutPlan};

/// Push/pull/legs split scheduled Monday, Wednesday and Friday
#[must_use]
pub fn default_plans() -> Vec<WorkoutPlan> {
    vec![
        WorkoutPlan::new(
            "ppl_push",
            "Push Power",
            Some(TrainingDay::Monday),
            vec!["bench_press".to_owned(), "incline_db_press".to_owned()],
        ),
        WorkoutPlan::new(
            "ppl_pull",
            "Pull & Deadlift",
            Some(TrainingDay::Wednesday),
            vec!["deadlift".to_owned(), "rdl".to_owned()],
        ),
        WorkoutPlan::new(
            "ppl_legs",
            "Leg Destruction",
            Some(TrainingDay::Friday),
            vec!["squat".to_owned(), "front_squat".to_owned()],
        ),
    ]
}
