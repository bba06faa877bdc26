// ABOUTME: Progressive overload engine computing the next session's weight and reps
// ABOUTME: Ordered first-match rule table over the most recent performance log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progressive Overload Engine
//!
//! Rules, evaluated top to bottom (first match wins):
//!
//! | # | Condition                                          | Weight        | Reps      | Reason        |
//! |---|----------------------------------------------------|---------------|-----------|---------------|
//! | 1 | no history                                         | default       | target    | `CALIBRATION` |
//! | 2 | `rpe < 7` and reps >= target                       | last + 2.5    | target    | `OVERLOAD`    |
//! | 3 | reps >= target and `7 <= rpe <= 9`                 | last          | target    | `MAINTENANCE` |
//! | 4 | reps < target and reps < target * 0.5              | last - 5      | target    | `DELOAD`      |
//! | 5 | reps < target                                      | last          | performed | `ADAPTATION`  |
//! | 6 | anything else (e.g. `rpe == 10` with target met)   | last          | target    | `STANDARD`    |
//!
//! The engine is total: out-of-range or NaN inputs are routed through the
//! numeric predicates like any other value and end in rule 6 when nothing
//! else matches. A maximal-effort success (`rpe` above 9) deliberately lands
//! in `STANDARD` rather than `MAINTENANCE`.

use formfit_core::constants::progression::{
    DELOAD_DECREMENT_KG, EASY_RPE_CEILING, HARD_RPE_CEILING, OVERLOAD_INCREMENT_KG,
    SEVERE_MISS_RATIO,
};
use formfit_core::models::{
    ExerciseDefinition, ExercisePerformanceLog, TargetReason, WorkoutTarget,
};
use tracing::trace;

/// Decide which overload rule applies to the last performance
///
/// `None` means the user has no history for the exercise.
#[must_use]
pub fn classify_performance(
    last_log: Option<&ExercisePerformanceLog>,
    target_reps: u32,
) -> TargetReason {
    let Some(log) = last_log else {
        return TargetReason::Calibration;
    };

    let rpe = log.rpe;
    let reps = log.reps_performed;
    let target_met = reps >= target_reps;

    if rpe < EASY_RPE_CEILING && target_met {
        return TargetReason::Overload;
    }
    if target_met && (EASY_RPE_CEILING..=HARD_RPE_CEILING).contains(&rpe) {
        return TargetReason::Maintenance;
    }
    if !target_met {
        // Strict comparison: exactly half the target is a mild miss
        if f64::from(reps) < f64::from(target_reps) * SEVERE_MISS_RATIO {
            return TargetReason::Deload;
        }
        return TargetReason::Adaptation;
    }

    TargetReason::Standard
}

/// Compute the next session's target from the most recent performance
///
/// Pure and deterministic: identical inputs always yield identical output.
#[must_use]
pub fn compute_next_target(
    last_log: Option<&ExercisePerformanceLog>,
    default_weight: f64,
    target_reps: u32,
) -> WorkoutTarget {
    let reason = classify_performance(last_log, target_reps);

    let target = match (reason, last_log) {
        (TargetReason::Calibration, _) | (_, None) => {
            WorkoutTarget::new(default_weight, target_reps, TargetReason::Calibration)
        }
        (TargetReason::Overload, Some(log)) => {
            WorkoutTarget::new(log.weight_used + OVERLOAD_INCREMENT_KG, target_reps, reason)
        }
        (TargetReason::Deload, Some(log)) => {
            WorkoutTarget::new(log.weight_used - DELOAD_DECREMENT_KG, target_reps, reason)
        }
        (TargetReason::Adaptation, Some(log)) => {
            WorkoutTarget::new(log.weight_used, log.reps_performed, reason)
        }
        (TargetReason::Maintenance | TargetReason::Standard, Some(log)) => {
            WorkoutTarget::new(log.weight_used, target_reps, reason)
        }
    };

    trace!(
        reason = %target.reason,
        weight = target.weight,
        reps = target.reps,
        "Computed next workout target"
    );

    target
}

/// Compute the next target using a catalog entry's defaults
#[must_use]
pub fn compute_target_for(
    definition: &ExerciseDefinition,
    last_log: Option<&ExercisePerformanceLog>,
) -> WorkoutTarget {
    compute_next_target(last_log, definition.default_weight, definition.target_reps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use formfit_core::models::MuscleGroup;

    fn log(weight_used: f64, reps_performed: u32, rpe: f64) -> ExercisePerformanceLog {
        ExercisePerformanceLog {
            exercise_id: "squat".to_owned(),
            date: Utc::now(),
            weight_used,
            reps_performed,
            rpe,
        }
    }

    #[test]
    fn test_rpe_between_nine_and_ten_falls_through() {
        let target = compute_next_target(Some(&log(60.0, 8, 9.5)), 60.0, 8);
        assert_eq!(target.reason, TargetReason::Standard);
    }

    #[test]
    fn test_nan_rpe_with_target_met_is_standard() {
        let target = compute_next_target(Some(&log(60.0, 8, f64::NAN)), 60.0, 8);
        assert_eq!(target, WorkoutTarget::new(60.0, 8, TargetReason::Standard));
    }

    #[test]
    fn test_rpe_ignored_on_rep_failure() {
        // Easy effort does not rescue a missed target
        let target = compute_next_target(Some(&log(60.0, 7, 3.0)), 60.0, 8);
        assert_eq!(target.reason, TargetReason::Adaptation);
        assert_eq!(target.reps, 7);
    }

    #[test]
    fn test_zero_target_reps_is_always_met() {
        let target = compute_next_target(Some(&log(40.0, 0, 5.0)), 60.0, 0);
        assert_eq!(target, WorkoutTarget::new(42.5, 0, TargetReason::Overload));
    }

    #[test]
    fn test_odd_target_half_boundary() {
        // 9 * 0.5 = 4.5: four reps is severe, five is mild
        assert_eq!(classify_performance(Some(&log(50.0, 4, 8.0)), 9), TargetReason::Deload);
        assert_eq!(
            classify_performance(Some(&log(50.0, 5, 8.0)), 9),
            TargetReason::Adaptation
        );
    }

    #[test]
    fn test_compute_target_for_definition() {
        let definition = ExerciseDefinition {
            id: "deadlift".to_owned(),
            name: "Deadlift".to_owned(),
            image_url: String::new(),
            default_weight: 80.0,
            target_reps: 5,
            muscle_group: MuscleGroup::Pull,
            instructions: String::new(),
        };
        let target = compute_target_for(&definition, None);
        assert_eq!(target, WorkoutTarget::new(80.0, 5, TargetReason::Calibration));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_no_history_is_calibration(default in 0.0_f64..500.0, target in 0_u32..50) {
                let next = compute_next_target(None, default, target);
                let expected = WorkoutTarget::new(default, target, TargetReason::Calibration);
                prop_assert_eq!(next, expected);
            }

            #[test]
            fn prop_easy_success_adds_increment(
                weight in 0.0_f64..400.0,
                target in 1_u32..30,
                extra in 0_u32..10,
                rpe in 1_u32..=6,
            ) {
                let last = log(weight, target + extra, f64::from(rpe));
                let next = compute_next_target(Some(&last), 20.0, target);
                prop_assert_eq!(next.reason, TargetReason::Overload);
                prop_assert_eq!(next.reps, target);
                prop_assert!((next.weight - (weight + OVERLOAD_INCREMENT_KG)).abs() < 1e-9);
            }

            #[test]
            fn prop_hard_success_holds_weight(
                weight in 0.0_f64..400.0,
                target in 1_u32..30,
                rpe in 7.0_f64..=9.0,
            ) {
                let next = compute_next_target(Some(&log(weight, target, rpe)), 20.0, target);
                let expected = WorkoutTarget::new(weight, target, TargetReason::Maintenance);
                prop_assert_eq!(next, expected);
            }

            #[test]
            fn prop_miss_classification(
                weight in 0.0_f64..400.0,
                target in 1_u32..30,
                reps_seed in 0_u32..30,
                rpe in 1.0_f64..=10.0,
            ) {
                let reps = reps_seed % target;
                let next = compute_next_target(Some(&log(weight, reps, rpe)), 20.0, target);
                if f64::from(reps) < f64::from(target) * 0.5 {
                    prop_assert_eq!(next.reason, TargetReason::Deload);
                    prop_assert!((next.weight - (weight - DELOAD_DECREMENT_KG)).abs() < 1e-9);
                    prop_assert_eq!(next.reps, target);
                } else {
                    let expected = WorkoutTarget::new(weight, reps, TargetReason::Adaptation);
                    prop_assert_eq!(next, expected);
                }
            }

            #[test]
            fn prop_deterministic(
                weight in -50.0_f64..400.0,
                reps in 0_u32..40,
                rpe in -5.0_f64..15.0,
                target in 0_u32..30,
            ) {
                let last = log(weight, reps, rpe);
                prop_assert_eq!(
                    compute_next_target(Some(&last), 20.0, target),
                    compute_next_target(Some(&last), 20.0, target)
                );
            }
        }
    }
}
