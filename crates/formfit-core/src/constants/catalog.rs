// ABOUTME: Built-in exercise library with default loads and rep targets
// ABOUTME: Lookup helpers used by the workout session and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::OnceLock;

use crate::models::{ExerciseDefinition, MuscleGroup};

static CATALOG: OnceLock<Vec<ExerciseDefinition>> = OnceLock::new();

fn entry(
    id: &str,
    name: &str,
    image_url: &str,
    default_weight: f64,
    target_reps: u32,
    muscle_group: MuscleGroup,
    instructions: &str,
) -> ExerciseDefinition {
    ExerciseDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        image_url: image_url.to_owned(),
        default_weight,
        target_reps,
        muscle_group,
        instructions: instructions.to_owned(),
    }
}

/// All exercises in library order
#[must_use]
pub fn exercises() -> &'static [ExerciseDefinition] {
    CATALOG.get_or_init(|| {
        vec![
            entry(
                "squat",
                "Barbell Squat",
                "https://loremflickr.com/400/300/squat,gym/all",
                60.0,
                8,
                MuscleGroup::Legs,
                "Keep chest up. Drive through heels. Maintain neutral spine.",
            ),
            entry(
                "front_squat",
                "Front Squat",
                "https://loremflickr.com/400/300/frontsquat,gym/all",
                40.0,
                8,
                MuscleGroup::Legs,
                "Rest bar on front delts. Keep elbows high. Squat deep keeping torso upright.",
            ),
            entry(
                "bench_press",
                "Bench Press",
                "https://loremflickr.com/400/300/benchpress,gym/all",
                40.0,
                10,
                MuscleGroup::Push,
                "Retract scapula. Lower bar to mid-chest. Press up explosively.",
            ),
            entry(
                "incline_db_press",
                "Incline DB Press",
                "https://loremflickr.com/400/300/dumbbellpress,gym/all",
                20.0,
                12,
                MuscleGroup::Push,
                "Set bench to 30 degrees. Press weights up converging slightly at top. Control descent.",
            ),
            entry(
                "deadlift",
                "Deadlift",
                "https://loremflickr.com/400/300/deadlift,gym/all",
                80.0,
                5,
                MuscleGroup::Pull,
                "Hinge at hips. Keep bar close to shins. Lock out hips at top.",
            ),
            entry(
                "rdl",
                "Romanian Deadlift",
                "https://loremflickr.com/400/300/deadlift,hamstrings/all",
                60.0,
                10,
                MuscleGroup::Pull,
                "Hinge primarily at hips with slight knee bend. Lower until hamstring stretch.",
            ),
        ]
    })
}

/// Look up an exercise by identifier
#[must_use]
pub fn find_exercise(id: &str) -> Option<&'static ExerciseDefinition> {
    exercises().iter().find(|e| e.id == id)
}

/// Exercises belonging to a muscle group
pub fn exercises_for(group: MuscleGroup) -> impl Iterator<Item = &'static ExerciseDefinition> {
    exercises().iter().filter(move |e| e.muscle_group == group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = exercises().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), exercises().len());
    }

    #[test]
    fn test_find_exercise() {
        let squat = find_exercise("squat").unwrap();
        assert_eq!(squat.target_reps, 8);
        assert!((squat.default_weight - 60.0).abs() < f64::EPSILON);
        assert!(find_exercise("curl").is_none());
    }

    #[test]
    fn test_exercises_for_group() {
        let pulls: Vec<_> = exercises_for(MuscleGroup::Pull).map(|e| e.id.as_str()).collect();
        assert_eq!(pulls, vec!["deadlift", "rdl"]);
    }
}
