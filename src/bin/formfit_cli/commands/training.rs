// ABOUTME: Training commands for the formfit CLI
// ABOUTME: Exercise catalog, targets, set logging with form tips, history, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formfit::context::FormFitContext;
use formfit::services::FormIssue;
use formfit_core::constants::catalog;
use formfit_core::errors::AppResult;
use formfit_core::models::{ExerciseDefinition, MuscleGroup};

use crate::helpers::display::{
    display_history, display_planned_exercise, display_progress, heading, kg,
};

/// List the exercise catalog, optionally one muscle group only
pub fn exercises(group: Option<MuscleGroup>) {
    let listed: Vec<&ExerciseDefinition> = match group {
        Some(group) => {
            heading(&format!("{group} exercises"));
            catalog::exercises_for(group).collect()
        }
        None => {
            heading("Exercises");
            catalog::exercises().iter().collect()
        }
    };
    for exercise in listed {
        println!(
            "  {:<18} {:<28} {:<5} {:>5} kg x {}",
            exercise.id,
            exercise.name,
            exercise.muscle_group,
            kg(exercise.default_weight),
            exercise.target_reps
        );
    }
}

/// Show the next target for one exercise
pub fn target(ctx: &FormFitContext, exercise_id: &str) -> AppResult<()> {
    let planned = ctx.session().target_for(exercise_id)?;
    display_planned_exercise(&planned);
    Ok(())
}

/// Record a set, then coach if it was failed or a grind
pub async fn log(
    ctx: &FormFitContext,
    exercise_id: &str,
    weight: f64,
    reps: u32,
    rpe: f64,
) -> AppResult<()> {
    let before = ctx.session().target_for(exercise_id)?;
    let log = ctx.session().record_set(exercise_id, weight, reps, rpe)?;
    println!(
        "Logged {}: {} kg x {} @ RPE {}",
        before.exercise.name,
        kg(log.weight_used),
        log.reps_performed,
        log.rpe
    );

    if let Some(issue) = FormIssue::detect(&log, before.target.reps) {
        let tip = ctx.coach().tip(&before.exercise.name, issue).await;
        println!("Form tip ({issue}): {tip}");
    }

    println!("Next session:");
    display_planned_exercise(&ctx.session().target_for(exercise_id)?);
    Ok(())
}

/// Show logged sessions, newest first
pub fn history(ctx: &FormFitContext, exercise_id: &str) -> AppResult<()> {
    let history = ctx.session().history(exercise_id)?;
    heading(&format!("History: {exercise_id}"));
    display_history(&history);
    Ok(())
}

/// Show the load progression
pub fn progress(ctx: &FormFitContext, exercise_id: &str) -> AppResult<()> {
    let series = ctx.session().progress(exercise_id)?;
    heading(&format!("Progress: {exercise_id}"));
    display_progress(&series);
    Ok(())
}

/// Ask the coach for a tip on demand
pub async fn tip(ctx: &FormFitContext, exercise_id: &str, issue: FormIssue) -> AppResult<()> {
    let planned = ctx.session().target_for(exercise_id)?;
    let tip = ctx.coach().tip(&planned.exercise.name, issue).await;
    println!("{tip}");
    Ok(())
}
