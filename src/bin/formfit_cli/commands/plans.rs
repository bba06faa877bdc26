// ABOUTME: Workout plan commands for the formfit CLI
// ABOUTME: List, save (upsert), and delete training routines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formfit::context::FormFitContext;
use formfit_core::errors::{AppError, AppResult};
use formfit_core::models::{TrainingDay, WorkoutPlan};
use uuid::Uuid;

use crate::helpers::display::{display_plan, heading};

/// List saved plans
pub fn list(ctx: &FormFitContext) -> AppResult<()> {
    heading("Plans");
    for plan in ctx.plans().plans()? {
        display_plan(&plan);
    }
    Ok(())
}

/// Create or replace a plan
pub fn save(
    ctx: &FormFitContext,
    id: Option<String>,
    name: String,
    day: Option<TrainingDay>,
    exercises: Vec<String>,
) -> AppResult<()> {
    let id = id.unwrap_or_else(|| format!("plan_{}", Uuid::new_v4().simple()));
    let exercise_ids = exercises
        .into_iter()
        .map(|e| e.trim().to_owned())
        .filter(|e| !e.is_empty())
        .collect();
    let plan = WorkoutPlan::new(id, name, day, exercise_ids);
    ctx.plans().save_plan(&plan)?;
    println!("Saved plan:");
    display_plan(&plan);
    Ok(())
}

/// Delete a plan by id
pub fn delete(ctx: &FormFitContext, id: &str) -> AppResult<()> {
    if !ctx.plans().delete_plan(id)? {
        return Err(AppError::not_found(format!("Plan {id}")).with_resource_id(id));
    }
    println!("Deleted plan {id}");
    Ok(())
}
