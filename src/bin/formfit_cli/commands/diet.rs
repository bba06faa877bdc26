// ABOUTME: Diet plan command for the formfit CLI
// ABOUTME: Generates a daily meal plan from the saved profile and a goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formfit::context::FormFitContext;
use formfit_core::errors::{AppError, AppResult, ErrorCode};
use formfit_core::models::DietGoal;

use crate::helpers::display::{display_diet_plan, heading};

/// Print today's meals for the goal
pub async fn daily_plan(ctx: &FormFitContext, goal: DietGoal) -> AppResult<()> {
    let profile = ctx.profiles().profile()?.ok_or_else(|| {
        AppError::new(
            ErrorCode::ResourceNotFound,
            "No profile found. Run `formfit onboard` first",
        )
    })?;

    let plan = ctx.diet().daily_plan(&profile, goal).await;
    heading(&format!("Daily plan: {goal} ({}, {})", profile.diet, profile.allergy));
    display_diet_plan(&plan);
    Ok(())
}
