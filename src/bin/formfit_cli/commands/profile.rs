// ABOUTME: Onboarding and dashboard commands for the formfit CLI
// ABOUTME: Saves the user profile and shows derived stats with today's targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Local};
use formfit::context::FormFitContext;
use formfit_core::errors::{AppError, AppResult, ErrorCode};
use formfit_core::models::{Allergy, DietType, TrainingDay, UserProfile};
use formfit_intelligence::{compute_experience_level, compute_protein_target};
use tracing::info;

use crate::helpers::display::{display_plan, display_planned_exercise, heading, kg};

/// Onboarding answers
pub struct OnboardArgs {
    /// Display name
    pub name: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Years of lifting experience
    pub experience_years: f64,
    /// Dietary preference
    pub diet: DietType,
    /// Allergy to avoid
    pub allergy: Allergy,
}

/// Save the profile and mark onboarding complete
pub fn onboard(ctx: &FormFitContext, args: OnboardArgs) -> AppResult<()> {
    let profile = UserProfile {
        name: args.name.trim().to_owned(),
        height_cm: args.height_cm,
        weight_kg: args.weight_kg,
        experience_years: args.experience_years,
        diet: args.diet,
        allergy: args.allergy,
        onboarding_complete: true,
    };
    ctx.profiles().save_profile(&profile)?;
    info!("Onboarding complete");

    println!("Welcome, {}!", profile.name);
    println!(
        "  Level: {}   Protein goal: {} g/day",
        compute_experience_level(profile.experience_years),
        compute_protein_target(profile.weight_kg)
    );
    println!("Run `formfit dashboard` to see today's workout.");
    Ok(())
}

/// Show derived stats, today's plan with targets, and all plans
pub fn dashboard(ctx: &FormFitContext) -> AppResult<()> {
    let profile = ctx.profiles().profile()?.ok_or_else(|| {
        AppError::new(
            ErrorCode::ResourceNotFound,
            "No profile found. Run `formfit onboard` first",
        )
    })?;

    heading(&format!("Hello, {}", profile.name));
    println!(
        "  Level: {}   Weight: {} kg   Protein goal: {} g/day",
        compute_experience_level(profile.experience_years),
        kg(profile.weight_kg),
        compute_protein_target(profile.weight_kg)
    );

    let today = TrainingDay::from(Local::now().weekday());
    match ctx.plans().todays_plan(today)? {
        Some(plan) => {
            heading(&format!("Today ({today}): {}", plan.name));
            for planned in ctx.session().plan_targets(&plan) {
                display_planned_exercise(&planned);
            }
        }
        None => println!("\nNo plans yet. Create one with `formfit plan save`."),
    }

    heading("Plans");
    for plan in ctx.plans().plans()? {
        display_plan(&plan);
    }
    Ok(())
}
