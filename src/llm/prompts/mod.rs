// ABOUTME: Prompt templates for diet plans and form tips loaded at compile time
// ABOUTME: Renders templates with profile data and provides the diet plan response schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Templates live in markdown files next to this module and use `{name}`
//! placeholders.

use formfit_core::models::{DietGoal, UserProfile};
use serde_json::{json, Value};

/// Daily diet plan prompt template
pub const DIET_PLAN_TEMPLATE: &str = include_str!("diet_plan.md");

/// Corrective form tip prompt template
pub const FORM_TIP_TEMPLATE: &str = include_str!("form_tip.md");

/// Render the diet plan prompt for a profile and goal
#[must_use]
pub fn diet_plan_prompt(profile: &UserProfile, goal: DietGoal) -> String {
    DIET_PLAN_TEMPLATE
        .replace("{weight_kg}", &profile.weight_kg.to_string())
        .replace("{diet}", &profile.diet.to_string())
        .replace("{allergy}", &profile.allergy.to_string())
        .replace("{goal}", &goal.to_string())
}

/// Render the form tip prompt
#[must_use]
pub fn form_tip_prompt(exercise_name: &str, issue: &str) -> String {
    FORM_TIP_TEMPLATE
        .trim_end()
        .replace("{exercise_name}", exercise_name)
        .replace("{issue}", issue)
}

/// Response schema for a [`DailyDietPlan`](formfit_core::models::DailyDietPlan)
#[must_use]
pub fn diet_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "meals": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "type": {
                            "type": "STRING",
                            "enum": ["Breakfast", "Lunch", "Dinner", "Snack"]
                        },
                        "mealName": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "calories": { "type": "NUMBER" },
                        "protein": { "type": "NUMBER" },
                        "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "instructions": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": [
                        "type", "mealName", "description", "calories",
                        "protein", "ingredients", "instructions"
                    ]
                }
            }
        },
        "required": ["summary", "meals"]
    })
}
