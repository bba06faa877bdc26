// ABOUTME: Daily diet planner backed by structured AI generation
// ABOUTME: Falls back to a sample offline plan or a one-meal safe plan so it never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use formfit_core::errors::{AppError, AppResult, ErrorCode};
use formfit_core::models::{DailyDietPlan, DietGoal, DietMeal, MealType, UserProfile};
use tracing::{debug, info};

use crate::llm::prompts::{diet_plan_prompt, diet_plan_schema};
use crate::llm::{GenerateRequest, LlmProvider};
use crate::logging::AppLogger;

/// AI meal planner
#[derive(Clone, Default)]
pub struct DietPlanner {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl DietPlanner {
    /// Create a planner; `None` gives the offline sample plan
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    /// Full day of meals for the profile and goal; never fails
    pub async fn daily_plan(&self, profile: &UserProfile, goal: DietGoal) -> DailyDietPlan {
        let Some(provider) = &self.provider else {
            debug!("No AI provider configured, using offline diet plan");
            return offline_plan();
        };

        match Self::generate(provider.as_ref(), profile, goal).await {
            Ok(plan) => {
                info!(
                    goal = %goal,
                    meals = plan.meals.len(),
                    calories = plan.total_calories(),
                    "Generated daily diet plan"
                );
                plan
            }
            Err(e) => {
                AppLogger::log_ai_fallback("diet_plan", &e.to_string());
                fallback_plan()
            }
        }
    }

    async fn generate(
        provider: &dyn LlmProvider,
        profile: &UserProfile,
        goal: DietGoal,
    ) -> AppResult<DailyDietPlan> {
        let request = GenerateRequest::new(diet_plan_prompt(profile, goal))
            .with_response_schema(diet_plan_schema());
        let response = provider.generate(&request).await?;

        if response.content.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::ExternalServiceError,
                "No response from AI",
            ));
        }
        serde_json::from_str(&response.content).map_err(|e| {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("Diet plan response did not match the schema: {e}"),
            )
            .with_source(e)
        })
    }
}

fn meal(
    meal_type: MealType,
    meal_name: &str,
    description: &str,
    calories: f64,
    protein: f64,
    ingredients: &[&str],
    instructions: &[&str],
) -> DietMeal {
    DietMeal {
        meal_type,
        meal_name: meal_name.to_owned(),
        description: description.to_owned(),
        calories,
        protein,
        ingredients: ingredients.iter().map(|&s| s.to_owned()).collect(),
        instructions: instructions.iter().map(|&s| s.to_owned()).collect(),
    }
}

/// Sample vegetarian plan shown when no API key is configured
#[must_use]
pub fn offline_plan() -> DailyDietPlan {
    DailyDietPlan {
        summary: "Offline mode: Showing sample vegetarian plan.".to_owned(),
        meals: vec![
            meal(
                MealType::Breakfast,
                "Oatmeal & Whey",
                "High fiber oats mixed with protein powder.",
                450.0,
                30.0,
                &["1 cup Oats", "1 scoop Whey Protein", "1 tbsp Peanut Butter"],
                &["Boil oats", "Mix in protein", "Top with PB"],
            ),
            meal(
                MealType::Lunch,
                "Tofu Stir-fry",
                "Simple tofu and veggie mix.",
                500.0,
                25.0,
                &["200g Tofu", "Broccoli", "Soy Sauce", "Rice"],
                &["Cube tofu", "Stir fry with veggies", "Serve over rice"],
            ),
            meal(
                MealType::Dinner,
                "Lentil Soup",
                "Warm and filling lentil soup.",
                400.0,
                20.0,
                &["1 cup Lentils", "Carrots", "Onion", "Spices"],
                &["Boil lentils", "Sauté veggies", "Simmer together"],
            ),
            meal(
                MealType::Snack,
                "Greek Yogurt Bowl",
                "Quick protein fix.",
                200.0,
                15.0,
                &["1 cup Greek Yogurt", "Berries"],
                &["Mix and eat"],
            ),
        ],
    }
}

/// Minimal plan returned when the AI call or its parsing fails
#[must_use]
pub fn fallback_plan() -> DailyDietPlan {
    DailyDietPlan {
        summary: "Error connecting to AI. Using safe fallback plan.".to_owned(),
        meals: vec![meal(
            MealType::Breakfast,
            "Toast & Eggs (Fallback)",
            "Classic breakfast.",
            400.0,
            20.0,
            &["2 slices bread", "2 eggs"],
            &["Toast bread", "Fry eggs"],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_plan_covers_every_meal_slot() {
        let plan = offline_plan();
        for meal_type in MealType::ALL {
            assert!(plan.meal(meal_type).is_some(), "{meal_type} missing");
        }
        assert!((plan.total_calories() - 1550.0).abs() < f64::EPSILON);
        assert!((plan.total_protein() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fallback_plan_is_single_breakfast() {
        let plan = fallback_plan();
        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.meals[0].meal_name, "Toast & Eggs (Fallback)");
    }

    #[tokio::test]
    async fn test_no_provider_returns_offline_plan() {
        let plan = DietPlanner::default()
            .daily_plan(&UserProfile::default(), DietGoal::default())
            .await;
        assert_eq!(plan, offline_plan());
    }
}
