// ABOUTME: Integration tests for the AI diet planner and its fallbacks
// ABOUTME: Uses a scripted provider to cover offline, success, empty, malformed, and failure paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{memory_context, StubProvider};
use formfit::errors::ErrorCode;
use formfit::llm::LlmProvider;
use formfit::models::{Allergy, DietGoal, DietType, MealType, UserProfile};
use formfit::services::diet::{fallback_plan, offline_plan};
use serde_json::json;

fn athlete() -> UserProfile {
    UserProfile {
        name: "Robin".to_owned(),
        weight_kg: 82.0,
        diet: DietType::Vegan,
        allergy: Allergy::Gluten,
        onboarding_complete: true,
        ..UserProfile::default()
    }
}

fn generated_plan() -> serde_json::Value {
    json!({
        "summary": "High protein vegan day for a lean bulk.",
        "meals": [
            {
                "type": "Breakfast",
                "mealName": "Tofu Scramble",
                "description": "Spiced tofu with spinach.",
                "calories": 520,
                "protein": 35,
                "ingredients": ["250g firm tofu", "1 cup spinach"],
                "instructions": ["Crumble tofu", "Cook with spinach"]
            },
            {
                "type": "Dinner",
                "mealName": "Lentil Curry",
                "description": "Red lentils in coconut sauce.",
                "calories": 700,
                "protein": 32.5,
                "ingredients": ["1 cup red lentils", "200ml coconut milk"],
                "instructions": ["Simmer lentils", "Stir in coconut milk"]
            }
        ]
    })
}

#[tokio::test]
async fn test_offline_mode_returns_sample_plan() {
    let ctx = memory_context(None);
    let plan = ctx.diet().daily_plan(&athlete(), DietGoal::MuscleGain).await;
    assert_eq!(plan, offline_plan());
    assert!(plan.summary.starts_with("Offline mode"));
}

#[tokio::test]
async fn test_generated_plan_is_parsed() {
    let stub = Arc::new(StubProvider::replying(generated_plan().to_string()));
    let provider: Arc<dyn LlmProvider> = stub.clone();
    let ctx = memory_context(Some(provider));

    let plan = ctx.diet().daily_plan(&athlete(), DietGoal::FatLoss).await;
    assert_eq!(plan.meals.len(), 2);
    assert_eq!(plan.meals[1].meal_type, MealType::Dinner);
    assert!((plan.total_protein() - 67.5).abs() < f64::EPSILON);
    assert!(plan.meal(MealType::Lunch).is_none());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].is_structured());
    assert!(requests[0].prompt.contains("82kg"));
    assert!(requests[0].prompt.contains("Vegan"));
    assert!(requests[0].prompt.contains("Gluten"));
    assert!(requests[0].prompt.contains("Fat Loss"));
}

#[tokio::test]
async fn test_provider_failure_returns_fallback() {
    let provider: Arc<dyn LlmProvider> = Arc::new(StubProvider::failing(
        ErrorCode::ExternalRateLimited,
        "Quota exceeded",
    ));
    let ctx = memory_context(Some(provider));
    let plan = ctx.diet().daily_plan(&athlete(), DietGoal::MuscleGain).await;
    assert_eq!(plan, fallback_plan());
}

#[tokio::test]
async fn test_empty_response_returns_fallback() {
    let provider: Arc<dyn LlmProvider> = Arc::new(StubProvider::replying("   "));
    let ctx = memory_context(Some(provider));
    let plan = ctx.diet().daily_plan(&athlete(), DietGoal::Maintenance).await;
    assert_eq!(plan, fallback_plan());
}

#[tokio::test]
async fn test_malformed_response_returns_fallback() {
    let provider: Arc<dyn LlmProvider> =
        Arc::new(StubProvider::replying(r#"{"summary": "missing meals"}"#));
    let ctx = memory_context(Some(provider));
    let plan = ctx.diet().daily_plan(&athlete(), DietGoal::MuscleGain).await;
    assert_eq!(plan, fallback_plan());
    assert_eq!(plan.meals.len(), 1);
}
