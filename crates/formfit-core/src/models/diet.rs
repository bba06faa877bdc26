// ABOUTME: Diet plan models returned by the AI meal planner
// ABOUTME: DailyDietPlan, DietMeal, MealType, and DietGoal definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Meal slot within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal slots in serving order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Name used in prompts and the response schema
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Nutrition goal steering the generated plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DietGoal {
    /// Caloric surplus, high protein (default)
    #[default]
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    /// Caloric deficit
    #[serde(rename = "Fat Loss")]
    FatLoss,
    /// Caloric balance
    Maintenance,
}

impl Display for DietGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::MuscleGain => write!(f, "Muscle Gain"),
            Self::FatLoss => write!(f, "Fat Loss"),
            Self::Maintenance => write!(f, "Maintenance"),
        }
    }
}

impl FromStr for DietGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "musclegain" | "bulk" => Ok(Self::MuscleGain),
            "fatloss" | "cut" => Ok(Self::FatLoss),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            other => Err(AppError::invalid_input(format!(
                "Unknown diet goal '{other}' (expected muscle-gain, fat-loss or maintenance)"
            ))),
        }
    }
}

/// A single meal with recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietMeal {
    /// Meal slot
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Dish name
    pub meal_name: String,
    /// Short description
    pub description: String,
    /// Approximate energy (kcal)
    pub calories: f64,
    /// Approximate protein (grams)
    pub protein: f64,
    /// Ingredients with quantities
    pub ingredients: Vec<String>,
    /// Concise cooking steps
    pub instructions: Vec<String>,
}

/// Full day of meals with a one-sentence rationale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyDietPlan {
    /// Why this plan fits the goal
    pub summary: String,
    /// Meals in serving order
    pub meals: Vec<DietMeal>,
}

impl DailyDietPlan {
    /// Total energy across all meals (kcal)
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|m| m.calories).sum()
    }

    /// Total protein across all meals (grams)
    #[must_use]
    pub fn total_protein(&self) -> f64 {
        self.meals.iter().map(|m| m.protein).sum()
    }

    /// Find the meal served in a slot
    #[must_use]
    pub fn meal(&self, meal_type: MealType) -> Option<&DietMeal> {
        self.meals.iter().find(|m| m.meal_type == meal_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_field_is_named_type() {
        let json = r#"{
            "summary": "High protein day.",
            "meals": [{
                "type": "Lunch",
                "mealName": "Tofu Stir-fry",
                "description": "Simple tofu and veggie mix.",
                "calories": 500,
                "protein": 25,
                "ingredients": ["200g Tofu"],
                "instructions": ["Cube tofu"]
            }]
        }"#;

        let plan: DailyDietPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.meals[0].meal_type, MealType::Lunch);
        assert!(plan.meal(MealType::Lunch).is_some());
        assert!(plan.meal(MealType::Dinner).is_none());
        assert!((plan.total_protein() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_display_and_parse() {
        assert_eq!(DietGoal::default().to_string(), "Muscle Gain");
        assert_eq!("fat-loss".parse::<DietGoal>().unwrap(), DietGoal::FatLoss);
    }
}
