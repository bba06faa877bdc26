// ABOUTME: User profile model captured during onboarding
// ABOUTME: UserProfile with diet preference and allergy enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, ErrorCode};

/// Dietary preference used when generating meal plans
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DietType {
    /// Vegetarian (default)
    #[default]
    Vegetarian,
    /// Includes meat and fish
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    /// No animal products
    Vegan,
}

impl Display for DietType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Vegetarian => write!(f, "Vegetarian"),
            Self::NonVegetarian => write!(f, "Non-Vegetarian"),
            Self::Vegan => write!(f, "Vegan"),
        }
    }
}

impl FromStr for DietType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "vegetarian" | "veg" => Ok(Self::Vegetarian),
            "nonvegetarian" | "nonveg" => Ok(Self::NonVegetarian),
            "vegan" => Ok(Self::Vegan),
            other => Err(AppError::invalid_input(format!(
                "Unknown diet type '{other}' (expected vegetarian, non-vegetarian or vegan)"
            ))),
        }
    }
}

/// Food allergy excluded from generated meal plans
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Allergy {
    /// No allergy (default)
    #[default]
    None,
    /// Peanut allergy
    Peanuts,
    /// Lactose intolerance or dairy allergy
    Dairy,
    /// Gluten intolerance
    Gluten,
}

impl Display for Allergy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => write!(f, "None"),
            Self::Peanuts => write!(f, "Peanuts"),
            Self::Dairy => write!(f, "Dairy"),
            Self::Gluten => write!(f, "Gluten"),
        }
    }
}

impl FromStr for Allergy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "peanuts" | "peanut" => Ok(Self::Peanuts),
            "dairy" => Ok(Self::Dairy),
            "gluten" => Ok(Self::Gluten),
            other => Err(AppError::invalid_input(format!(
                "Unknown allergy '{other}' (expected none, peanuts, dairy or gluten)"
            ))),
        }
    }
}

/// Onboarding profile for the single local user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Training experience in years, may be fractional
    pub experience_years: f64,
    /// Dietary preference
    pub diet: DietType,
    /// Allergy to avoid
    pub allergy: Allergy,
    /// Whether onboarding has been completed
    pub onboarding_complete: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            height_cm: 180.0,
            weight_kg: 75.0,
            experience_years: 0.0,
            diet: DietType::Vegetarian,
            allergy: Allergy::None,
            onboarding_complete: false,
        }
    }
}

impl UserProfile {
    /// Validate onboarding input before it is persisted
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or a body measurement is not positive
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Display name is required",
            ));
        }
        if !(f64::MIN_POSITIVE..=400.0).contains(&self.weight_kg) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                "Weight must be between 0 and 400 kg",
            ));
        }
        if !(f64::MIN_POSITIVE..=300.0).contains(&self.height_cm) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                "Height must be between 0 and 300 cm",
            ));
        }
        if !(0.0..=f64::MAX).contains(&self.experience_years) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                "Experience cannot be negative",
            ));
        }
        Ok(())
    }
}
