// ABOUTME: Workout plan model for named training routines
// ABOUTME: WorkoutPlan with an optional scheduled TrainingDay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, ErrorCode};

/// Day of the week a routine is scheduled on
///
/// Serialized with full English names (`"Monday"`), unlike `chrono::Weekday`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TrainingDay {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl From<Weekday> for TrainingDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl Display for TrainingDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

impl FromStr for TrainingDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Weekday>()
            .map(Self::from)
            .map_err(|_| AppError::invalid_input(format!("Unknown day of week '{s}'")))
    }
}

/// Named training routine with an ordered exercise list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Unique plan identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Scheduled day, `None` for a flexible routine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<TrainingDay>,
    /// Exercise identifiers in session order
    pub exercise_ids: Vec<String>,
}

impl WorkoutPlan {
    /// Create a plan
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        day: Option<TrainingDay>,
        exercise_ids: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            day,
            exercise_ids,
        }
    }

    /// Check that the plan can be saved
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank id or name
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Plan id is required",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Plan name is required",
            )
            .with_resource_id(self.id.as_str()));
        }
        Ok(())
    }
}
