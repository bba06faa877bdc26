// ABOUTME: Form coaching service producing one-sentence corrective tips
// ABOUTME: Detects failed or grinding sets and asks the AI provider for a cue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::Arc;

use formfit_core::constants::coaching::HIGH_RPE_THRESHOLD;
use formfit_core::errors::AppError;
use formfit_core::models::ExercisePerformanceLog;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm::prompts::form_tip_prompt;
use crate::llm::{GenerateRequest, LlmProvider};
use crate::logging::AppLogger;

/// Tip used when no AI provider is configured
pub const OFFLINE_TIP: &str = "Focus on your breathing and brace your core.";
/// Tip used when the provider answers with nothing
pub const EMPTY_RESPONSE_TIP: &str = "Focus on form over weight.";
/// Tip used when the provider call fails
pub const ERROR_TIP: &str = "Maintain a neutral spine and control the tempo.";

/// Problem observed in a completed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormIssue {
    /// Rep target was not reached
    #[serde(rename = "Failed Reps")]
    FailedReps,
    /// Target reached, but close to failure
    #[serde(rename = "High RPE")]
    HighRpe,
}

impl FormIssue {
    /// Classify a completed set against the rep target it was chasing
    ///
    /// A missed target wins over a high RPE.
    #[must_use]
    pub fn detect(log: &ExercisePerformanceLog, target_reps: u32) -> Option<Self> {
        if log.reps_performed < target_reps {
            Some(Self::FailedReps)
        } else if log.rpe >= HIGH_RPE_THRESHOLD {
            Some(Self::HighRpe)
        } else {
            None
        }
    }

    /// Label used in prompts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FailedReps => "Failed Reps",
            Self::HighRpe => "High RPE",
        }
    }
}

impl Display for FormIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormIssue {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "failedreps" | "failed" => Ok(Self::FailedReps),
            "highrpe" | "high" => Ok(Self::HighRpe),
            other => Err(AppError::invalid_input(format!(
                "Unknown form issue '{other}' (expected failed-reps or high-rpe)"
            ))),
        }
    }
}

/// AI form coach
#[derive(Clone, Default)]
pub struct FormCoach {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl FormCoach {
    /// Create a coach; `None` gives canned offline tips
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    /// One-sentence corrective cue; never fails
    pub async fn tip(&self, exercise_name: &str, issue: FormIssue) -> String {
        let Some(provider) = &self.provider else {
            debug!("No AI provider configured, using offline form tip");
            return OFFLINE_TIP.to_owned();
        };

        let request = GenerateRequest::new(form_tip_prompt(exercise_name, issue.as_str()));
        match provider.generate(&request).await {
            Ok(response) => {
                let tip = response.content.trim();
                if tip.is_empty() {
                    EMPTY_RESPONSE_TIP.to_owned()
                } else {
                    tip.to_owned()
                }
            }
            Err(e) => {
                AppLogger::log_ai_fallback("form_tip", &e.to_string());
                ERROR_TIP.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn set(reps_performed: u32, rpe: f64) -> ExercisePerformanceLog {
        ExercisePerformanceLog {
            exercise_id: "bench_press".to_owned(),
            date: Utc::now(),
            weight_used: 40.0,
            reps_performed,
            rpe,
        }
    }

    #[test]
    fn test_detect_prefers_failed_reps() {
        assert_eq!(FormIssue::detect(&set(7, 10.0), 10), Some(FormIssue::FailedReps));
        assert_eq!(FormIssue::detect(&set(10, 9.0), 10), Some(FormIssue::HighRpe));
        assert_eq!(FormIssue::detect(&set(12, 8.5), 10), None);
    }

    #[test]
    fn test_issue_labels() {
        assert_eq!(FormIssue::HighRpe.to_string(), "High RPE");
        assert_eq!("failed-reps".parse::<FormIssue>().unwrap(), FormIssue::FailedReps);
        assert!("sore".parse::<FormIssue>().is_err());
    }

    #[tokio::test]
    async fn test_offline_tip() {
        let tip = FormCoach::default().tip("Deadlift", FormIssue::FailedReps).await;
        assert_eq!(tip, OFFLINE_TIP);
    }
}
