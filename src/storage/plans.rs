// ABOUTME: Workout plan repository with default push/pull/legs seeding
// ABOUTME: Upsert, delete, and today's-plan lookup over the keyed record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use formfit_core::constants::catalog::find_exercise;
use formfit_core::constants::default_plans::default_plans;
use formfit_core::constants::storage_keys;
use formfit_core::errors::{AppError, AppResult};
use formfit_core::models::{TrainingDay, WorkoutPlan};
use tracing::{debug, info};

use super::{get_json, update_json, KeyValueStore};

/// Workout plan repository
#[derive(Clone)]
pub struct PlanStore {
    store: Arc<dyn KeyValueStore>,
}

impl PlanStore {
    /// Wrap a backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored plans, or the default routines when none were ever saved
    ///
    /// An explicitly stored empty list stays empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails or the stored list is malformed
    pub fn plans(&self) -> AppResult<Vec<WorkoutPlan>> {
        match get_json(self.store.as_ref(), storage_keys::PLANS)? {
            Some(plans) => Ok(plans),
            None => {
                debug!("No saved plans, using defaults");
                Ok(default_plans())
            }
        }
    }

    /// Find a plan by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    pub fn plan(&self, id: &str) -> AppResult<Option<WorkoutPlan>> {
        Ok(self.plans()?.into_iter().find(|plan| plan.id == id))
    }

    /// Insert a plan, or replace the one with the same id in place
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank id or name or an exercise id
    /// missing from the catalog, or an error if the backend read or write fails
    pub fn save_plan(&self, plan: &WorkoutPlan) -> AppResult<()> {
        plan.validate()?;
        if let Some(unknown) = plan.exercise_ids.iter().find(|id| find_exercise(id).is_none()) {
            return Err(
                AppError::invalid_input(format!("Unknown exercise '{unknown}' in plan"))
                    .with_resource_id(plan.id.as_str()),
            );
        }

        update_json(
            self.store.as_ref(),
            storage_keys::PLANS,
            |current: Option<Vec<WorkoutPlan>>| {
                let mut plans = current.unwrap_or_else(default_plans);
                match plans.iter_mut().find(|existing| existing.id == plan.id) {
                    Some(existing) => existing.clone_from(plan),
                    None => plans.push(plan.clone()),
                }
                Ok(Some(plans))
            },
        )?;
        info!(plan.id = %plan.id, plan.name = %plan.name, "Saved workout plan");
        Ok(())
    }

    /// Remove a plan by id; returns whether a plan was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails
    pub fn delete_plan(&self, id: &str) -> AppResult<bool> {
        let mut removed = false;
        update_json(
            self.store.as_ref(),
            storage_keys::PLANS,
            |current: Option<Vec<WorkoutPlan>>| {
                let mut plans = current.unwrap_or_else(default_plans);
                let before = plans.len();
                plans.retain(|plan| plan.id != id);
                removed = plans.len() != before;
                Ok(removed.then_some(plans))
            },
        )?;
        if removed {
            info!(plan.id = %id, "Deleted workout plan");
        }
        Ok(removed)
    }

    /// Plan scheduled on `day`, else the first plan, else `None`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    pub fn todays_plan(&self, day: TrainingDay) -> AppResult<Option<WorkoutPlan>> {
        let mut plans = self.plans()?;
        let scheduled = plans.iter().position(|plan| plan.day == Some(day));
        Ok(match scheduled {
            Some(index) => Some(plans.swap_remove(index)),
            None => plans.into_iter().next(),
        })
    }
}
