// ABOUTME: User profile repository over the keyed record store
// ABOUTME: Validates profiles before persisting them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use formfit_core::constants::storage_keys;
use formfit_core::errors::AppResult;
use formfit_core::models::UserProfile;
use tracing::info;

use super::{get_json, set_json, KeyValueStore};

/// User profile repository
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    /// Wrap a backend
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved profile, if onboarding has happened
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails or the record is malformed
    pub fn profile(&self) -> AppResult<Option<UserProfile>> {
        get_json(self.store.as_ref(), storage_keys::PROFILE)
    }

    /// Validate and store the profile
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range measurements, or a
    /// storage error if the write fails
    pub fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        profile.validate()?;
        set_json(self.store.as_ref(), storage_keys::PROFILE, profile)?;
        info!(
            profile.experience_years = profile.experience_years,
            profile.diet = %profile.diet,
            "Saved user profile"
        );
        Ok(())
    }
}
