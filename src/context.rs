// ABOUTME: Composed application context wiring storage, services, and the AI provider
// ABOUTME: Built once from AppConfig and shared by every CLI command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use formfit_core::errors::AppResult;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::services::{DietPlanner, FormCoach, ImageStudio, WorkoutSessionService};
use crate::storage::{open_store, KeyValueStore, LogStore, PlanStore, ProfileStore};

/// Everything a command needs, built from configuration
#[derive(Clone)]
pub struct FormFitContext {
    backend: &'static str,
    provider: Option<Arc<dyn LlmProvider>>,
    logs: LogStore,
    plans: PlanStore,
    profiles: ProfileStore,
    session: WorkoutSessionService,
    diet: DietPlanner,
    coach: FormCoach,
    studio: ImageStudio,
}

impl FormFitContext {
    /// Wire the context from explicit collaborators
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, provider: Option<Arc<dyn LlmProvider>>) -> Self {
        let logs = LogStore::new(Arc::clone(&store));
        Self {
            backend: store.backend_name(),
            provider: provider.clone(),
            session: WorkoutSessionService::new(logs.clone()),
            logs,
            plans: PlanStore::new(Arc::clone(&store)),
            profiles: ProfileStore::new(store),
            diet: DietPlanner::new(provider.clone()),
            coach: FormCoach::new(provider.clone()),
            studio: ImageStudio::new(provider),
        }
    }

    /// Open the configured store and, when an API key is present, the Gemini provider
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or the HTTP client
    /// cannot be built
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let store = open_store(&config.storage)?;
        info!(
            backend = store.backend_name(),
            location = %config.storage,
            "Record store ready"
        );

        let provider: Option<Arc<dyn LlmProvider>> = if config.ai.is_configured() {
            Some(Arc::new(GeminiProvider::from_config(&config.ai)?))
        } else {
            debug!("AI provider disabled");
            None
        };

        Ok(Self::new(store, provider))
    }

    /// Name of the record store backend
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        self.backend
    }

    /// Configured AI provider, `None` in offline mode
    #[must_use]
    pub fn provider(&self) -> Option<&dyn LlmProvider> {
        self.provider.as_deref()
    }

    /// Performance log repository
    #[must_use]
    pub const fn logs(&self) -> &LogStore {
        &self.logs
    }

    /// Workout plan repository
    #[must_use]
    pub const fn plans(&self) -> &PlanStore {
        &self.plans
    }

    /// Profile repository
    #[must_use]
    pub const fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    /// Training session service
    #[must_use]
    pub const fn session(&self) -> &WorkoutSessionService {
        &self.session
    }

    /// Meal planner
    #[must_use]
    pub const fn diet(&self) -> &DietPlanner {
        &self.diet
    }

    /// Form coach
    #[must_use]
    pub const fn coach(&self) -> &FormCoach {
        &self.coach
    }

    /// Image studio
    #[must_use]
    pub const fn studio(&self) -> &ImageStudio {
        &self.studio
    }
}
