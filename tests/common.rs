// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a scripted AI provider stub, and in-memory contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `formfit`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use formfit::context::FormFitContext;
use formfit::errors::{AppError, AppResult, ErrorCode};
use formfit::llm::{GenerateRequest, GenerateResponse, InlineImage, LlmCapabilities, LlmProvider};
use formfit::models::ExercisePerformanceLog;
use formfit::storage::{InMemoryStore, KeyValueStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
///
/// Set `TEST_LOG=debug` to see service logs while debugging a failure.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let level = match env::var("TEST_LOG").as_deref() {
            Ok("trace") => tracing::Level::TRACE,
            Ok("debug") => tracing::Level::DEBUG,
            Ok("info") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .init();
    });
}

/// What the stub answers to a generation request
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Successful response with this content
    Text(String),
    /// Failure with this code and message
    Fail(ErrorCode, String),
}

/// Scripted provider that records every request it receives
pub struct StubProvider {
    reply: StubReply,
    image: Option<InlineImage>,
    capabilities: LlmCapabilities,
    requests: Mutex<Vec<GenerateRequest>>,
    edits: Mutex<Vec<String>>,
}

impl StubProvider {
    /// Provider answering every generation with `content`
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_reply(StubReply::Text(content.into()))
    }

    /// Provider failing every call with `code`
    pub fn failing(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_reply(StubReply::Fail(code, message.into()))
    }

    fn with_reply(reply: StubReply) -> Self {
        Self {
            reply,
            image: None,
            capabilities: LlmCapabilities::full_featured(),
            requests: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
        }
    }

    /// Return `image` from image edits
    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Override advertised capabilities
    pub const fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Generation requests seen so far
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Edit prompts seen so far
    pub fn edit_prompts(&self) -> Vec<String> {
        self.edits.lock().unwrap().clone()
    }

    fn failure(&self) -> Option<AppError> {
        match &self.reply {
            StubReply::Fail(code, message) => Some(AppError::new(*code, message.clone())),
            StubReply::Text(_) => None,
        }
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            StubReply::Text(content) => Ok(GenerateResponse {
                content: content.clone(),
                model: self.default_model().to_owned(),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            StubReply::Fail(code, message) => Err(AppError::new(*code, message.clone())),
        }
    }

    async fn edit_image(&self, _image: &InlineImage, prompt: &str) -> AppResult<InlineImage> {
        self.edits.lock().unwrap().push(prompt.to_owned());
        if let Some(error) = self.failure() {
            return Err(error);
        }
        self.image.clone().ok_or_else(|| {
            AppError::new(
                ErrorCode::ExternalServiceError,
                "No image generated. The model might have returned text only.",
            )
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.failure().is_none())
    }
}

/// Context over a fresh in-memory store
pub fn memory_context(provider: Option<Arc<dyn LlmProvider>>) -> FormFitContext {
    init_test_logging();
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    FormFitContext::new(store, provider)
}

/// Timestamp `millis` after the epoch
pub fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

/// Log entry with an explicit timestamp
pub fn log_at(
    exercise_id: &str,
    millis: i64,
    weight_used: f64,
    reps_performed: u32,
    rpe: f64,
) -> ExercisePerformanceLog {
    ExercisePerformanceLog {
        exercise_id: exercise_id.to_owned(),
        date: at(millis),
        weight_used,
        reps_performed,
        rpe,
    }
}

/// Small PNG-typed inline image
pub fn tiny_png() -> InlineImage {
    InlineImage::from_bytes("image/png", b"\x89PNG\r\n\x1a\nformfit").unwrap()
}
