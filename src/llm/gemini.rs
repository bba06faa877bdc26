// ABOUTME: Google Gemini provider for structured text generation and image editing
// ABOUTME: Calls the generateContent endpoint with JSON schemas and inline image parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set `GEMINI_API_KEY` with a key from Google AI Studio. Model names come
//! from [`AiConfig`](crate::config::AiConfig).
//!
//! ## Models
//!
//! - `gemini-3-flash-preview` (default text model): diet plans and form tips
//! - `gemini-2.5-flash-image` (default image model): photo edits
//!
//! ## Example
//!
//! ```rust,no_run
//! use formfit::config::AiConfig;
//! use formfit::llm::{GeminiProvider, GenerateRequest, LlmProvider};
//! use formfit_core::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::from_config(&AiConfig::from_env())?;
//!     let request = GenerateRequest::new("One cue for a better deadlift lockout.");
//!     let response = provider.generate(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Instant;

use async_trait::async_trait;
use formfit_core::errors::{AppError, AppResult, ErrorCode};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{
    GenerateRequest, GenerateResponse, InlineImage, LlmCapabilities, LlmProvider, TokenUsage,
};
use crate::config::environment::{env_vars, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use crate::config::AiConfig;
use crate::logging::AppLogger;

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

impl GeminiContent {
    fn user(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Some("user".to_owned()),
            parts,
        }
    }
}

/// Part of content (text or inline image)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    /// Text content
    Text { text: String },
    /// Base64 image
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineImage,
    },
    /// Any part kind we do not consume (thoughts, executable code, ...)
    Other(Value),
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_count: Option<u32>,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    base_url: String,
    default_model: String,
    image_model: String,
}

impl GeminiProvider {
    /// Create a provider with an API key and default models
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            base_url: API_BASE_URL.to_owned(),
            default_model: DEFAULT_TEXT_MODEL.to_owned(),
            image_model: DEFAULT_IMAGE_MODEL.to_owned(),
        }
    }

    /// Create a provider from AI configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if no API key is configured, or an error if
    /// the HTTP client cannot be built
    pub fn from_config(config: &AiConfig) -> AppResult<Self> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigMissing,
                format!("{} environment variable not set", env_vars::GEMINI_API_KEY),
            )
        })?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            ..Self::new(api_key)
        }
        .with_default_model(&config.text_model)
        .with_image_model(&config.image_model))
    }

    /// Set a custom default text model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set a custom image model
    #[must_use]
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Point the provider at another API root (proxies, regional endpoints)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    /// Build a Gemini API request from a `GenerateRequest`
    fn build_generate_request(request: &GenerateRequest) -> GeminiRequest {
        let generation_config = if request.temperature.is_some() || request.is_structured() {
            Some(GenerationConfig {
                temperature: request.temperature,
                response_mime_type: request.is_structured().then_some("application/json"),
                response_schema: request.response_schema.clone(),
                candidate_count: Some(1),
            })
        } else {
            None
        };

        GeminiRequest {
            contents: vec![GeminiContent::user(vec![ContentPart::Text {
                text: request.prompt.clone(),
            }])],
            system_instruction: request.system.as_ref().map(|system| GeminiContent {
                role: None,
                parts: vec![ContentPart::Text {
                    text: system.clone(),
                }],
            }),
            generation_config,
        }
    }

    /// Image first, then the instruction, as the image models expect
    fn build_image_edit_request(image: &InlineImage, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(vec![
                ContentPart::InlineData {
                    inline_data: image.clone(),
                },
                ContentPart::Text {
                    text: prompt.to_owned(),
                },
            ])],
            system_instruction: None,
            generation_config: None,
        }
    }

    /// POST a request and decode the response body
    async fn post<T: DeserializeOwned>(&self, model: &str, body: &GeminiRequest) -> AppResult<T> {
        let url = self.build_url(model, "generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!(status = %status, model = %model, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            AppError::new(
                ErrorCode::ExternalServiceError,
                format!("Failed to parse Gemini response: {e}"),
            )
            .with_resource_id(model)
        })
    }

    fn first_parts(response: &GeminiResponse) -> &[ContentPart] {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map_or(&[] as &[ContentPart], |c| c.parts.as_slice())
    }

    /// Concatenate the text parts of the first candidate; empty when there are none
    fn extract_text(response: &GeminiResponse) -> String {
        Self::first_parts(response)
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::InlineData { .. } | ContentPart::Other(_) => None,
            })
            .collect()
    }

    /// First inline image of the first candidate
    fn extract_image(response: &GeminiResponse) -> AppResult<InlineImage> {
        Self::first_parts(response)
            .iter()
            .find_map(|part| match part {
                ContentPart::InlineData { inline_data } => Some(inline_data.clone()),
                ContentPart::Text { .. } | ContentPart::Other(_) => None,
            })
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::ExternalServiceError,
                    "No image generated. The model might have returned text only.",
                )
            })
    }

    fn check_error(response: &mut GeminiResponse) -> AppResult<()> {
        match response.error.take() {
            Some(error) => Err(AppError::external_service("Gemini", error.message)),
            None => Ok(()),
        }
    }

    /// Convert usage metadata to our token usage format
    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }

    /// Map API error status to appropriate error type
    ///
    /// Rate limit responses keep a user-friendly retry hint.
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("Gemini rejected the API key ({status}): {message}"),
            ),
            _ => AppError::new(
                ErrorCode::ExternalServiceError,
                format!("Gemini API error ({status}): {message}"),
            ),
        }
    }

    /// Extract a user-friendly quota/rate limit message from Gemini error
    fn extract_quota_message(message: &str) -> String {
        // e.g. "Please retry in 6.406453963s."
        const RETRY_PREFIX: &str = "Please retry in ";
        let seconds = message
            .find(RETRY_PREFIX)
            .map(|pos| &message[pos + RETRY_PREFIX.len()..])
            .and_then(|rest| rest.split_once('s'))
            .and_then(|(value, _)| value.parse::<f64>().ok());

        match seconds {
            Some(seconds) => format!(
                "AI service quota exceeded. Please try again in {} seconds.",
                seconds.ceil() as u64
            ),
            None => "AI service quota exceeded. Please wait a moment and try again.".to_owned(),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::full_featured()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(
        skip(self, request),
        fields(model = %request.model.as_deref().unwrap_or(&self.default_model))
    )]
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        let start = Instant::now();
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let body = Self::build_generate_request(request);

        debug!(structured = request.is_structured(), "Sending request to Gemini API");

        let result = self
            .post::<GeminiResponse>(model, &body)
            .await
            .and_then(|mut response| {
                Self::check_error(&mut response)?;
                Ok(response)
            });
        AppLogger::log_ai_request(
            self.name(),
            model,
            "generate",
            result.is_ok(),
            start.elapsed().as_millis() as u64,
        );
        let response = result?;

        Ok(GenerateResponse {
            content: Self::extract_text(&response),
            model: model.to_owned(),
            usage: response.usage_metadata.as_ref().map(Self::convert_usage),
            finish_reason: response
                .candidates
                .as_ref()
                .and_then(|c| c.first())
                .and_then(|c| c.finish_reason.clone()),
        })
    }

    #[instrument(
        skip(self, image, prompt),
        fields(model = %self.image_model, mime = %image.mime_type)
    )]
    async fn edit_image(&self, image: &InlineImage, prompt: &str) -> AppResult<InlineImage> {
        let start = Instant::now();
        let body = Self::build_image_edit_request(image, prompt);

        let result = self
            .post::<GeminiResponse>(&self.image_model, &body)
            .await
            .and_then(|mut response| {
                Self::check_error(&mut response)?;
                Self::extract_image(&response)
            });
        AppLogger::log_ai_request(
            self.name(),
            &self.image_model,
            "edit_image",
            result.is_ok(),
            start.elapsed().as_millis() as u64,
        );
        result
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> AppResult<bool> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("image_model", &self.image_model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
