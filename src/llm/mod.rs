// ABOUTME: Generative AI provider abstraction for diet plans, form tips, and image edits
// ABOUTME: Defines the LlmProvider contract, capability flags, and request/response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generative AI Provider Interface
//!
//! The coaching services only talk to the AI service through [`LlmProvider`],
//! so tests can swap in a stub and the CLI can run without an API key.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing provider features
//! - **`GenerateRequest`**: A single-turn prompt, optionally constrained to a JSON schema
//! - **`InlineImage`**: Base64 image payload exchanged with image-capable models
//!
//! ## Example
//!
//! ```rust,no_run
//! use formfit::llm::{GenerateRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = GenerateRequest::new("Give me one squat cue.");
//!     let response = provider.generate(&request).await;
//! }
//! ```

mod gemini;
mod image;
pub mod prompts;

pub use gemini::GeminiProvider;
pub use image::InlineImage;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use formfit_core::errors::AppResult;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// Provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Plain text generation
        const TEXT = 0b0000_0001;
        /// Structured output constrained by a response schema
        const JSON_MODE = 0b0000_0010;
        /// Image in, image out editing
        const IMAGE_EDIT = 0b0000_0100;
    }
}

impl LlmCapabilities {
    /// Text and structured output, no images
    #[must_use]
    pub const fn text_only() -> Self {
        Self::TEXT.union(Self::JSON_MODE)
    }

    /// Everything the coaching services use
    #[must_use]
    pub const fn full_featured() -> Self {
        Self::TEXT.union(Self::JSON_MODE).union(Self::IMAGE_EDIT)
    }

    /// Check if structured output is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if image editing is supported
    #[must_use]
    pub const fn supports_image_edit(&self) -> bool {
        self.contains(Self::IMAGE_EDIT)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Single-turn generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// User prompt
    pub prompt: String,
    /// Optional system instruction
    pub system: Option<String>,
    /// Model override; the provider default is used when `None`
    pub model: Option<String>,
    /// JSON schema the response must follow; enables JSON mode
    pub response_schema: Option<Value>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    /// Create a plain text request
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            model: None,
            response_schema: None,
            temperature: None,
        }
    }

    /// Set the system instruction
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Request structured output matching `schema`
    #[must_use]
    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Whether the request asks for JSON output
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        self.response_schema.is_some()
    }
}

/// Response from a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text (a JSON document for structured requests); may be empty
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (STOP, MAX_TOKENS, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Generative AI provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model for text generation
    fn default_model(&self) -> &str;

    /// Generate text, or JSON when the request carries a response schema
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse>;

    /// Edit `image` according to `prompt` and return the produced image
    async fn edit_image(&self, image: &InlineImage, prompt: &str) -> AppResult<InlineImage>;

    /// Check if the provider is reachable and the API key is valid
    async fn health_check(&self) -> AppResult<bool>;
}
