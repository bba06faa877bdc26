// ABOUTME: Image studio service applying prompt-driven edits to user photos
// ABOUTME: Requires a configured image-capable provider and propagates its errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use formfit_core::errors::{AppError, AppResult, ErrorCode};
use tracing::info;

use crate::llm::{InlineImage, LlmProvider};

/// Prompt-driven photo editor
#[derive(Clone, Default)]
pub struct ImageStudio {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl ImageStudio {
    /// Create a studio; editing fails with `ConfigMissing` when `provider` is `None`
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    /// Apply `prompt` to `image`
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` without a provider, `MissingRequiredField` for a blank
    /// prompt, `ConfigError` for a provider that cannot edit images, or the
    /// provider's own error
    pub async fn edit(&self, image: &InlineImage, prompt: &str) -> AppResult<InlineImage> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| AppError::new(ErrorCode::ConfigMissing, "API key missing"))?;

        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "An edit prompt is required",
            ));
        }
        if !provider.capabilities().supports_image_edit() {
            return Err(AppError::config(format!(
                "{} does not support image editing",
                provider.display_name()
            )));
        }

        let edited = provider.edit_image(image, prompt).await?;
        info!(
            provider = provider.name(),
            input.mime = %image.mime_type,
            output.mime = %edited.mime_type,
            "Image edited"
        );
        Ok(edited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_provider_is_config_missing() {
        let image = InlineImage::from_bytes("image/png", b"png").unwrap();
        let err = ImageStudio::default().edit(&image, "retro").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissing);
        assert_eq!(err.message, "API key missing");
    }
}
