// ABOUTME: Environment configuration management for storage, AI service, and logging
// ABOUTME: Parses FORMFIT_* and GEMINI_API_KEY variables into a typed AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::time::Duration;

use formfit_core::errors::AppResult;
use tracing::{info, warn};

use super::types::{Environment, LogLevel, StorageBackend};

/// Environment variable names
pub mod env_vars {
    /// Storage location (`memory`, `file:<dir>` or a directory path)
    pub const DATA_DIR: &str = "FORMFIT_DATA_DIR";
    /// Gemini API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Legacy API key variable used by the browser build
    pub const LEGACY_API_KEY: &str = "API_KEY";
    /// Model used for diet plans and form tips
    pub const TEXT_MODEL: &str = "FORMFIT_TEXT_MODEL";
    /// Model used for image editing
    pub const IMAGE_MODEL: &str = "FORMFIT_IMAGE_MODEL";
    /// HTTP timeout for AI requests in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FORMFIT_HTTP_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Default model for structured text generation
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
/// Default model for image editing
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Default AI request timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Generative AI service settings
#[derive(Clone)]
pub struct AiConfig {
    /// API key; `None` puts the diet planner and form coach in offline mode
    pub api_key: Option<String>,
    /// Model for text and structured generation
    pub text_model: String,
    /// Model for image editing
    pub image_model: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl AiConfig {
    /// Load AI settings from the environment
    ///
    /// `GEMINI_API_KEY` takes precedence over the legacy `API_KEY`. Empty
    /// values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = non_empty_var(env_vars::GEMINI_API_KEY)
            .or_else(|| non_empty_var(env_vars::LEGACY_API_KEY));

        let request_timeout = match env::var(env_vars::HTTP_TIMEOUT_SECS) {
            Ok(raw) => raw.parse().map_or_else(
                |_| {
                    warn!(
                        value = %raw,
                        "Invalid {}, using default of {DEFAULT_HTTP_TIMEOUT_SECS}s",
                        env_vars::HTTP_TIMEOUT_SECS
                    );
                    Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
                },
                Duration::from_secs,
            ),
            Err(_) => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Self {
            api_key,
            text_model: non_empty_var(env_vars::TEXT_MODEL)
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_owned()),
            image_model: non_empty_var(env_vars::IMAGE_MODEL)
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_owned()),
            request_timeout,
        }
    }

    /// Whether an API key is available
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            text_model: DEFAULT_TEXT_MODEL.to_owned(),
            image_model: DEFAULT_IMAGE_MODEL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Debug for AiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: LogLevel,
    /// Record store location
    pub storage: StorageBackend,
    /// Generative AI settings
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `FORMFIT_DATA_DIR` is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let storage = match non_empty_var(env_vars::DATA_DIR) {
            Some(location) => StorageBackend::parse_url(&location)?,
            None => StorageBackend::File {
                path: default_data_dir(),
            },
        };

        let config = Self {
            environment: Environment::from_str_or_default(
                &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
            ),
            log_level: LogLevel::from_str_or_default(
                &env::var(env_vars::RUST_LOG).unwrap_or_default(),
            ),
            storage,
            ai: AiConfig::from_env(),
        };

        config.log_summary();
        Ok(config)
    }

    /// Override the storage location (e.g. from a CLI flag)
    #[must_use]
    pub fn with_storage(mut self, storage: StorageBackend) -> Self {
        self.storage = storage;
        self
    }

    /// Log a configuration summary without secrets
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            storage = %self.storage,
            ai.configured = self.ai.is_configured(),
            ai.text_model = %self.ai.text_model,
            ai.image_model = %self.ai.image_model,
            "Configuration loaded"
        );
        if !self.ai.is_configured() {
            warn!(
                "No {} set; diet plans and form tips will use offline defaults",
                env_vars::GEMINI_API_KEY
            );
        }
    }
}

/// Default data directory: the platform data dir plus `formfit`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".formfit"), |dir| dir.join("formfit"))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!(
            StorageBackend::parse_url("memory").unwrap(),
            StorageBackend::Memory
        );
        assert_eq!(
            StorageBackend::parse_url("file:/tmp/formfit").unwrap(),
            StorageBackend::File {
                path: PathBuf::from("/tmp/formfit")
            }
        );
        assert_eq!(
            StorageBackend::parse_url("./data").unwrap(),
            StorageBackend::File {
                path: PathBuf::from("./data")
            }
        );
        assert!(StorageBackend::parse_url("  ").is_err());
    }

    #[test]
    fn test_ai_config_debug_redacts_key() {
        let config = AiConfig {
            api_key: Some("secret-key".to_owned()),
            ..AiConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_log_level_fallback() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("formfit=trace"), LogLevel::Info);
    }
}
