// ABOUTME: Configuration management module for application settings
// ABOUTME: Environment-only configuration for storage, AI service, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `FormFit`
//!
//! Configuration is read from environment variables only; CLI flags may
//! override individual values after loading.

/// Environment-driven application configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::{AiConfig, AppConfig};
pub use types::{Environment, LogLevel, StorageBackend};
