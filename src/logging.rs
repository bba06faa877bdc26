// ABOUTME: Logging configuration and structured logging setup for the FormFit CLI
// ABOUTME: Configures log levels, formatters, and structured training and AI service events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging built on `tracing-subscriber`
//!
//! Log output goes to stderr so that command output on stdout stays clean.

use std::env;
use std::io;

use anyhow::Result;
use formfit_core::constants::service_names;
use formfit_core::models::TargetReason;
use tracing::{info, warn, Level};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format, the CLI default
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::FORMFIT.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let is_production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: LogFormat::from_str_or_default(&env::var("LOG_FORMAT").unwrap_or_default()),
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: defaults.service_name,
            service_version: defaults.service_version,
            environment,
        }
    }

    /// Raise the level to `debug` (used by `--verbose`)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".into();
        self
    }

    /// Build the filter: the configured level plus noise reduction for HTTP internals
    fn env_filter(&self) -> EnvFilter {
        let directive = |raw: &str, fallback: Level| -> Directive {
            raw.parse().unwrap_or_else(|_| fallback.into())
        };

        EnvFilter::new(&self.level)
            .add_directive(directive("hyper=warn", Level::WARN))
            .add_directive(directive("hyper_util=warn", Level::WARN))
            .add_directive(directive("reqwest=warn", Level::WARN))
            .add_directive(directive("rustls=warn", Level::WARN))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "FormFit starting up"
        );
    }
}

/// Application-specific structured events
pub struct AppLogger;

impl AppLogger {
    /// Log a computed workout target
    pub fn log_target_computed(exercise_id: &str, weight: f64, reps: u32, reason: TargetReason) {
        info!(
            exercise.id = %exercise_id,
            target.weight = weight,
            target.reps = reps,
            target.reason = %reason,
            "Workout target computed"
        );
    }

    /// Log a recorded set
    pub fn log_set_recorded(exercise_id: &str, weight: f64, reps: u32, rpe: f64) {
        info!(
            exercise.id = %exercise_id,
            set.weight = weight,
            set.reps = reps,
            set.rpe = rpe,
            "Set recorded"
        );
    }

    /// Log a record store operation
    pub fn log_storage_operation(operation: &str, key: &str, success: bool, duration_ms: u64) {
        info!(
            storage.operation = %operation,
            storage.key = %key,
            storage.success = success,
            storage.duration_ms = duration_ms,
            "Storage operation"
        );
    }

    /// Log an AI service call
    pub fn log_ai_request(
        provider: &str,
        model: &str,
        operation: &str,
        success: bool,
        duration_ms: u64,
    ) {
        info!(
            ai.provider = %provider,
            ai.model = %model,
            ai.operation = %operation,
            ai.success = success,
            ai.duration_ms = duration_ms,
            "AI service call"
        );
    }

    /// Log a degradation to an offline or fallback result
    pub fn log_ai_fallback(operation: &str, reason: &str) {
        warn!(
            ai.operation = %operation,
            ai.fallback_reason = %reason,
            "AI service unavailable, using fallback"
        );
    }
}
