// ABOUTME: Main library entry point for the FormFit training tracker
// ABOUTME: Storage, AI provider, coaching services, and configuration behind the formfit CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FormFit`
//!
//! A progressive overload training tracker. Every session the lifter gets a
//! target weight and rep count per exercise, computed from how the previous
//! session went; logs and plans are kept in a local keyed record store.
//! Optional Gemini integration generates diet plans, form tips and photo
//! edits.
//!
//! ## Architecture
//!
//! - **`formfit-core`**: errors, models, constants and the exercise catalog
//! - **`formfit-intelligence`**: the overload engine and derived stats
//! - **Storage**: pluggable keyed record store with typed repositories
//! - **LLM**: provider abstraction with a Gemini implementation
//! - **Services**: session, diet, coaching and image workflows
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use formfit::config::AppConfig;
//! use formfit::context::FormFitContext;
//! use formfit_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let ctx = FormFitContext::from_config(&config)?;
//!     let planned = ctx.session().target_for("squat")?;
//!     println!("{} kg x {}", planned.target.weight, planned.target.reps);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Dependency wiring for commands
pub mod context;

/// Generative AI providers and prompts
pub mod llm;

/// Structured logging setup and domain events
pub mod logging;

/// Session, diet, coaching and image services
pub mod services;

/// Keyed record store and typed repositories
pub mod storage;

pub use formfit_core::errors;
pub use formfit_core::models;
