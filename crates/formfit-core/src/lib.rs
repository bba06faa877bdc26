// ABOUTME: Core types and constants for the FormFit training tracker
// ABOUTME: Foundation crate with error handling, data models, and the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FormFit` Core
//!
//! Foundation crate shared by the intelligence engine and the application
//! crate. It changes rarely, which keeps incremental builds of the workspace
//! fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **models**: Performance logs, workout targets, profiles, plans and diet plans
//! - **constants**: Storage keys, rule parameters, exercise catalog and default plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models
pub mod models;

/// Application constants organized by domain
pub mod constants;
