// ABOUTME: Re-exports command modules for the formfit CLI
// ABOUTME: Profile, training, plan, diet, image, and status commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod diet;
pub mod image;
pub mod plans;
pub mod profile;
pub mod status;
pub mod training;
