// ABOUTME: Re-exports helper modules for the formfit CLI
// ABOUTME: Provides access to terminal display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
