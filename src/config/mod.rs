// ABOUTME: Configuration module for the DailyCook engine host
// ABOUTME: Environment-only settings for dataset location and generated-recipe caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

/// Environment variable configuration
pub mod environment;

pub use environment::{env_keys, EngineConfig};
