// ABOUTME: Environment configuration for the recipe engine's dataset source and generated-recipe cache
// ABOUTME: Reads DAILYCOOK_* variables with defaults and reports malformed values with context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

//! Environment-based configuration

use anyhow::Result;
use dailycook_core::constants::cache::{
    DEFAULT_RECIPE_CACHE_MAX_ENTRIES, DEFAULT_RECIPE_CACHE_TTL_SECS,
};
use dailycook_core::EngineError;
use dailycook_intelligence::RecipeCacheConfig;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment variable names read by [`EngineConfig::from_env`]
pub mod env_keys {
    /// JSON dataset replacing the bundled one
    pub const DATASET_PATH: &str = "DAILYCOOK_DATASET_PATH";
    /// LRU capacity of the generated-recipe cache
    pub const RECIPE_CACHE_MAX_ENTRIES: &str = "DAILYCOOK_RECIPE_CACHE_MAX_ENTRIES";
    /// Generated-recipe lifetime in seconds, `0` disables expiry
    pub const RECIPE_CACHE_TTL_SECS: &str = "DAILYCOOK_RECIPE_CACHE_TTL_SECS";
}

/// Startup configuration for a [`dailycook_intelligence::RecipeEngine`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Dataset file; `None` uses the dataset compiled into the binary
    pub dataset_path: Option<PathBuf>,
    /// Generated-recipe cache settings
    pub cache: RecipeCacheConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if a cache variable is not a non-negative integer.
    pub fn from_env() -> Result<Self> {
        let dataset_path = env::var(env_keys::DATASET_PATH)
            .ok()
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let max_entries: usize = parse_env_number(
            env_keys::RECIPE_CACHE_MAX_ENTRIES,
            DEFAULT_RECIPE_CACHE_MAX_ENTRIES,
        )?;
        let ttl_secs: u64 =
            parse_env_number(env_keys::RECIPE_CACHE_TTL_SECS, DEFAULT_RECIPE_CACHE_TTL_SECS)?;

        let config = Self {
            dataset_path,
            cache: RecipeCacheConfig {
                max_entries,
                ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
            },
        };
        config.log_summary();
        Ok(config)
    }

    /// Log the effective configuration
    pub fn log_summary(&self) {
        info!(
            dataset = %self
                .dataset_path
                .as_ref()
                .map_or_else(|| "bundled".to_owned(), |p| p.display().to_string()),
            cache.max_entries = self.cache.max_entries,
            cache.ttl_secs = self.cache.ttl.map_or(0, |ttl| ttl.as_secs()),
            "Engine configuration loaded"
        );
    }
}

/// Parse a numeric environment variable, falling back to `default` when unset
fn parse_env_number<T>(key: &str, default: T) -> Result<T, EngineError>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|e| EngineError::Config(format!("Invalid {key} value {raw:?}: {e}")))
    })
}
