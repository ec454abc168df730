// ABOUTME: Main library entry point for the DailyCook recipe engine host
// ABOUTME: Wires environment configuration and logging around the recipe matching engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

#![deny(unsafe_code)]

//! # DailyCook
//!
//! Deterministic recipe backend: turns free-text ingredient lists into
//! canonical names, ranks the recipes a user can cook right now, serves
//! fitness, cuisine, and drink listings, and picks a stable recipe of the day.
//!
//! ## Architecture
//!
//! - **dailycook-core**: errors, constants, and the dataset models
//! - **dailycook-intelligence**: vocabulary, normalizer, matcher, daily
//!   selector, generated-recipe cache, and the `RecipeEngine` facade
//! - **this crate**: environment configuration, logging, and the
//!   `dailycook-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dailycook::config::EngineConfig;
//! use dailycook::build_engine;
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = build_engine(&EngineConfig::from_env()?);
//!     let ingredients = engine.parse_input("pyaz, tamatar, eggs");
//!     for card in engine.match_by_ingredients(&ingredients, None) {
//!         println!("{} ({} min)", card.name, card.time_minutes);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use dailycook_core::{constants, errors, models, EngineError, EngineResult, ErrorCode};
pub use dailycook_intelligence::{
    DailyPick, EphemeralRecipeCache, IngredientNormalizer, RecipeCacheConfig, RecipeCacheStats,
    RecipeEngine, RecipeMatch,
};

use config::EngineConfig;

/// Build a recipe engine from configuration
///
/// Dataset problems never fail startup; see [`RecipeEngine::load`].
#[must_use]
pub fn build_engine(config: &EngineConfig) -> RecipeEngine {
    RecipeEngine::load(config.dataset_path.as_deref(), config.cache.clone())
}
