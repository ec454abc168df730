// ABOUTME: Ingredient matching and recipe ranking engine for DailyCook
// ABOUTME: Canonicalizes free-text ingredients, ranks makeable recipes, and picks a daily recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

#![deny(unsafe_code)]

//! # DailyCook Intelligence
//!
//! The deterministic half of the recipe backend. Request handlers hand it
//! free-text ingredient input and filters; it answers with ranked recipe
//! cards, filtered listings, and a stable recipe of the day. Generated
//! recipes from the external writer are parked in an ephemeral cache so
//! detail lookups can find them later.
//!
//! Every component is an explicit object built once at startup:
//!
//! ```text
//! RecipeDataset ──► CanonicalVocabulary ──► IngredientNormalizer
//!              └──► RecipeCatalog ─────────┐         │
//!                                          ▼         ▼
//!                           DailySelector   RecipeMatcher ◄── EphemeralRecipeCache
//!                                    └────────┬───┘
//!                                        RecipeEngine
//! ```

/// Canonical ingredient vocabulary built from the alias table
pub mod vocabulary;

/// Free-text ingredient normalization with exact and approximate matching
pub mod normalizer;

/// Immutable recipe and drink catalog
pub mod catalog;

/// Ingredient matching, ranking, and filtered listings
pub mod matching;

/// Date-seeded recipe of the day
pub mod daily;

/// Bounded cache for runtime-generated recipes
pub mod recipe_cache;

/// Deterministic fallback recipe generation
pub mod fallback;

/// Facade composing every engine component
pub mod engine;

pub use catalog::RecipeCatalog;
pub use daily::{DailyPick, DailySelector};
pub use engine::RecipeEngine;
pub use fallback::generate_fallback_recipe;
pub use matching::{RecipeMatch, RecipeMatcher};
pub use normalizer::IngredientNormalizer;
pub use recipe_cache::{EphemeralRecipeCache, RecipeCacheConfig, RecipeCacheStats};
pub use vocabulary::CanonicalVocabulary;
