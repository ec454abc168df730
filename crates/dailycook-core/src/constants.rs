// ABOUTME: Engine-wide constants for fuzzy matching, ranking, daily selection, and caching
// ABOUTME: Values here are part of the observable matching contract and are not configurable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

/// Ingredient normalization thresholds
pub mod matching {
    /// Minimum similarity (0-100) for an approximate alias match to be accepted
    pub const FUZZY_MATCH_CUTOFF: f64 = 80.0;

    /// Maximum number of cards returned by ingredient matching
    pub const MAX_INGREDIENT_MATCHES: usize = 3;
}

/// Recipe-of-the-day eligibility and reason thresholds
pub mod daily {
    /// Eligible recipes take at most this many minutes
    pub const MAX_ELIGIBLE_MINUTES: u32 = 20;

    /// Eligible recipes require at most this many ingredients
    pub const MAX_ELIGIBLE_REQUIRED: usize = 6;

    /// "quick to make" applies at or under this many minutes
    pub const QUICK_MINUTES: u32 = 15;

    /// "protein-rich" applies at or above this many grams of protein
    pub const PROTEIN_RICH_GRAMS: u32 = 15;

    /// "uses everyday ingredients" applies at or under this many required ingredients
    pub const EVERYDAY_REQUIRED: usize = 5;

    /// Prefix of every reason string
    pub const REASON_PREFIX: &str = "Today's pick: ";

    /// Reason used when no clause applies
    pub const FALLBACK_REASON: &str = "balanced and tasty";
}

/// Ephemeral recipe cache defaults
pub mod cache {
    /// Default LRU capacity for generated recipes
    pub const DEFAULT_RECIPE_CACHE_MAX_ENTRIES: usize = 1_000;

    /// Default TTL for generated recipes (24 hours)
    pub const DEFAULT_RECIPE_CACHE_TTL_SECS: u64 = 86_400;
}

/// Fallback recipe generation limits
pub mod fallback {
    /// Prefix of generated fallback recipe ids
    pub const ID_PREFIX: &str = "backup-";

    /// Fewest servings a fallback recipe is scaled to
    pub const MIN_SERVINGS: u32 = 1;

    /// Most servings a fallback recipe is scaled to
    pub const MAX_SERVINGS: u32 = 10;

    /// Cooking time advertised for every fallback recipe
    pub const TIME_MINUTES: u32 = 15;
}

/// Shown next to every nutrition figure the engine returns
pub const NUTRITION_DISCLAIMER: &str = "Nutrition values are estimates based on standard raw ingredients. Actual values may vary based on portion sizes and cooking methods.";
