// ABOUTME: Bounded in-memory cache for runtime-generated recipes with LRU eviction and TTL
// ABOUTME: Lets detail lookups find recipes the external writer produced earlier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

//! Ephemeral Recipe Cache
//!
//! Generated recipes are not part of the static catalog, yet clients ask for
//! their details by id right after a matching call returns them. This cache
//! holds them for a while.
//!
//! Key properties:
//! - Capacity-bounded: the least-recently-used recipe is evicted first
//! - Optional TTL: expired recipes are treated as absent and dropped lazily
//! - Last writer wins on id collision
//! - Non-critical: a poisoned lock skips writes and reads as empty

use dailycook_core::constants::cache::{
    DEFAULT_RECIPE_CACHE_MAX_ENTRIES, DEFAULT_RECIPE_CACHE_TTL_SECS,
};
use dailycook_core::models::Recipe;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for the ephemeral recipe cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCacheConfig {
    /// Maximum number of cached recipes
    pub max_entries: usize,
    /// How long a recipe stays retrievable; `None` keeps it until evicted
    pub ttl: Option<Duration>,
}

impl Default for RecipeCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_RECIPE_CACHE_MAX_ENTRIES,
            ttl: Some(Duration::from_secs(DEFAULT_RECIPE_CACHE_TTL_SECS)),
        }
    }
}

/// Point-in-time cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCacheStats {
    /// Recipes currently stored, expired ones included
    pub entries: usize,
    /// Stored recipes past their TTL
    pub expired: usize,
    /// Maximum number of recipes
    pub capacity: usize,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    recipe: Recipe,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(recipe: Recipe, ttl: Option<Duration>) -> Self {
        Self {
            recipe,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// Thread-safe id to recipe cache for generated recipes
///
/// `LruCache::get` updates recency and so needs `&mut`; a `Mutex` guards it.
#[derive(Debug)]
pub struct EphemeralRecipeCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    config: RecipeCacheConfig,
}

impl EphemeralRecipeCache {
    /// Capacity used when the configuration asks for zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_RECIPE_CACHE_MAX_ENTRIES)
    {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RecipeCacheConfig::default())
    }

    /// Create a cache with custom configuration
    #[must_use]
    pub fn with_config(config: RecipeCacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            config: RecipeCacheConfig {
                max_entries: capacity.get(),
                ..config
            },
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecipeCacheConfig {
        &self.config
    }

    /// Store a recipe under `id`, replacing any previous one
    ///
    /// Silently skipped if the lock is poisoned.
    pub fn put(&self, id: impl Into<String>, recipe: Recipe) {
        let id = id.into();
        let entry = CacheEntry::new(recipe, self.config.ttl);

        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if let Some((evicted, _)) = entries.push(id.clone(), entry) {
            if evicted != id {
                debug!(evicted = %evicted, "Evicted least recently used generated recipe");
            }
        }
    }

    /// Fetch a live recipe by id
    ///
    /// Expired recipes are removed and reported as absent.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Recipe> {
        let Ok(mut entries) = self.entries.lock() else {
            return None;
        };

        if entries.get(id)?.is_expired() {
            entries.pop(id);
            return None;
        }
        entries.get(id).map(|entry| entry.recipe.clone())
    }

    /// Check whether a live recipe is stored under `id` without touching recency
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries
            .lock()
            .is_ok_and(|entries| entries.peek(id).is_some_and(|e| !e.is_expired()))
    }

    /// Remove a recipe, returning it if it was live
    pub fn remove(&self, id: &str) -> Option<Recipe> {
        let entry = self.entries.lock().ok()?.pop(id)?;
        (!entry.is_expired()).then_some(entry.recipe)
    }

    /// Drop every expired recipe, returning how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let Ok(mut entries) = self.entries.lock() else {
            return 0;
        };

        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(id, _)| id.clone())
            .collect();
        for id in &expired {
            entries.pop(id);
        }

        if !expired.is_empty() {
            debug!("Cleaned up {} expired generated recipes", expired.len());
        }
        expired.len()
    }

    /// Number of stored recipes, expired ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Check whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every recipe
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    /// Current statistics; zeroed if the lock is poisoned
    #[must_use]
    pub fn stats(&self) -> RecipeCacheStats {
        let capacity = self.config.max_entries;
        let Ok(entries) = self.entries.lock() else {
            return RecipeCacheStats {
                entries: 0,
                expired: 0,
                capacity,
            };
        };
        RecipeCacheStats {
            entries: entries.len(),
            expired: entries.iter().filter(|(_, e)| e.is_expired()).count(),
            capacity,
        }
    }
}

impl Default for EphemeralRecipeCache {
    fn default() -> Self {
        Self::new()
    }
}
