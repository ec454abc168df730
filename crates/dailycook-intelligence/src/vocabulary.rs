// ABOUTME: Canonical ingredient vocabulary mapping every known alias to one canonical name
// ABOUTME: Built once from the dataset alias table and read concurrently without locking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// One alias and the canonical ingredient it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
struct AliasEntry {
    alias: String,
    canonical: String,
}

/// Immutable alias table
///
/// Aliases are stored trimmed and lowercased. Iteration order is fixed:
/// first every canonical name (each maps to itself) in ascending order,
/// then each canonical's aliases in dataset order. Approximate matching
/// relies on this order to break ties reproducibly.
///
/// An alias resolves to exactly one canonical ingredient. When the dataset
/// lists the same alias under two canonical names, the first mapping is kept
/// and the conflict is logged. A canonical name always resolves to itself.
#[derive(Debug, Clone, Default)]
pub struct CanonicalVocabulary {
    entries: Vec<AliasEntry>,
    index: HashMap<String, usize>,
    canonical_count: usize,
}

impl CanonicalVocabulary {
    /// Build the vocabulary from a `canonical -> aliases` table
    #[must_use]
    pub fn from_alias_table(table: &BTreeMap<String, Vec<String>>) -> Self {
        let mut vocabulary = Self::default();

        for canonical in table.keys() {
            let canonical = clean(canonical);
            if !canonical.is_empty() && vocabulary.insert(&canonical, &canonical) {
                vocabulary.canonical_count += 1;
            }
        }

        for (canonical, aliases) in table {
            let canonical = clean(canonical);
            if canonical.is_empty() {
                continue;
            }
            for alias in aliases {
                let alias = clean(alias);
                if !alias.is_empty() {
                    vocabulary.insert(&alias, &canonical);
                }
            }
        }

        vocabulary
    }

    /// Vocabulary with no aliases; every ingredient passes through unchanged
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    fn insert(&mut self, alias: &str, canonical: &str) -> bool {
        match self.index.entry(alias.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(AliasEntry {
                    alias: alias.to_owned(),
                    canonical: canonical.to_owned(),
                });
                true
            }
            Entry::Occupied(slot) => {
                let existing = &self.entries[*slot.get()].canonical;
                if existing != canonical {
                    warn!(
                        alias = %alias,
                        kept = %existing,
                        ignored = %canonical,
                        "Ingredient alias listed under two canonical names"
                    );
                }
                false
            }
        }
    }

    /// Resolve an already-cleaned alias exactly
    #[must_use]
    pub fn canonical_for(&self, alias: &str) -> Option<&str> {
        self.index
            .get(alias)
            .map(|&i| self.entries[i].canonical.as_str())
    }

    /// Iterate `(alias, canonical)` pairs in vocabulary order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.alias.as_str(), e.canonical.as_str()))
    }

    /// Number of distinct alias strings, canonical names included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the vocabulary has no aliases
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of canonical ingredients
    #[must_use]
    pub const fn canonical_count(&self) -> usize {
        self.canonical_count
    }
}

/// Trim and lowercase a token for comparison
pub(crate) fn clean(token: &str) -> String {
    token.trim().to_lowercase()
}
