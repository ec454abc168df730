// ABOUTME: Resolves free-text ingredient tokens to canonical names
// ABOUTME: Exact alias lookup first, then an LCS-based Indel ratio with an 80/100 cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

//! Ingredient Normalizer
//!
//! Maps arbitrary user spelling onto the canonical vocabulary:
//!
//! 1. Trim and lowercase the token.
//! 2. Exact alias hit: return its canonical name.
//! 3. Otherwise score the token against every alias with the Indel ratio
//!    `2 * LCS(a, b) / (len(a) + len(b)) * 100` and keep the best one. On a
//!    tie the alias that comes first in vocabulary order wins. A best score
//!    of at least 80 resolves to that alias's canonical name.
//! 4. Anything else passes through as its cleaned literal form.
//!
//! Normalization never fails; unknown ingredients are not an error.

use crate::vocabulary::{clean, CanonicalVocabulary};
use dailycook_core::constants::matching::FUZZY_MATCH_CUTOFF;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Best approximate alias for a token
#[derive(Debug, Clone, PartialEq)]
pub struct AliasMatch<'a> {
    /// Alias that scored highest
    pub alias: &'a str,
    /// Canonical ingredient the alias resolves to
    pub canonical: &'a str,
    /// Similarity on a 0-100 scale
    pub score: f64,
}

/// Ingredient normalizer over a shared vocabulary
#[derive(Debug, Clone)]
pub struct IngredientNormalizer {
    vocabulary: Arc<CanonicalVocabulary>,
}

impl IngredientNormalizer {
    /// Create a normalizer over the given vocabulary
    #[must_use]
    pub const fn new(vocabulary: Arc<CanonicalVocabulary>) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this normalizer resolves against
    #[must_use]
    pub fn vocabulary(&self) -> &CanonicalVocabulary {
        &self.vocabulary
    }

    /// Normalize a single ingredient token
    #[must_use]
    pub fn normalize(&self, token: &str) -> String {
        let cleaned = clean(token);

        if let Some(canonical) = self.vocabulary.canonical_for(&cleaned) {
            return canonical.to_owned();
        }

        match self.best_alias_match(&cleaned) {
            Some(found) if found.score >= FUZZY_MATCH_CUTOFF => {
                debug!(
                    token = %cleaned,
                    alias = found.alias,
                    canonical = found.canonical,
                    score = found.score,
                    "Resolved ingredient by approximate match"
                );
                found.canonical.to_owned()
            }
            _ => cleaned,
        }
    }

    /// Normalize tokens, dropping blanks and duplicates while keeping first-seen order
    #[must_use]
    pub fn normalize_list<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| !token.trim().is_empty())
            .map(|token| self.normalize(token))
            .filter(|canonical| seen.insert(canonical.clone()))
            .collect()
    }

    /// Split raw input on commas, semicolons, or newlines and normalize the pieces
    ///
    /// Blank or delimiter-only input yields an empty list.
    #[must_use]
    pub fn parse_input(&self, raw: &str) -> Vec<String> {
        let pieces: Vec<&str> = raw
            .split([',', ';', '\n'])
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect();
        self.normalize_list(&pieces)
    }

    /// Find the highest-scoring alias for an already-cleaned token
    ///
    /// Returns `None` only when the vocabulary is empty. The first alias in
    /// vocabulary order wins ties.
    #[must_use]
    pub fn best_alias_match(&self, cleaned: &str) -> Option<AliasMatch<'_>> {
        let mut best: Option<AliasMatch<'_>> = None;
        for (alias, canonical) in self.vocabulary.aliases() {
            let score = similarity(cleaned, alias);
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(AliasMatch {
                    alias,
                    canonical,
                    score,
                });
            }
        }
        best
    }
}

/// Indel similarity ratio between two strings on a 0-100 scale
///
/// Twice the longest common subsequence over the combined length, counted in
/// chars. A transposition costs one insertion and one deletion, so `onoin`
/// still scores 80 against `onion`. Two empty strings are identical.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    (2 * longest_common_subsequence(&a, &b)) as f64 / total as f64 * 100.0
}

/// Length of the longest common subsequence, one DP row at a time
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0_usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}
