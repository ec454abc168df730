// ABOUTME: Property-style tests for ingredient normalization through the engine
// ABOUTME: Every alias resolves regardless of case or padding; list and input parsing invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{dataset, engine_with, fixture_aliases};
use dailycook::{RecipeCacheConfig, RecipeEngine};
use serde_json::json;

#[test]
fn test_every_alias_resolves_under_case_and_whitespace_changes() {
    let engine = engine_with(vec![], vec![]);
    let pairs: Vec<(String, String)> = engine
        .normalizer()
        .vocabulary()
        .aliases()
        .map(|(alias, canonical)| (alias.to_owned(), canonical.to_owned()))
        .collect();
    assert!(!pairs.is_empty());

    for (alias, canonical) in pairs {
        for variant in [
            alias.clone(),
            alias.to_uppercase(),
            format!("  {alias}\t"),
            format!(" {} ", alias.to_uppercase()),
        ] {
            assert_eq!(engine.normalize(&variant), canonical, "variant {variant:?}");
        }
    }
}

#[test]
fn test_blank_and_delimiter_only_input_is_empty() {
    let engine = engine_with(vec![], vec![]);
    for raw in ["", "   ", ",,,", " ; \n , "] {
        assert!(engine.parse_input(raw).is_empty(), "input {raw:?}");
    }
}

#[test]
fn test_normalize_list_dedups_in_first_seen_order() {
    let engine = engine_with(vec![], vec![]);
    assert_eq!(engine.normalize_list(&["onion", "Onion", "ONION"]), vec!["onion"]);
    assert_eq!(
        engine.normalize_list(&["tamatar", "pyaz", "tomatoes", "", "onions", "saffron"]),
        vec!["tomato", "onion", "saffron"]
    );
}

#[test]
fn test_unknown_ingredients_pass_through_cleaned() {
    let engine = engine_with(vec![], vec![]);
    assert_eq!(engine.normalize("  Dragon Fruit "), "dragon fruit");
    assert_eq!(engine.parse_input("Saffron;  Star Anise"), vec!["saffron", "star anise"]);
}

#[test]
fn test_close_misspellings_resolve() {
    let engine = engine_with(vec![], vec![]);
    assert_eq!(engine.normalize("tomatoe"), "tomato");
    assert_eq!(engine.normalize("chiken breast"), "chicken");
    assert_eq!(engine.normalize("garlik"), "garlic");
}

#[test]
fn test_swapped_adjacent_letters_resolve() {
    let engine = engine_with(vec![], vec![]);
    assert_eq!(engine.normalize("onoin"), "onion");
    assert_eq!(engine.normalize("Garlci"), "garlic");
    assert_eq!(engine.normalize(" tomtao "), "tomato");
    assert_eq!(engine.parse_input("onoin, garlci"), vec!["onion", "garlic"]);
}

#[test]
fn test_alias_listed_twice_keeps_first_canonical() {
    let aliases = json!({
        "chili": ["mirch"],
        "pepper": ["mirch", "kali mirch"]
    });
    let engine = RecipeEngine::new(
        dataset(aliases, vec![], vec![]),
        RecipeCacheConfig::default(),
    );
    assert_eq!(engine.normalize("mirch"), "chili");
    assert_eq!(engine.normalize("kali mirch"), "pepper");
    assert_eq!(engine.normalize("pepper"), "pepper");
}

#[test]
fn test_canonical_names_resolve_to_themselves() {
    let engine = RecipeEngine::new(
        dataset(fixture_aliases(), vec![], vec![]),
        RecipeCacheConfig::default(),
    );
    for canonical in ["onion", "tomato", "garlic", "salt", "oil"] {
        assert_eq!(engine.normalize(canonical), canonical);
    }
}
