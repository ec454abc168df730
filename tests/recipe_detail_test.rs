// ABOUTME: Integration tests for recipe detail lookup through the generated-recipe cache
// ABOUTME: Covers cache shadowing, eviction, fallback generation, and concurrent inserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{dataset, engine_with, fixture_aliases, recipe};
use dailycook::models::{Diet, Recipe};
use dailycook::{ErrorCode, RecipeCacheConfig, RecipeEngine};
use serde_json::Value;
use std::sync::Arc;
use std::thread;

fn parse_recipe(value: Value) -> Recipe {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_generated_recipe_is_retrievable_until_evicted() {
    let engine = engine_with(vec![recipe("r1", "veg", &["onion"], &[])], vec![]);
    let generated = parse_recipe(recipe("ai-paneer-wrap", "veg", &["paneer"], &[]));

    assert!(engine.get_recipe_detail("ai-paneer-wrap").is_none());

    engine.put("ai-paneer-wrap", generated.clone());
    assert_eq!(engine.get_recipe_detail("ai-paneer-wrap"), Some(generated.clone()));

    assert_eq!(engine.evict("ai-paneer-wrap"), Some(generated));
    assert!(engine.get_recipe_detail("ai-paneer-wrap").is_none());
}

#[test]
fn test_generated_recipe_shadows_catalog_recipe() {
    let engine = engine_with(vec![recipe("r1", "veg", &["onion"], &[])], vec![]);
    let mut replacement = parse_recipe(recipe("r1", "egg", &["egg"], &[]));
    replacement.name = "Generated r1".to_owned();

    assert_eq!(engine.get_recipe_detail("r1").unwrap().name, "Recipe r1");

    engine.put("r1", replacement);
    assert_eq!(engine.get_recipe_detail("r1").unwrap().name, "Generated r1");

    // evicting the shadow exposes the catalog recipe again
    engine.evict("r1");
    assert_eq!(engine.get_recipe_detail("r1").unwrap().name, "Recipe r1");
}

#[test]
fn test_detail_lookup_is_exact() {
    let engine = engine_with(vec![recipe("r1", "veg", &["onion"], &[])], vec![]);
    assert!(engine.get_recipe_detail("R1").is_none());
    assert!(engine.get_recipe_detail(" r1").is_none());
}

#[test]
fn test_cache_capacity_bounds_generated_recipes() {
    let engine = RecipeEngine::new(
        dataset(fixture_aliases(), vec![], vec![]),
        RecipeCacheConfig {
            max_entries: 2,
            ttl: None,
        },
    );

    for id in ["g1", "g2", "g3"] {
        engine.put(id, parse_recipe(recipe(id, "veg", &["onion"], &[])));
    }

    assert!(engine.get_recipe_detail("g1").is_none());
    assert!(engine.get_recipe_detail("g2").is_some());
    assert!(engine.get_recipe_detail("g3").is_some());
    assert_eq!(engine.generated_recipes().stats().capacity, 2);
}

#[test]
fn test_fallback_recipe_is_stored_for_detail_lookup() {
    let engine = engine_with(vec![], vec![]);
    let ingredients = engine.parse_input("pyaz, anda, tamatar");

    let generated = engine
        .generate_fallback_recipe(&ingredients, Some(Diet::Egg), 2)
        .unwrap();
    assert_eq!(generated.name, "Quick Onion Scramble");
    assert_eq!(generated.id, "backup-quick-onion-scramble");
    assert_eq!(generated.diet, Diet::Egg);
    assert_eq!(generated.required_ingredients, vec!["onion", "egg", "tomato"]);

    assert_eq!(engine.get_recipe_detail(&generated.id), Some(generated));
}

#[test]
fn test_fallback_rejects_empty_ingredients() {
    let engine = engine_with(vec![], vec![]);
    let err = engine
        .generate_fallback_recipe(&engine.parse_input(" ,, "), None, 2)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
    assert!(engine.generated_recipes().is_empty());
}

#[test]
fn test_concurrent_puts_and_reads() {
    let engine = Arc::new(engine_with(vec![], vec![]));
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for i in 0..25 {
                    let id = format!("w{worker}-{i}");
                    engine.put(id.clone(), parse_recipe(recipe(&id, "veg", &["onion"], &[])));
                    assert!(engine.get_recipe_detail(&id).is_some());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(engine.generated_recipes().len(), 200);
}
