// ABOUTME: Tests for environment-driven engine configuration and engine bootstrap
// ABOUTME: Validates defaults, overrides, malformed values, and dataset fallback on load failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dailycook::build_engine;
use dailycook::config::{env_keys, EngineConfig};
use dailycook::constants::cache::{DEFAULT_RECIPE_CACHE_MAX_ENTRIES, DEFAULT_RECIPE_CACHE_TTL_SECS};
use dailycook::{EngineError, ErrorCode};
use serial_test::serial;
use std::env;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var(env_keys::DATASET_PATH);
    env::remove_var(env_keys::RECIPE_CACHE_MAX_ENTRIES);
    env::remove_var(env_keys::RECIPE_CACHE_TTL_SECS);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = EngineConfig::from_env().unwrap();

    assert_eq!(config.dataset_path, None);
    assert_eq!(config.cache.max_entries, DEFAULT_RECIPE_CACHE_MAX_ENTRIES);
    assert_eq!(
        config.cache.ttl,
        Some(Duration::from_secs(DEFAULT_RECIPE_CACHE_TTL_SECS))
    );
    assert_eq!(config, EngineConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_keys::DATASET_PATH, "/srv/dailycook/recipes.json");
    env::set_var(env_keys::RECIPE_CACHE_MAX_ENTRIES, "64");
    env::set_var(env_keys::RECIPE_CACHE_TTL_SECS, " 600 ");

    let config = EngineConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config.dataset_path.as_deref().and_then(|p| p.to_str()),
        Some("/srv/dailycook/recipes.json")
    );
    assert_eq!(config.cache.max_entries, 64);
    assert_eq!(config.cache.ttl, Some(Duration::from_secs(600)));
}

#[test]
#[serial]
fn test_zero_ttl_disables_expiry_and_blank_path_is_ignored() {
    clear_env();
    env::set_var(env_keys::DATASET_PATH, "   ");
    env::set_var(env_keys::RECIPE_CACHE_TTL_SECS, "0");

    let config = EngineConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.dataset_path, None);
    assert_eq!(config.cache.ttl, None);
}

#[test]
#[serial]
fn test_malformed_numbers_are_errors() {
    clear_env();
    env::set_var(env_keys::RECIPE_CACHE_MAX_ENTRIES, "lots");
    let err = EngineConfig::from_env().unwrap_err();
    assert!(err.to_string().contains(env_keys::RECIPE_CACHE_MAX_ENTRIES));

    clear_env();
    env::set_var(env_keys::RECIPE_CACHE_TTL_SECS, "-5");
    let err = EngineConfig::from_env().unwrap_err();
    assert!(err.to_string().contains(env_keys::RECIPE_CACHE_TTL_SECS));
    clear_env();
}

#[test]
#[serial]
fn test_malformed_numbers_report_config_invalid() {
    clear_env();
    env::set_var(env_keys::RECIPE_CACHE_MAX_ENTRIES, "1.5");
    let err = EngineConfig::from_env().unwrap_err();
    clear_env();

    let engine_err = err.downcast_ref::<EngineError>().unwrap();
    assert!(matches!(engine_err, EngineError::Config(_)));
    assert_eq!(engine_err.code(), ErrorCode::ConfigInvalid);
    assert!(engine_err.to_string().contains("\"1.5\""));
}

#[test]
#[serial]
fn test_engine_loads_dataset_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(
        &path,
        r#"{
            "ingredient_aliases": {"onion": ["pyaz"]},
            "recipes": [{
                "id": "pyaz-fry", "name": "Pyaz Fry", "cuisine": "Indian", "category": "food",
                "diet": "veg", "difficulty": "Easy", "time_minutes": 10,
                "required_ingredients": ["onion"], "steps": ["Fry."],
                "nutrition": {"calories": 90, "protein_g": 1, "carbs_g": 10, "fats_g": 5}
            }],
            "drinks": []
        }"#,
    )
    .unwrap();
    env::set_var(env_keys::DATASET_PATH, &path);

    let engine = build_engine(&EngineConfig::from_env().unwrap());
    clear_env();

    assert_eq!(engine.catalog().recipes().len(), 1);
    let cards = engine.match_by_ingredients(&engine.parse_input("Pyaz"), None);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, "pyaz-fry");
}

#[test]
#[serial]
fn test_unreadable_or_invalid_dataset_starts_empty() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let missing = EngineConfig {
        dataset_path: Some(dir.path().join("absent.json")),
        ..EngineConfig::default()
    };
    let engine = build_engine(&missing);
    assert!(engine.catalog().is_empty());
    assert!(engine.get_recipe_of_the_day().is_none());
    // normalization still works as a literal pass-through
    assert_eq!(engine.normalize("  Pyaz "), "pyaz");

    let duplicated = dir.path().join("dup.json");
    fs::write(
        &duplicated,
        r#"{"recipes": [
            {"id": "x", "name": "X", "cuisine": "Global", "category": "food", "diet": "veg",
             "difficulty": "Easy", "time_minutes": 5, "required_ingredients": [], "steps": [],
             "nutrition": {"calories": 1, "protein_g": 0, "carbs_g": 0, "fats_g": 0}},
            {"id": "x", "name": "X again", "cuisine": "Global", "category": "food", "diet": "veg",
             "difficulty": "Easy", "time_minutes": 5, "required_ingredients": [], "steps": [],
             "nutrition": {"calories": 1, "protein_g": 0, "carbs_g": 0, "fats_g": 0}}
        ]}"#,
    )
    .unwrap();
    let engine = build_engine(&EngineConfig {
        dataset_path: Some(duplicated),
        ..EngineConfig::default()
    });
    assert!(engine.catalog().is_empty());
}
