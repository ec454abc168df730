// ABOUTME: Shared fixture builders for recipe engine integration tests
// ABOUTME: Builds small inline datasets so every test owns an isolated engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `dailycook`

use dailycook::models::RecipeDataset;
use dailycook::{RecipeCacheConfig, RecipeEngine};
use serde_json::{json, Value};

/// Alias table used by most fixtures
pub fn fixture_aliases() -> Value {
    json!({
        "onion": ["onions", "pyaz"],
        "tomato": ["tomatoes", "tamatar"],
        "garlic": ["lehsun"],
        "egg": ["eggs", "anda"],
        "rice": ["chawal"],
        "paneer": ["cottage cheese"],
        "chicken": ["chicken breast"],
        "salt": [],
        "oil": ["cooking oil"]
    })
}

/// Recipe record with sensible defaults for everything the test does not care about
pub fn recipe(id: &str, diet: &str, required: &[&str], optional: &[&str]) -> Value {
    json!({
        "id": id,
        "name": format!("Recipe {id}"),
        "cuisine": "Indian",
        "category": "food",
        "fitness_tags": [],
        "diet": diet,
        "difficulty": "Medium",
        "time_minutes": 30,
        "required_ingredients": required,
        "optional_ingredients": optional,
        "steps": ["Cook it."],
        "nutrition": {"calories": 300, "protein_g": 10, "carbs_g": 30, "fats_g": 10}
    })
}

/// Drink record
pub fn drink(id: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Drink {id}"),
        "category": category,
        "diet": "veg",
        "time_minutes": 5,
        "required_ingredients": ["water"],
        "steps": ["Stir."],
        "serving_size": "1 glass",
        "nutrition": {"calories": 50, "protein_g": 1, "carbs_g": 10, "fats_g": 0}
    })
}

/// Set a field on a fixture record
pub fn with(mut record: Value, field: &str, value: Value) -> Value {
    record[field] = value;
    record
}

/// Parse and validate a dataset document
pub fn dataset(aliases: Value, recipes: Vec<Value>, drinks: Vec<Value>) -> RecipeDataset {
    let document = json!({
        "ingredient_aliases": aliases,
        "recipes": recipes,
        "drinks": drinks
    });
    RecipeDataset::from_json_str(&document.to_string()).expect("fixture dataset is valid")
}

/// Engine over the fixture aliases and the given records
pub fn engine_with(recipes: Vec<Value>, drinks: Vec<Value>) -> RecipeEngine {
    RecipeEngine::new(
        dataset(fixture_aliases(), recipes, drinks),
        RecipeCacheConfig::default(),
    )
}
