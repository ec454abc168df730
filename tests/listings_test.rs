// ABOUTME: Integration tests for fitness, cuisine, and drink listings
// ABOUTME: Covers the high_protein blanket rule, lenient diet filter, and case-insensitive lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{drink, engine_with, recipe, with};
use dailycook::models::{Diet, DrinkCategory, RecipeCard};
use dailycook::RecipeEngine;
use serde_json::json;

fn card_ids(cards: &[RecipeCard]) -> Vec<&str> {
    cards.iter().map(|c| c.id.as_str()).collect()
}

fn fitness_engine() -> RecipeEngine {
    engine_with(
        vec![
            with(
                recipe("salad", "veg", &["tomato"], &[]),
                "fitness_tags",
                json!(["low_calorie"]),
            ),
            with(
                recipe("omelette", "egg", &["egg"], &[]),
                "fitness_tags",
                json!(["high_protein"]),
            ),
            with(
                recipe("tikka", "non-veg", &["chicken"], &[]),
                "fitness_tags",
                json!(["muscle_gain"]),
            ),
            with(
                recipe("khichdi", "veg", &["rice"], &[]),
                "fitness_tags",
                json!(["balanced"]),
            ),
            recipe("untagged", "veg", &["onion"], &[]),
        ],
        vec![],
    )
}

#[test]
fn test_fat_loss_includes_every_high_protein_recipe() {
    let engine = fitness_engine();
    let cards = engine.get_fitness_recipes("fat_loss", None);
    assert_eq!(card_ids(&cards), vec!["salad", "omelette"]);
}

#[test]
fn test_muscle_gain_and_maintenance_tags() {
    let engine = fitness_engine();
    assert_eq!(
        card_ids(&engine.get_fitness_recipes("muscle_gain", None)),
        vec!["omelette", "tikka"]
    );
    assert_eq!(
        card_ids(&engine.get_fitness_recipes("maintenance", None)),
        vec!["omelette", "khichdi"]
    );
}

#[test]
fn test_unknown_goal_keeps_only_high_protein() {
    let engine = fitness_engine();
    assert_eq!(
        card_ids(&engine.get_fitness_recipes("bulking", None)),
        vec!["omelette"]
    );
}

#[test]
fn test_fitness_diet_filter_admits_veg() {
    let engine = fitness_engine();
    // non-veg filter keeps its own recipes and every veg one
    assert_eq!(
        card_ids(&engine.get_fitness_recipes("muscle_gain", Some(Diet::NonVeg))),
        vec!["tikka"]
    );
    assert_eq!(
        card_ids(&engine.get_fitness_recipes("fat_loss", Some(Diet::NonVeg))),
        vec!["salad"]
    );
    assert_eq!(
        card_ids(&engine.get_fitness_recipes("fat_loss", Some(Diet::Egg))),
        vec!["salad", "omelette"]
    );
}

#[test]
fn test_cuisine_is_case_insensitive_with_lenient_diet() {
    let engine = engine_with(
        vec![
            recipe("dal", "veg", &["onion"], &[]),
            with(recipe("ramen", "egg", &["egg"], &[]), "cuisine", json!("Japanese")),
            recipe("bhurji", "egg", &["egg"], &[]),
            recipe("curry", "non-veg", &["chicken"], &[]),
        ],
        vec![],
    );

    assert_eq!(
        card_ids(&engine.get_by_cuisine("INDIAN", None)),
        vec!["dal", "bhurji", "curry"]
    );
    assert_eq!(
        card_ids(&engine.get_by_cuisine("indian", Some(Diet::Egg))),
        vec!["dal", "bhurji"]
    );
    assert_eq!(
        card_ids(&engine.get_by_cuisine("japanese", Some(Diet::Veg))),
        Vec::<&str>::new()
    );
    assert!(engine.get_by_cuisine("Martian", None).is_empty());
}

#[test]
fn test_drinks_filter_by_category() {
    let engine = engine_with(
        vec![],
        vec![
            drink("d-lassi", "Traditional"),
            drink("d-shake", "protein"),
            drink("d-chaas", "traditional"),
        ],
    );

    let all = engine.get_drinks(None);
    assert_eq!(all.len(), 3);

    let traditional: Vec<String> = engine
        .get_drinks(Some("TRADITIONAL"))
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(traditional, vec!["d-lassi", "d-chaas"]);

    assert!(engine.get_drinks(Some("fizzy")).is_empty());
}

#[test]
fn test_lenient_drink_category_means_no_filter() {
    let engine = engine_with(
        vec![],
        vec![drink("d-lassi", "traditional"), drink("d-shake", "protein")],
    );

    let unknown = DrinkCategory::parse_lenient(Some("fizzy"));
    assert_eq!(unknown, None);
    assert_eq!(engine.get_drinks_in(unknown).len(), 2);

    let protein = engine.get_drinks_in(DrinkCategory::parse_lenient(Some(" Protein ")));
    assert_eq!(protein.len(), 1);
    assert_eq!(protein[0].id, "d-shake");
}

#[test]
fn test_drink_detail_is_exact_id() {
    let engine = engine_with(vec![], vec![drink("d-lassi", "traditional")]);
    assert_eq!(
        engine.get_drink_detail("d-lassi").map(|d| d.id),
        Some("d-lassi".to_owned())
    );
    assert!(engine.get_drink_detail("D-LASSI").is_none());
    assert!(engine.get_drink_detail("missing").is_none());
}
