// ABOUTME: Deterministic fallback recipe built from the user's ingredients
// ABOUTME: Used by handlers when the external recipe writer is unavailable or rate-limited
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

use dailycook_core::constants::fallback::{ID_PREFIX, MAX_SERVINGS, MIN_SERVINGS, TIME_MINUTES};
use dailycook_core::errors::{EngineError, EngineResult};
use dailycook_core::models::{Diet, Difficulty, Nutrition, Recipe};

/// Dish shape chosen from the ingredients on hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DishType {
    Scramble,
    Salad,
    Bowl,
    Saute,
    StirFry,
}

impl DishType {
    fn classify(ingredients: &[String]) -> Self {
        let lowered: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();
        let any_of = |names: &[&str]| lowered.iter().any(|i| names.contains(&i.as_str()));

        if lowered.iter().any(|i| i.contains("egg")) {
            Self::Scramble
        } else if any_of(&["lettuce", "cucumber", "spinach", "kale"]) {
            Self::Salad
        } else if any_of(&["rice", "pasta", "noodle"]) {
            Self::Bowl
        } else if any_of(&["chicken", "meat", "beef", "pork"]) {
            Self::Saute
        } else {
            Self::StirFry
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Scramble => "Scramble",
            Self::Salad => "Salad",
            Self::Bowl => "Bowl",
            Self::Saute => "Sauté",
            Self::StirFry => "Stir Fry",
        }
    }

    const fn calories(self) -> u32 {
        match self {
            Self::Scramble => 250,
            Self::Salad => 150,
            Self::Bowl => 400,
            Self::Saute => 350,
            Self::StirFry => 300,
        }
    }
}

/// Build a simple recipe around the given ingredients
///
/// The first ingredient names the dish ("Quick Paneer Stir Fry"), the mix of
/// ingredients picks its shape, and servings are clamped to 1..=10. The id is
/// `backup-` followed by the slugged name, so the same input always yields
/// the same id.
///
/// # Errors
///
/// Returns `InvalidInput` if no non-blank ingredient is given.
pub fn generate_fallback_recipe(
    ingredients: &[String],
    diet: Option<Diet>,
    servings: u32,
) -> EngineResult<Recipe> {
    let ingredients: Vec<String> = ingredients
        .iter()
        .map(|i| i.trim().to_owned())
        .filter(|i| !i.is_empty())
        .collect();
    let Some(main) = ingredients.first() else {
        return Err(EngineError::invalid_input(
            "at least one ingredient is required",
        ));
    };

    let dish = DishType::classify(&ingredients);
    let name = format!("Quick {} {}", title_case(main), dish.label());
    let id = format!("{ID_PREFIX}{}", name.to_lowercase().replace(' ', "-"));

    Ok(Recipe {
        id,
        name,
        cuisine: "Home Style".to_owned(),
        category: "food".to_owned(),
        fitness_tags: vec!["quick".to_owned(), "simple".to_owned()],
        diet: diet.unwrap_or(Diet::Any),
        difficulty: Difficulty::Easy,
        time_minutes: TIME_MINUTES,
        optional_ingredients: ["salt", "pepper", "oil", "garlic"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        cookware: vec!["pan".to_owned(), "bowl".to_owned()],
        steps: vec![
            format!("Prepare all ingredients: {}.", ingredients.join(", ")),
            "Heat a pan with some oil over medium heat.".to_owned(),
            format!("Add {main} and cook for 2-3 minutes."),
            "Add remaining ingredients and season with salt and pepper.".to_owned(),
            "Cook for another 5-7 minutes until done.".to_owned(),
            "Serve hot and enjoy!".to_owned(),
        ],
        common_mistakes: vec![
            "Don't overcrowd the pan".to_owned(),
            "Season to taste before serving".to_owned(),
        ],
        nutrition: Nutrition {
            calories: dish.calories(),
            protein_g: 15,
            carbs_g: 20,
            fats_g: 10,
        },
        servings: servings.clamp(MIN_SERVINGS, MAX_SERVINGS),
        cooking_impact: Some("A quick and easy meal using what you have.".to_owned()),
        suggested_ingredients: Some(vec![
            "herbs".to_owned(),
            "lemon juice".to_owned(),
            "spices".to_owned(),
        ]),
        required_ingredients: ingredients,
    })
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
