// ABOUTME: Ingredient matching and ranking over the static recipe catalog
// ABOUTME: Also serves fitness, cuisine, and drink listings with their diet filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

//! Recipe Matching & Ranking
//!
//! A recipe is makeable only when every required ingredient, after
//! normalization, is in the user's normalized set. There is no partial credit
//! for missing required ingredients. Survivors are scored as
//!
//! ```text
//! score = |required| + |optional ∩ available|
//! ```
//!
//! so richer recipes the user can fully complete rank above minimal ones,
//! and incidental extras on hand break the remaining ties. Equal scores keep
//! catalog order.

use crate::catalog::RecipeCatalog;
use crate::normalizer::IngredientNormalizer;
use dailycook_core::constants::matching::MAX_INGREDIENT_MATCHES;
use dailycook_core::models::{Diet, Drink, DrinkCategory, FitnessGoal, Recipe, RecipeCard};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Tag that qualifies a recipe for every fitness goal
const BLANKET_FITNESS_TAG: &str = "high_protein";

/// A makeable recipe with its ranking score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMatch {
    /// Card listing only the optional ingredients the user has
    pub card: RecipeCard,
    /// `|required| + |available optional|`
    pub score: usize,
}

/// Canonical ingredient sets of one catalog recipe, computed once
#[derive(Debug, Clone)]
struct IngredientProfile {
    required: HashSet<String>,
    /// Canonical form of each optional display string, same order
    optional: Vec<String>,
}

impl IngredientProfile {
    fn build(recipe: &Recipe, normalizer: &IngredientNormalizer) -> Self {
        Self {
            required: normalizer
                .normalize_list(&recipe.required_ingredients)
                .into_iter()
                .collect(),
            optional: recipe
                .optional_ingredients
                .iter()
                .map(|ingredient| normalizer.normalize(ingredient))
                .collect(),
        }
    }
}

/// Matching and listing engine over a shared catalog
///
/// Recipe ingredient lists are normalized once at construction so each
/// query only normalizes the caller's input.
#[derive(Debug, Clone)]
pub struct RecipeMatcher {
    catalog: Arc<RecipeCatalog>,
    normalizer: Arc<IngredientNormalizer>,
    profiles: Vec<IngredientProfile>,
}

impl RecipeMatcher {
    /// Create a matcher, normalizing every catalog recipe's ingredients
    #[must_use]
    pub fn new(catalog: Arc<RecipeCatalog>, normalizer: Arc<IngredientNormalizer>) -> Self {
        let profiles = catalog
            .recipes()
            .iter()
            .map(|recipe| IngredientProfile::build(recipe, &normalizer))
            .collect();
        Self {
            catalog,
            normalizer,
            profiles,
        }
    }

    /// Score every makeable recipe, best first
    ///
    /// With a diet filter, only recipes of exactly that diet are considered.
    #[must_use]
    pub fn rank_by_ingredients<S: AsRef<str>>(
        &self,
        available: &[S],
        diet: Option<Diet>,
    ) -> Vec<RecipeMatch> {
        let available: HashSet<String> =
            self.normalizer.normalize_list(available).into_iter().collect();

        let mut matches: Vec<RecipeMatch> = self
            .catalog
            .recipes()
            .iter()
            .zip(&self.profiles)
            .filter(|(recipe, _)| diet.is_none_or(|d| recipe.diet == d))
            .filter(|(_, profile)| profile.required.is_subset(&available))
            .map(|(recipe, profile)| {
                let mut on_hand = HashSet::new();
                let mut optional_shown = Vec::new();
                for (display, canonical) in
                    recipe.optional_ingredients.iter().zip(&profile.optional)
                {
                    if available.contains(canonical) && on_hand.insert(canonical.as_str()) {
                        optional_shown.push(display.clone());
                    }
                }

                let mut card = recipe.card();
                card.optional_ingredients = optional_shown;
                RecipeMatch {
                    card,
                    score: profile.required.len() + on_hand.len(),
                }
            })
            .collect();

        // stable: equal scores keep catalog order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }

    /// Top recipes the user can fully make with what they have
    #[must_use]
    pub fn match_by_ingredients<S: AsRef<str>>(
        &self,
        available: &[S],
        diet: Option<Diet>,
    ) -> Vec<RecipeCard> {
        self.rank_by_ingredients(available, diet)
            .into_iter()
            .take(MAX_INGREDIENT_MATCHES)
            .map(|m| m.card)
            .collect()
    }

    /// Recipes suited to a fitness goal, in catalog order
    ///
    /// A recipe qualifies when it passes the lenient diet filter and either
    /// shares a tag with the goal or is tagged `high_protein`. An unknown
    /// goal has no tags of its own, so only `high_protein` recipes remain.
    #[must_use]
    pub fn get_fitness_recipes(&self, goal: &str, diet: Option<Diet>) -> Vec<RecipeCard> {
        let goal_tags = goal
            .parse::<FitnessGoal>()
            .map(|g| g.tags())
            .unwrap_or_default();

        self.catalog
            .recipes()
            .iter()
            .filter(|recipe| diet.is_none_or(|d| d.admits(recipe.diet)))
            .filter(|recipe| {
                recipe.has_tag(BLANKET_FITNESS_TAG)
                    || goal_tags.iter().any(|tag| recipe.has_tag(tag))
            })
            .map(Recipe::card)
            .collect()
    }

    /// Recipes of a cuisine (case-insensitive), in catalog order
    #[must_use]
    pub fn get_by_cuisine(&self, cuisine: &str, diet: Option<Diet>) -> Vec<RecipeCard> {
        let wanted = cuisine.to_lowercase();
        self.catalog
            .recipes()
            .iter()
            .filter(|recipe| recipe.cuisine.to_lowercase() == wanted)
            .filter(|recipe| diet.is_none_or(|d| d.admits(recipe.diet)))
            .map(Recipe::card)
            .collect()
    }

    /// Drinks of a category (case-insensitive), or every drink without a filter
    #[must_use]
    pub fn get_drinks(&self, category: Option<&str>) -> Vec<Drink> {
        let wanted = category.map(str::to_lowercase);
        self.catalog
            .drinks()
            .iter()
            .filter(|drink| {
                wanted
                    .as_deref()
                    .is_none_or(|c| drink.category.to_lowercase() == c)
            })
            .cloned()
            .collect()
    }

    /// Drinks of a known category; unknown categories list every drink
    #[must_use]
    pub fn get_drinks_in(&self, category: Option<DrinkCategory>) -> Vec<Drink> {
        self.get_drinks(category.as_ref().map(DrinkCategory::as_str))
    }

    /// Drink by exact id
    #[must_use]
    pub fn get_drink_detail(&self, id: &str) -> Option<Drink> {
        self.catalog.drink(id).cloned()
    }

    /// Catalog recipe by exact id
    #[must_use]
    pub fn get_recipe(&self, id: &str) -> Option<Recipe> {
        self.catalog.recipe(id).cloned()
    }
}
