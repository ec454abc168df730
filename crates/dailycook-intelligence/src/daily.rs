// ABOUTME: Deterministic recipe of the day seeded by the calendar date
// ABOUTME: Picks from quick, easy, few-ingredient recipes and explains the choice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

//! Recipe of the Day
//!
//! A pure function of the catalog and the date: every process converges on
//! the same pick for a given day without coordination or stored state.
//!
//! 1. Eligible recipes take at most 20 minutes, are `Easy`, and need at most
//!    six required ingredients. No eligible recipe means the whole catalog is
//!    eligible.
//! 2. The pick is `eligible[day_of_year % eligible.len()]`.
//! 3. The reason lists, in this order, whichever apply: "quick to make",
//!    "protein-rich", "uses everyday ingredients", "beginner-friendly".

use crate::catalog::RecipeCatalog;
use chrono::{Datelike, Local, NaiveDate};
use dailycook_core::constants::daily::{
    EVERYDAY_REQUIRED, FALLBACK_REASON, MAX_ELIGIBLE_MINUTES, MAX_ELIGIBLE_REQUIRED,
    PROTEIN_RICH_GRAMS, QUICK_MINUTES, REASON_PREFIX,
};
use dailycook_core::models::{Difficulty, Recipe, RecipeCard};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The recipe chosen for a date and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPick {
    /// Chosen recipe
    pub recipe: RecipeCard,
    /// Human-readable justification, e.g. "Today's pick: quick to make, beginner-friendly"
    pub reason: String,
    /// Calendar date the pick was made for
    pub date: NaiveDate,
}

/// Date-seeded selector over a shared catalog
#[derive(Debug, Clone)]
pub struct DailySelector {
    catalog: Arc<RecipeCatalog>,
}

impl DailySelector {
    /// Create a selector over the catalog
    #[must_use]
    pub const fn new(catalog: Arc<RecipeCatalog>) -> Self {
        Self { catalog }
    }

    /// Recipes eligible for selection, in catalog order
    #[must_use]
    pub fn eligible(&self) -> Vec<&Recipe> {
        let recipes = self.catalog.recipes();
        let eligible: Vec<&Recipe> = recipes.iter().filter(|r| is_eligible(r)).collect();
        if eligible.is_empty() {
            recipes.iter().collect()
        } else {
            eligible
        }
    }

    /// Recipe at `day_of_year % eligible.len()`, or `None` for an empty catalog
    #[must_use]
    pub fn recipe_for_day(&self, day_of_year: u32) -> Option<&Recipe> {
        let eligible = self.eligible();
        if eligible.is_empty() {
            return None;
        }
        let index = day_of_year as usize % eligible.len();
        Some(eligible[index])
    }

    /// Pick for a specific date
    #[must_use]
    pub fn recipe_for_date(&self, date: NaiveDate) -> Option<DailyPick> {
        self.recipe_for_day(date.ordinal()).map(|recipe| DailyPick {
            recipe: recipe.card(),
            reason: reason_for(recipe),
            date,
        })
    }

    /// Pick for today's local calendar date
    #[must_use]
    pub fn recipe_of_the_day(&self) -> Option<DailyPick> {
        self.recipe_for_date(Local::now().date_naive())
    }
}

fn is_eligible(recipe: &Recipe) -> bool {
    recipe.time_minutes <= MAX_ELIGIBLE_MINUTES
        && recipe.difficulty == Difficulty::Easy
        && recipe.required_ingredients.len() <= MAX_ELIGIBLE_REQUIRED
}

/// Build the reason string for a recipe
#[must_use]
pub fn reason_for(recipe: &Recipe) -> String {
    let clauses: Vec<&str> = [
        (recipe.time_minutes <= QUICK_MINUTES, "quick to make"),
        (
            recipe.nutrition.protein_g >= PROTEIN_RICH_GRAMS,
            "protein-rich",
        ),
        (
            recipe.required_ingredients.len() <= EVERYDAY_REQUIRED,
            "uses everyday ingredients",
        ),
        (recipe.difficulty == Difficulty::Easy, "beginner-friendly"),
    ]
    .into_iter()
    .filter_map(|(applies, clause)| applies.then_some(clause))
    .collect();

    if clauses.is_empty() {
        format!("{REASON_PREFIX}{FALLBACK_REASON}")
    } else {
        format!("{REASON_PREFIX}{}", clauses.join(", "))
    }
}
