// ABOUTME: Recipe, drink, and recipe card records with their strict serde schema
// ABOUTME: Defines Diet and Difficulty classifications and the card projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-serving nutrition figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein_g: u32,
    /// Carbohydrates in grams
    pub carbs_g: u32,
    /// Fats in grams
    pub fats_g: u32,
}

/// Diet classification of a recipe or drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    /// Vegetarian
    #[serde(rename = "veg")]
    Veg,
    /// Vegetarian with eggs
    #[serde(rename = "egg")]
    Egg,
    /// Contains meat or fish
    #[serde(rename = "non-veg")]
    NonVeg,
    /// Unclassified (generated recipes without a diet preference)
    #[serde(rename = "any")]
    Any,
}

impl Diet {
    /// Wire name of this diet
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::Egg => "egg",
            Self::NonVeg => "non-veg",
            Self::Any => "any",
        }
    }

    /// Lenient diet filter used by cuisine and fitness listings
    ///
    /// A recipe passes when it has exactly the requested diet or is vegetarian.
    #[must_use]
    pub fn admits(self, recipe_diet: Self) -> bool {
        recipe_diet == self || recipe_diet == Self::Veg
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veg" => Ok(Self::Veg),
            "egg" => Ok(Self::Egg),
            "non-veg" | "non_veg" | "nonveg" => Ok(Self::NonVeg),
            "any" => Ok(Self::Any),
            other => Err(EngineError::invalid_input(format!(
                "unsupported diet '{other}' (expected veg, egg, or non-veg)"
            ))),
        }
    }
}

/// Cooking difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Beginner-friendly
    #[serde(alias = "easy")]
    Easy,
    /// Some technique required
    #[serde(alias = "medium")]
    Medium,
    /// Advanced technique required
    #[serde(alias = "hard")]
    Hard,
}

impl Difficulty {
    /// Display name of this difficulty
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_servings() -> u32 {
    1
}

/// Full recipe record
///
/// Loaded from the dataset at startup or produced at runtime by the
/// generative writer or the fallback generator. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Globally unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Cuisine name, compared case-insensitively
    pub cuisine: String,
    /// Dish category (food, snack, dessert, ...)
    pub category: String,
    /// Fitness tags such as `high_protein` or `low_calorie`
    #[serde(default)]
    pub fitness_tags: Vec<String>,
    /// Diet classification
    pub diet: Diet,
    /// Cooking difficulty
    pub difficulty: Difficulty,
    /// Time to cook in minutes
    pub time_minutes: u32,
    /// Ingredients that must all be on hand, as display strings
    pub required_ingredients: Vec<String>,
    /// Ingredients that improve the dish when available
    #[serde(default)]
    pub optional_ingredients: Vec<String>,
    /// Cookware needed
    #[serde(default)]
    pub cookware: Vec<String>,
    /// Ordered preparation steps
    pub steps: Vec<String>,
    /// Mistakes to avoid
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    /// Per-serving nutrition
    pub nutrition: Nutrition,
    /// Number of servings
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// How the cooking method affects nutrition, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_impact: Option<String>,
    /// Ingredients worth adding next time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_ingredients: Option<Vec<String>>,
}

impl Recipe {
    /// Check whether this recipe carries a fitness tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.fitness_tags.iter().any(|t| t == tag)
    }

    /// Project this recipe into its list-view card
    #[must_use]
    pub fn card(&self) -> RecipeCard {
        RecipeCard::from(self)
    }
}

/// Reduced projection of a recipe used by list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCard {
    /// Recipe identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Cuisine name
    pub cuisine: String,
    /// Cooking difficulty
    pub difficulty: Difficulty,
    /// Time to cook in minutes
    pub time_minutes: u32,
    /// Required ingredients as display strings
    pub required_ingredients: Vec<String>,
    /// Optional ingredients shown on the card
    pub optional_ingredients: Vec<String>,
    /// Per-serving nutrition
    pub nutrition: Nutrition,
    /// Number of servings
    pub servings: u32,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            cuisine: recipe.cuisine.clone(),
            difficulty: recipe.difficulty,
            time_minutes: recipe.time_minutes,
            required_ingredients: recipe.required_ingredients.clone(),
            optional_ingredients: recipe.optional_ingredients.clone(),
            nutrition: recipe.nutrition,
            servings: recipe.servings,
        }
    }
}

/// Drink recipe record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    /// Globally unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Drink category, compared case-insensitively
    pub category: String,
    /// Diet classification
    pub diet: Diet,
    /// Preparation time in minutes
    pub time_minutes: u32,
    /// Ingredients that must be on hand
    pub required_ingredients: Vec<String>,
    /// Ingredients that improve the drink when available
    #[serde(default)]
    pub optional_ingredients: Vec<String>,
    /// Ordered preparation steps
    pub steps: Vec<String>,
    /// Free-text serving size, e.g. "1 glass (250ml)"
    pub serving_size: String,
    /// Short health note
    #[serde(default)]
    pub health_note: Option<String>,
    /// Per-serving nutrition
    pub nutrition: Nutrition,
}
