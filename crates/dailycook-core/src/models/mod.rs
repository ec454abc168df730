// ABOUTME: Data models shared by the recipe engine and its consumers
// ABOUTME: Re-exports recipe, drink, fitness, cuisine, and dataset types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

/// Supported cuisines and their one-line facts
pub mod cuisine;
/// Bundled dataset document and its validation
pub mod dataset;
/// Fitness goals and drink categories
pub mod fitness;
/// Recipe, drink, and list-view records
pub mod recipe;

pub use cuisine::{cuisine_fact, SUPPORTED_CUISINES};
pub use dataset::RecipeDataset;
pub use fitness::{DrinkCategory, FitnessGoal};
pub use recipe::{Diet, Difficulty, Drink, Nutrition, Recipe, RecipeCard};
