// ABOUTME: DailyCook CLI - operator tool for querying the recipe engine from a terminal
// ABOUTME: Normalizes ingredients, matches recipes, lists filtered recipes and drinks, and prints JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook
//!
//! Usage:
//! ```bash
//! # Canonical names for free-text input
//! dailycook-cli normalize "pyaz, tamatr, 2 eggs"
//!
//! # Top 3 recipes, or every makeable recipe with its score
//! dailycook-cli match "egg, onion, tomato, green chili, salt" --diet egg
//! dailycook-cli match "egg, onion, tomato" --ranked
//!
//! # Listings
//! dailycook-cli fitness muscle_gain --diet veg
//! dailycook-cli cuisine indian
//! dailycook-cli drinks --category protein
//!
//! # Recipe of the day for today or a given date
//! dailycook-cli daily --date 2025-01-10
//! ```

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dailycook::config::EngineConfig;
use dailycook::constants::NUTRITION_DISCLAIMER;
use dailycook::logging::LoggingConfig;
use dailycook::models::{cuisine_fact, Diet, DrinkCategory, FitnessGoal};
use dailycook::{build_engine, EngineError, RecipeEngine};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "dailycook-cli",
    about = "DailyCook recipe engine CLI",
    long_about = "Query the DailyCook recipe engine: normalize ingredients, match recipes, and browse listings."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dataset file override (defaults to DAILYCOOK_DATASET_PATH, then the bundled dataset)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the canonical names for comma-separated ingredients
    Normalize {
        /// Ingredients separated by commas, semicolons, or newlines
        input: String,
    },

    /// Recipes that can be cooked with the given ingredients
    Match {
        /// Ingredients separated by commas, semicolons, or newlines
        input: String,

        /// Only recipes of exactly this diet (veg, egg, non-veg)
        #[arg(long)]
        diet: Option<Diet>,

        /// Print every makeable recipe with its score instead of the top 3
        #[arg(long)]
        ranked: bool,
    },

    /// Recipes for a fitness goal (fat_loss, muscle_gain, maintenance)
    Fitness {
        /// Fitness goal
        goal: String,

        /// Diet filter; veg recipes are always allowed
        #[arg(long)]
        diet: Option<Diet>,
    },

    /// Recipes of one cuisine
    Cuisine {
        /// Cuisine name, case-insensitive
        cuisine: String,

        /// Diet filter; veg recipes are always allowed
        #[arg(long)]
        diet: Option<Diet>,
    },

    /// List drinks
    Drinks {
        /// Category name, case-insensitive
        #[arg(long)]
        category: Option<String>,

        /// Treat an unknown category as no filter
        #[arg(long)]
        lenient: bool,
    },

    /// Show one drink
    Drink {
        /// Drink id
        id: String,
    },

    /// Show one recipe
    Recipe {
        /// Recipe id
        id: String,
    },

    /// Recipe of the day
    Daily {
        /// Date to pick for (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Build a quick recipe from whatever ingredients are at hand
    Fallback {
        /// Ingredients separated by commas, semicolons, or newlines
        input: String,

        /// Diet of the generated recipe
        #[arg(long)]
        diet: Option<Diet>,

        /// Number of servings (clamped to 1..=10)
        #[arg(long, default_value = "2")]
        servings: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = EngineConfig::from_env()?;
    if let Some(path) = cli.dataset {
        config.dataset_path = Some(path);
    }
    let engine = build_engine(&config);

    run(&engine, cli.command)
}

fn run(engine: &RecipeEngine, command: Command) -> Result<()> {
    match command {
        Command::Normalize { input } => print_json(&engine.parse_input(&input)),
        Command::Match {
            input,
            diet,
            ranked,
        } => {
            let ingredients = engine.parse_input(&input);
            debug!(?ingredients, "Matching recipes");
            if ranked {
                print_json(&engine.rank_by_ingredients(&ingredients, diet))
            } else {
                print_json(&engine.match_by_ingredients(&ingredients, diet))
            }
        }
        Command::Fitness { goal, diet } => {
            let tip = goal.parse::<FitnessGoal>().ok().map(|g| g.tip());
            print_json(&json!({
                "goal": goal,
                "tip": tip,
                "recipes": engine.get_fitness_recipes(&goal, diet),
                "disclaimer": NUTRITION_DISCLAIMER,
            }))
        }
        Command::Cuisine { cuisine, diet } => print_json(&json!({
            "cuisine": cuisine,
            "fact": cuisine_fact(&cuisine),
            "recipes": engine.get_by_cuisine(&cuisine, diet),
        })),
        Command::Drinks { category, lenient } => {
            let known = DrinkCategory::parse_lenient(category.as_deref());
            let drinks = if lenient {
                engine.get_drinks_in(known)
            } else {
                engine.get_drinks(category.as_deref())
            };
            print_json(&json!({
                "category": known.map(|c| c.as_str()),
                "description": known.map(|c| c.description()),
                "drinks": drinks,
            }))
        }
        Command::Drink { id } => match engine.get_drink_detail(&id) {
            Some(drink) => print_json(&drink),
            None => Err(EngineError::not_found("drink", id).into()),
        },
        Command::Recipe { id } => match engine.get_recipe_detail(&id) {
            Some(recipe) => print_json(&recipe),
            None => Err(EngineError::not_found("recipe", id).into()),
        },
        Command::Daily { date } => {
            let pick = date.map_or_else(
                || engine.get_recipe_of_the_day(),
                |d| engine.recipe_of_the_day_for(d),
            );
            match pick {
                Some(pick) => print_json(&pick),
                None => bail!("No recipes available"),
            }
        }
        Command::Fallback {
            input,
            diet,
            servings,
        } => {
            let ingredients = engine.parse_input(&input);
            let recipe = engine.generate_fallback_recipe(&ingredients, diet, servings)?;
            print_json(&recipe)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}
