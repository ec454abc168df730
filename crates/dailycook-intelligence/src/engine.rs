// ABOUTME: RecipeEngine facade wiring vocabulary, normalizer, catalog, matcher, selector, and cache
// ABOUTME: The single object request handlers construct at startup and share across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

use crate::catalog::{load_dataset_or_empty, RecipeCatalog};
use crate::daily::{DailyPick, DailySelector};
use crate::fallback::generate_fallback_recipe;
use crate::matching::{RecipeMatch, RecipeMatcher};
use crate::normalizer::IngredientNormalizer;
use crate::recipe_cache::{EphemeralRecipeCache, RecipeCacheConfig};
use crate::vocabulary::CanonicalVocabulary;
use chrono::NaiveDate;
use dailycook_core::errors::EngineResult;
use dailycook_core::models::{Diet, Drink, DrinkCategory, Recipe, RecipeCard, RecipeDataset};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Ingredient matching and recipe ranking engine
///
/// Built once at startup from a dataset and shared (typically behind an
/// `Arc`) by every request handler. The vocabulary and catalog are immutable;
/// the generated-recipe cache is the only mutable state and synchronizes
/// internally. No method blocks on I/O.
#[derive(Debug)]
pub struct RecipeEngine {
    normalizer: Arc<IngredientNormalizer>,
    catalog: Arc<RecipeCatalog>,
    matcher: RecipeMatcher,
    daily: DailySelector,
    generated: EphemeralRecipeCache,
}

impl RecipeEngine {
    /// Build the engine from an already-loaded dataset
    #[must_use]
    pub fn new(dataset: RecipeDataset, cache_config: RecipeCacheConfig) -> Self {
        let vocabulary = Arc::new(CanonicalVocabulary::from_alias_table(
            &dataset.ingredient_aliases,
        ));
        let normalizer = Arc::new(IngredientNormalizer::new(vocabulary));
        let catalog = Arc::new(RecipeCatalog::from(dataset));
        let matcher = RecipeMatcher::new(Arc::clone(&catalog), Arc::clone(&normalizer));
        let daily = DailySelector::new(Arc::clone(&catalog));

        info!(
            recipes = catalog.recipes().len(),
            drinks = catalog.drinks().len(),
            aliases = normalizer.vocabulary().len(),
            cache_capacity = cache_config.max_entries,
            "Recipe engine ready"
        );

        Self {
            normalizer,
            catalog,
            matcher,
            daily,
            generated: EphemeralRecipeCache::with_config(cache_config),
        }
    }

    /// Build the engine from a dataset file, or the bundled dataset without a path
    ///
    /// A dataset that cannot be loaded yields an engine with an empty catalog.
    #[must_use]
    pub fn load(dataset_path: Option<&Path>, cache_config: RecipeCacheConfig) -> Self {
        Self::new(load_dataset_or_empty(dataset_path), cache_config)
    }

    /// Shared ingredient normalizer
    #[must_use]
    pub fn normalizer(&self) -> &IngredientNormalizer {
        &self.normalizer
    }

    /// Static recipe and drink catalog
    #[must_use]
    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Cache holding generated recipes
    #[must_use]
    pub const fn generated_recipes(&self) -> &EphemeralRecipeCache {
        &self.generated
    }

    // ------------------------------------------------------------------
    // Normalization
    // ------------------------------------------------------------------

    /// Resolve one ingredient token to its canonical name
    #[must_use]
    pub fn normalize(&self, token: &str) -> String {
        self.normalizer.normalize(token)
    }

    /// Resolve tokens, dropping blanks and duplicates in first-seen order
    #[must_use]
    pub fn normalize_list<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        self.normalizer.normalize_list(tokens)
    }

    /// Split comma/semicolon/newline separated input and normalize it
    #[must_use]
    pub fn parse_input(&self, raw: &str) -> Vec<String> {
        self.normalizer.parse_input(raw)
    }

    // ------------------------------------------------------------------
    // Matching and listings
    // ------------------------------------------------------------------

    /// Top 3 fully makeable recipes for the available ingredients
    #[must_use]
    pub fn match_by_ingredients<S: AsRef<str>>(
        &self,
        available: &[S],
        diet: Option<Diet>,
    ) -> Vec<RecipeCard> {
        self.matcher.match_by_ingredients(available, diet)
    }

    /// Every fully makeable recipe with its score, best first
    #[must_use]
    pub fn rank_by_ingredients<S: AsRef<str>>(
        &self,
        available: &[S],
        diet: Option<Diet>,
    ) -> Vec<RecipeMatch> {
        self.matcher.rank_by_ingredients(available, diet)
    }

    /// Recipes suited to a fitness goal
    #[must_use]
    pub fn get_fitness_recipes(&self, goal: &str, diet: Option<Diet>) -> Vec<RecipeCard> {
        self.matcher.get_fitness_recipes(goal, diet)
    }

    /// Recipes of a cuisine
    #[must_use]
    pub fn get_by_cuisine(&self, cuisine: &str, diet: Option<Diet>) -> Vec<RecipeCard> {
        self.matcher.get_by_cuisine(cuisine, diet)
    }

    /// Drinks whose category equals `category` ignoring case, or all drinks
    #[must_use]
    pub fn get_drinks(&self, category: Option<&str>) -> Vec<Drink> {
        self.matcher.get_drinks(category)
    }

    /// Drinks of a known category, or all drinks
    ///
    /// Pair with [`DrinkCategory::parse_lenient`] to make unknown category
    /// names behave like no filter.
    #[must_use]
    pub fn get_drinks_in(&self, category: Option<DrinkCategory>) -> Vec<Drink> {
        self.matcher.get_drinks_in(category)
    }

    /// Drink by exact id
    #[must_use]
    pub fn get_drink_detail(&self, id: &str) -> Option<Drink> {
        self.matcher.get_drink_detail(id)
    }

    /// Full recipe by id, generated recipes shadowing catalog ones
    #[must_use]
    pub fn get_recipe_detail(&self, id: &str) -> Option<Recipe> {
        self.generated
            .get(id)
            .or_else(|| self.matcher.get_recipe(id))
    }

    // ------------------------------------------------------------------
    // Recipe of the day
    // ------------------------------------------------------------------

    /// Recipe of the day for the local calendar date
    #[must_use]
    pub fn get_recipe_of_the_day(&self) -> Option<DailyPick> {
        self.daily.recipe_of_the_day()
    }

    /// Recipe of the day for a specific date
    #[must_use]
    pub fn recipe_of_the_day_for(&self, date: NaiveDate) -> Option<DailyPick> {
        self.daily.recipe_for_date(date)
    }

    // ------------------------------------------------------------------
    // Generated recipes
    // ------------------------------------------------------------------

    /// Make a generated recipe retrievable by id
    pub fn put(&self, id: impl Into<String>, recipe: Recipe) {
        self.generated.put(id, recipe);
    }

    /// Forget a generated recipe
    pub fn evict(&self, id: &str) -> Option<Recipe> {
        self.generated.remove(id)
    }

    /// Build a fallback recipe for the ingredients and make it retrievable
    ///
    /// Ingredients are used as given; pass them through
    /// [`RecipeEngine::parse_input`] first to use canonical names.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no non-blank ingredient is given.
    pub fn generate_fallback_recipe(
        &self,
        ingredients: &[String],
        diet: Option<Diet>,
        servings: u32,
    ) -> EngineResult<Recipe> {
        let recipe = generate_fallback_recipe(ingredients, diet, servings)?;
        self.generated.put(recipe.id.clone(), recipe.clone());
        Ok(recipe)
    }
}
