// ABOUTME: Immutable recipe and drink catalog loaded once at startup
// ABOUTME: Best-effort dataset loading that degrades to an empty catalog with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

use dailycook_core::errors::EngineResult;
use dailycook_core::models::{Drink, Recipe, RecipeDataset};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Dataset compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../data/recipes.json");

/// Parse the dataset compiled into the binary
///
/// # Errors
///
/// Returns an error if the bundled document fails parsing or validation.
pub fn bundled_dataset() -> EngineResult<RecipeDataset> {
    RecipeDataset::from_json_str(BUNDLED_DATASET)
}

/// Load the dataset from `path`, or the bundled one when no path is given
///
/// Loading is best-effort: a missing, malformed, or invalid dataset is logged
/// and replaced by an empty one so every dependent query returns empty
/// results instead of taking the process down.
#[must_use]
pub fn load_dataset_or_empty(path: Option<&Path>) -> RecipeDataset {
    let (source, loaded) = path.map_or_else(
        || ("bundled".to_owned(), bundled_dataset()),
        |p| (p.display().to_string(), RecipeDataset::from_path(p)),
    );

    match loaded {
        Ok(dataset) => {
            info!(
                source = %source,
                recipes = dataset.recipes.len(),
                drinks = dataset.drinks.len(),
                canonical_ingredients = dataset.ingredient_aliases.len(),
                "Loaded recipe dataset"
            );
            dataset
        }
        Err(e) => {
            warn!(source = %source, error = %e, "Could not load recipe dataset, starting empty");
            RecipeDataset::default()
        }
    }
}

/// Read-only recipe and drink collection
///
/// Built once and shared behind an `Arc`; there is no mutation API, so
/// concurrent readers need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    drinks: Vec<Drink>,
    recipe_index: HashMap<String, usize>,
    drink_index: HashMap<String, usize>,
}

impl RecipeCatalog {
    /// Build a catalog from recipe and drink records, keeping their order
    #[must_use]
    pub fn new(recipes: Vec<Recipe>, drinks: Vec<Drink>) -> Self {
        let recipe_index = recipes
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        let drink_index = drinks
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();
        Self {
            recipes,
            drinks,
            recipe_index,
            drink_index,
        }
    }

    /// Catalog with no records
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// All drinks in catalog order
    #[must_use]
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// Look up a recipe by exact id
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipe_index.get(id).map(|&i| &self.recipes[i])
    }

    /// Look up a drink by exact id
    #[must_use]
    pub fn drink(&self, id: &str) -> Option<&Drink> {
        self.drink_index.get(id).map(|&i| &self.drinks[i])
    }

    /// Check whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl From<RecipeDataset> for RecipeCatalog {
    fn from(dataset: RecipeDataset) -> Self {
        Self::new(dataset.recipes, dataset.drinks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_dataset_is_valid() {
        let dataset = bundled_dataset().unwrap();
        assert!(!dataset.recipes.is_empty());
        assert!(!dataset.drinks.is_empty());
        assert!(dataset.ingredient_aliases.contains_key("onion"));
    }

    #[test]
    fn test_missing_dataset_degrades_to_empty() {
        let dataset = load_dataset_or_empty(Some(Path::new("/nonexistent/recipes.json")));
        assert!(dataset.is_empty());
        assert!(RecipeCatalog::from(dataset).is_empty());
    }

    #[test]
    fn test_malformed_dataset_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"recipes": [{{"id": "r1", "name": "half a recipe"}}]}}"#).unwrap();

        let dataset = load_dataset_or_empty(Some(file.path()));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = RecipeCatalog::from(bundled_dataset().unwrap());
        let first = &catalog.recipes()[0];
        assert_eq!(catalog.recipe(&first.id), Some(first));
        assert!(catalog.recipe("no-such-recipe").is_none());

        let drink = &catalog.drinks()[0];
        assert_eq!(catalog.drink(&drink.id), Some(drink));
        assert!(catalog.drink(&first.id).is_none());
    }
}
