// ABOUTME: Dataset document holding the alias table, recipe list, and drink list
// ABOUTME: Parses with a strict schema and validates identifiers before the engine uses it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DailyCook

use super::recipe::{Drink, Recipe};
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// The single structured document the engine is built from
///
/// `ingredient_aliases` maps each canonical ingredient to its known spellings.
/// It is a `BTreeMap` so the vocabulary is always visited in ascending
/// canonical order, which fixes the tie-break order of approximate matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDataset {
    /// Canonical ingredient name to alias list
    #[serde(default)]
    pub ingredient_aliases: BTreeMap<String, Vec<String>>,
    /// Static recipe catalog in display order
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Static drink catalog in display order
    #[serde(default)]
    pub drinks: Vec<Drink>,
}

impl RecipeDataset {
    /// Parse and validate a dataset document
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the schema or
    /// fails [`RecipeDataset::validate`].
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Read, parse, and validate a dataset file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or on any error
    /// [`RecipeDataset::from_json_str`] returns.
    pub fn from_path(path: &Path) -> EngineResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| EngineError::DatasetIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check identifier and naming invariants
    ///
    /// # Errors
    ///
    /// Returns `DatasetInvalid` for a blank canonical ingredient, a recipe or
    /// drink with a blank id or name, or an id used twice within recipes or
    /// within drinks.
    pub fn validate(&self) -> EngineResult<()> {
        if self.ingredient_aliases.keys().any(|c| c.trim().is_empty()) {
            return Err(EngineError::dataset_invalid(
                "ingredient_aliases contains a blank canonical name",
            ));
        }

        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            check_record("recipe", &recipe.id, &recipe.name, &mut seen)?;
        }

        seen.clear();
        for drink in &self.drinks {
            check_record("drink", &drink.id, &drink.name, &mut seen)?;
        }

        Ok(())
    }

    /// Check whether the dataset carries no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredient_aliases.is_empty() && self.recipes.is_empty() && self.drinks.is_empty()
    }
}

fn check_record<'a>(
    kind: &str,
    id: &'a str,
    name: &str,
    seen: &mut HashSet<&'a str>,
) -> EngineResult<()> {
    if id.trim().is_empty() {
        return Err(EngineError::dataset_invalid(format!(
            "{kind} '{name}' has a blank id"
        )));
    }
    if name.trim().is_empty() {
        return Err(EngineError::dataset_invalid(format!(
            "{kind} {id} has a blank name"
        )));
    }
    if !seen.insert(id) {
        return Err(EngineError::dataset_invalid(format!(
            "duplicate {kind} id {id}"
        )));
    }
    Ok(())
}
