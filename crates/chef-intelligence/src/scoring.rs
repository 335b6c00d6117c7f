// ABOUTME: Recipe filter and scorer: diet compliance plus minimum readiness threshold
// ABOUTME: Produces the name-keyed candidate map consumed by recipe selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::collections::btree_map::Iter;
use std::collections::BTreeMap;

use chef_core::constants::readiness::DEFAULT_MIN_READINESS;
use chef_core::errors::RecommendationError;
use chef_core::models::{DietLevel, PantrySnapshot, Recipe};
use serde::Serialize;
use tracing::{debug, warn};

use crate::readiness::recipe_readiness;

/// Filter settings for one scoring pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringOptions {
    /// Diet every candidate must be tagged with
    pub diet: DietLevel,
    /// Candidates must score strictly above this
    pub min_threshold: f64,
}

impl ScoringOptions {
    /// Options for a diet with the default threshold
    #[must_use]
    pub const fn new(diet: DietLevel) -> Self {
        Self {
            diet,
            min_threshold: DEFAULT_MIN_READINESS,
        }
    }

    /// Override the minimum readiness threshold
    #[must_use]
    pub const fn with_min_threshold(mut self, min_threshold: f64) -> Self {
        self.min_threshold = min_threshold;
        self
    }
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self::new(DietLevel::default())
    }
}

/// Eligible recipes mapped to their readiness.
///
/// Entries iterate in ascending name order, which is also the ranking
/// order used by selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoredRecipes {
    scores: BTreeMap<String, f64>,
    #[serde(skip)]
    positions: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped_malformed: Vec<String>,
}

impl ScoredRecipes {
    /// Readiness of a candidate
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no recipe is eligible
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Candidates in ascending name order
    pub fn iter(&self) -> Iter<'_, String, f64> {
        self.scores.iter()
    }

    /// Candidate names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    /// Position, in the scored sequence, of the recipe whose score was kept
    ///
    /// `None` for unknown names and for maps built with `FromIterator`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Recipes dropped because they list no ingredients
    #[must_use]
    pub fn skipped_malformed(&self) -> &[String] {
        &self.skipped_malformed
    }

    fn insert(&mut self, name: String, score: f64, position: usize) {
        self.positions.insert(name.clone(), position);
        self.scores.insert(name, score);
    }
}

impl FromIterator<(String, f64)> for ScoredRecipes {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
            positions: BTreeMap::new(),
            skipped_malformed: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a ScoredRecipes {
    type Item = (&'a String, &'a f64);
    type IntoIter = Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

/// Score every recipe that complies with the requested diet.
///
/// A recipe is kept only if its readiness is strictly greater than
/// `options.min_threshold`; a score equal to the threshold is dropped.
/// Recipes without ingredients are skipped with a warning and listed in
/// [`ScoredRecipes::skipped_malformed`]. If two eligible recipes share a
/// name the later one is kept, and [`ScoredRecipes::position`] points at it;
/// an ineligible duplicate never replaces an eligible one. An empty result is
/// a valid outcome.
///
/// # Errors
///
/// Returns `InvalidQuantity` as soon as any required or available amount is
/// negative or not finite
pub fn score_recipes<'a>(
    recipes: impl IntoIterator<Item = &'a Recipe>,
    pantry: &PantrySnapshot,
    options: &ScoringOptions,
) -> Result<ScoredRecipes, RecommendationError> {
    let mut scored = ScoredRecipes::default();

    for (position, recipe) in recipes.into_iter().enumerate() {
        if !recipe.complies_with(options.diet) {
            debug!(recipe = %recipe.name, diet = %options.diet, "Recipe not tagged for diet");
            continue;
        }

        match recipe_readiness(recipe, pantry) {
            Ok(score) if score > options.min_threshold => {
                debug!(recipe = %recipe.name, score, "Recipe eligible");
                scored.insert(recipe.name.clone(), score, position);
            }
            Ok(score) => {
                debug!(
                    recipe = %recipe.name,
                    score,
                    threshold = options.min_threshold,
                    "Recipe below readiness threshold"
                );
            }
            Err(RecommendationError::MalformedRecipe { recipe: name }) => {
                warn!(recipe = %name, "Skipping recipe without ingredient requirements");
                scored.skipped_malformed.push(name);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(scored)
}
