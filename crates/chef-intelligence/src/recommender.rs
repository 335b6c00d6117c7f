// ABOUTME: End-to-end recipe recommendation over a borrowed catalog and pantry snapshot
// ABOUTME: Parses request strings at the boundary, scores, selects and resolves the recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Recommendation entry points.
//!
//! [`recommend_recipe`] is the plain string-in, recipe-out operation.
//! [`Recommender`] is the typed form, returning the chosen recipe together
//! with its readiness and the number of candidates it was picked from.

use chef_core::constants::readiness::DEFAULT_MIN_READINESS;
use chef_core::errors::RecommendationError;
use chef_core::models::{DietLevel, PantrySnapshot, Recipe};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::diet::classify;
use crate::scoring::{score_recipes, ScoredRecipes, ScoringOptions};
use crate::selection::{select, SelectionPolicy};

/// Parsed recommendation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationRequest {
    /// Required diet tag
    pub diet: DietLevel,
    /// Selection policy
    pub policy: SelectionPolicy,
    /// Candidates must score strictly above this
    pub min_threshold: f64,
}

impl RecommendationRequest {
    /// Typed request with the default readiness threshold
    #[must_use]
    pub const fn new(diet: DietLevel, policy: SelectionPolicy) -> Self {
        Self {
            diet,
            policy,
            min_threshold: DEFAULT_MIN_READINESS,
        }
    }

    /// Parse raw request strings: free-form diet and pantry usage mode
    #[must_use]
    pub fn parse(diet_input: &str, usage_mode: &str) -> Self {
        Self::new(
            classify(diet_input),
            SelectionPolicy::from_usage_mode(usage_mode),
        )
    }

    /// Override the minimum readiness threshold
    #[must_use]
    pub const fn with_min_threshold(mut self, min_threshold: f64) -> Self {
        self.min_threshold = min_threshold;
        self
    }

    /// Scoring options derived from this request
    #[must_use]
    pub const fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions::new(self.diet).with_min_threshold(self.min_threshold)
    }
}

/// Outcome of a successful recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    /// Full catalog record of the chosen recipe
    pub recipe: &'a Recipe,
    /// Readiness of the chosen recipe
    pub readiness: f64,
    /// Number of eligible recipes the choice was made from
    pub candidates: usize,
    /// Policy that made the choice
    pub policy: SelectionPolicy,
}

/// Runs the recommendation pipeline over a read-only recipe catalog
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    recipes: &'a [Recipe],
}

impl<'a> Recommender<'a> {
    /// Wrap a borrowed catalog
    #[must_use]
    pub const fn new(recipes: &'a [Recipe]) -> Self {
        Self { recipes }
    }

    /// Score the catalog for one diet without selecting
    ///
    /// # Errors
    ///
    /// Propagates `InvalidQuantity` from scoring
    pub fn score(
        &self,
        pantry: &PantrySnapshot,
        options: &ScoringOptions,
    ) -> Result<ScoredRecipes, RecommendationError> {
        score_recipes(self.recipes, pantry, options)
    }

    /// Recommend a recipe, `Ok(None)` when nothing is eligible
    ///
    /// # Errors
    ///
    /// Propagates `InvalidQuantity` from scoring
    pub fn recommend<R>(
        &self,
        pantry: &PantrySnapshot,
        request: &RecommendationRequest,
        rng: &mut R,
    ) -> Result<Option<Recommendation<'a>>, RecommendationError>
    where
        R: Rng + ?Sized,
    {
        let scored = self.score(pantry, &request.scoring_options())?;

        let Some(name) = select(&scored, request.policy, rng) else {
            info!(
                diet = %request.diet,
                policy = %request.policy,
                "No eligible recipe for request"
            );
            return Ok(None);
        };

        let recipe = scored
            .position(name)
            .and_then(|position| self.recipes.get(position));
        let readiness = scored.get(name);

        Ok(recipe.zip(readiness).map(|(recipe, readiness)| {
            info!(
                recipe = %recipe.name,
                readiness,
                candidates = scored.len(),
                policy = %request.policy,
                "Recipe recommended"
            );
            Recommendation {
                recipe,
                readiness,
                candidates: scored.len(),
                policy: request.policy,
            }
        }))
    }
}

/// Recommend a recipe from raw request strings.
///
/// `diet_input` is classified case-insensitively (unknown diets mean
/// `normal`); `usage_mode` selects the best policy only when it is exactly
/// `"optimal"`. Returns `Ok(None)` when no recipe is eligible.
///
/// # Errors
///
/// Propagates `InvalidQuantity` from scoring
pub fn recommend_recipe<'a, R>(
    recipes: &'a [Recipe],
    pantry: &PantrySnapshot,
    diet_input: &str,
    usage_mode: &str,
    rng: &mut R,
) -> Result<Option<&'a Recipe>, RecommendationError>
where
    R: Rng + ?Sized,
{
    let request = RecommendationRequest::parse(diet_input, usage_mode);
    Ok(Recommender::new(recipes)
        .recommend(pantry, &request, rng)?
        .map(|recommendation| recommendation.recipe))
}
