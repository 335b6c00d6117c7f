// ABOUTME: Recommendation service combining the catalog, pantry gateway and scoring config
// ABOUTME: Takes a fresh pantry snapshot per request and runs the recommendation core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::sync::Arc;

use chef_core::constants::readiness::DEFAULT_MIN_READINESS;
use chef_core::errors::{AppError, AppResult};
use chef_core::models::{PantrySnapshot, Recipe};
use chef_intelligence::{
    diet, ingredient_breakdown, IngredientReadiness, Recommendation, RecommendationRequest,
    Recommender, ScoringOptions,
};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::ChefConfig;
use crate::pantry::{JsonFilePantry, PantrySource};

/// One eligible recipe with its readiness and per-ingredient detail
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessEntry {
    /// Recipe name
    pub name: String,
    /// Recipe readiness in `(min_readiness, 1]`
    pub readiness: f64,
    /// Readiness of each ingredient in recipe order
    pub ingredients: Vec<IngredientReadiness>,
}

/// Recommends recipes from a shared catalog against the current pantry
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    pantry: Box<dyn PantrySource>,
    min_readiness: f64,
    minimum_pantry_quantity: Option<f64>,
}

impl RecommendationService {
    /// Service with the default readiness threshold that keeps every pantry item
    pub fn new(catalog: Arc<Catalog>, pantry: Box<dyn PantrySource>) -> Self {
        Self {
            catalog,
            pantry,
            min_readiness: DEFAULT_MIN_READINESS,
            minimum_pantry_quantity: None,
        }
    }

    /// Load the catalog directory and pantry file named by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the catalog cannot be loaded
    pub fn from_config(config: &ChefConfig) -> AppResult<Self> {
        config.validate()?;
        let catalog = Catalog::load_dir(&config.catalog.dir)?;
        Ok(Self::new(
            Arc::new(catalog),
            Box::new(JsonFilePantry::new(config.pantry.file.clone())),
        )
        .with_min_readiness(config.scoring.min_readiness)
        .with_minimum_pantry_quantity(config.pantry.minimum_quantity))
    }

    /// Override the readiness threshold
    #[must_use]
    pub const fn with_min_readiness(mut self, min_readiness: f64) -> Self {
        self.min_readiness = min_readiness;
        self
    }

    /// Ignore pantry items at or below `minimum_quantity`
    #[must_use]
    pub const fn with_minimum_pantry_quantity(mut self, minimum_quantity: Option<f64>) -> Self {
        self.minimum_pantry_quantity = minimum_quantity;
        self
    }

    /// Shared catalog
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Current pantry snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the pantry cannot be read or holds invalid quantities
    pub fn snapshot(&self) -> AppResult<PantrySnapshot> {
        self.pantry.snapshot(self.minimum_pantry_quantity)
    }

    /// Recommend a recipe for raw request strings
    ///
    /// `Ok(None)` means no recipe is eligible for this diet and pantry.
    ///
    /// # Errors
    ///
    /// Returns an error if the pantry cannot be read or a quantity is invalid
    pub fn recommend<R>(
        &self,
        diet_input: &str,
        usage_mode: &str,
        rng: &mut R,
    ) -> AppResult<Option<Recommendation<'_>>>
    where
        R: Rng + ?Sized,
    {
        let pantry = self.snapshot()?;
        let request =
            RecommendationRequest::parse(diet_input, usage_mode).with_min_threshold(self.min_readiness);
        debug!(
            diet = %request.diet,
            policy = %request.policy,
            min_readiness = self.min_readiness,
            "Recommendation requested"
        );

        Ok(Recommender::new(self.catalog.recipes()).recommend(&pantry, &request, rng)?)
    }

    /// All eligible recipes for a diet with their readiness, sorted by name
    ///
    /// # Errors
    ///
    /// Returns an error if the pantry cannot be read or a quantity is invalid
    pub fn readiness_report(&self, diet_input: &str) -> AppResult<Vec<ReadinessEntry>> {
        let pantry = self.snapshot()?;
        let options = ScoringOptions::new(diet::classify(diet_input))
            .with_min_threshold(self.min_readiness);
        let scored = Recommender::new(self.catalog.recipes()).score(&pantry, &options)?;

        let entries = scored
            .iter()
            .map(|(name, &readiness)| -> AppResult<ReadinessEntry> {
                let recipe = self
                    .catalog
                    .get(name)
                    .ok_or_else(|| AppError::internal(format!("scored recipe '{name}' missing")))?;
                Ok(ReadinessEntry {
                    name: name.clone(),
                    readiness,
                    ingredients: ingredient_breakdown(recipe, &pantry)?,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        info!(
            diet = %options.diet,
            eligible = entries.len(),
            skipped = scored.skipped_malformed().len(),
            "Readiness report built"
        );
        Ok(entries)
    }

    /// Look up a recipe by exact name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the catalog has no recipe with that name
    pub fn recipe_by_name(&self, name: &str) -> AppResult<&Recipe> {
        self.catalog
            .get(name)
            .ok_or_else(|| AppError::not_found(format!("Recipe '{name}'")))
    }
}
