// ABOUTME: Readiness calculator: how well pantry quantities cover recipe requirements
// ABOUTME: Per-ingredient ratio capped at 1, averaged over all ingredients of a recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Readiness is a normalized `[0, 1]` measure of how much of a recipe the
//! current pantry can already cover.
//!
//! - ingredient readiness: `min(1, available / required)`, with a zero
//!   requirement scoring `0` rather than `1`
//! - recipe readiness: arithmetic mean of its ingredient readiness values,
//!   missing pantry items counting as zero available

use chef_core::constants::readiness::{MAX_READINESS, ZERO_REQUIREMENT_READINESS};
use chef_core::errors::RecommendationError;
use chef_core::models::{PantrySnapshot, Recipe};
use serde::Serialize;

/// Readiness of one ingredient requirement against the pantry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientReadiness {
    /// Ingredient name
    pub name: String,
    /// Amount the recipe needs
    pub required_amount: f64,
    /// Amount found in the pantry (zero when absent)
    pub available_amount: f64,
    /// Coverage in `[0, 1]`
    pub readiness: f64,
}

/// Coverage of a single requirement.
///
/// A zero requirement yields `0`, not `1`: degenerate requirements never
/// count as satisfied.
///
/// # Errors
///
/// Returns `InvalidQuantity` if either amount is negative or not finite
pub fn ingredient_readiness(
    required_amount: f64,
    available_amount: f64,
) -> Result<f64, RecommendationError> {
    ensure_quantity("required amount", required_amount)?;
    ensure_quantity("available amount", available_amount)?;

    if required_amount == 0.0 {
        return Ok(ZERO_REQUIREMENT_READINESS);
    }
    Ok((available_amount / required_amount).min(MAX_READINESS))
}

/// Per-ingredient readiness of a recipe, in catalog order
///
/// # Errors
///
/// Returns `InvalidQuantity` naming the recipe and ingredient on bad amounts
pub fn ingredient_breakdown(
    recipe: &Recipe,
    pantry: &PantrySnapshot,
) -> Result<Vec<IngredientReadiness>, RecommendationError> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            let available_amount = pantry.available(&ingredient.name);
            ingredient_readiness(ingredient.required_amount, available_amount)
                .map(|readiness| IngredientReadiness {
                    name: ingredient.name.clone(),
                    required_amount: ingredient.required_amount,
                    available_amount,
                    readiness,
                })
                .map_err(|err| err.for_ingredient(&recipe.name, &ingredient.name))
        })
        .collect()
}

/// Mean ingredient readiness of a recipe
///
/// # Errors
///
/// - `MalformedRecipe` if the recipe lists no ingredients
/// - `InvalidQuantity` if a required or available amount is invalid
pub fn recipe_readiness(
    recipe: &Recipe,
    pantry: &PantrySnapshot,
) -> Result<f64, RecommendationError> {
    if !recipe.has_ingredients() {
        return Err(RecommendationError::malformed_recipe(&recipe.name));
    }

    let breakdown = ingredient_breakdown(recipe, pantry)?;
    let total: f64 = breakdown.iter().map(|ingredient| ingredient.readiness).sum();
    Ok(total / breakdown.len() as f64)
}

fn ensure_quantity(context: &str, amount: f64) -> Result<(), RecommendationError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(RecommendationError::invalid_quantity(context, amount))
    }
}
