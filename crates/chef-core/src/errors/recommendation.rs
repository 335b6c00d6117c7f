// ABOUTME: Error taxonomy of the recipe recommendation core
// ABOUTME: MalformedRecipe for empty ingredient lists, InvalidQuantity for bad amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use thiserror::Error;

/// Errors raised while scoring recipes against a pantry snapshot.
///
/// "No eligible recipe" is not represented here: it is a normal negative
/// result and surfaces as `None`. Diet strings never fail to parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendationError {
    /// Recipe has zero ingredient requirements, so its readiness is undefined
    #[error("Recipe '{recipe}' has no ingredient requirements")]
    MalformedRecipe {
        /// Name of the offending recipe
        recipe: String,
    },

    /// Negative or non-finite quantity reached the readiness calculation
    #[error("Invalid quantity {amount} for {context}: quantities must be finite and non-negative")]
    InvalidQuantity {
        /// What the quantity describes (which amount, which ingredient)
        context: String,
        /// Offending value
        amount: f64,
    },
}

impl RecommendationError {
    /// Create a "malformed recipe" error
    #[must_use]
    pub fn malformed_recipe(recipe: impl Into<String>) -> Self {
        Self::MalformedRecipe {
            recipe: recipe.into(),
        }
    }

    /// Create an "invalid quantity" error
    #[must_use]
    pub fn invalid_quantity(context: impl Into<String>, amount: f64) -> Self {
        Self::InvalidQuantity {
            context: context.into(),
            amount,
        }
    }

    /// Prefix the quantity context with the recipe and ingredient it came from
    #[must_use]
    pub fn for_ingredient(self, recipe: &str, ingredient: &str) -> Self {
        match self {
            Self::InvalidQuantity { context, amount } => Self::InvalidQuantity {
                context: format!("recipe '{recipe}', ingredient '{ingredient}' ({context})"),
                amount,
            },
            other @ Self::MalformedRecipe { .. } => other,
        }
    }
}
