// ABOUTME: Recipe recommendation engine for pantry-aware meal suggestions
// ABOUTME: Diet classification, readiness scoring, filtering and recipe selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Chef Intelligence
//!
//! The recommendation core. Everything here is synchronous and pure over
//! borrowed, read-only inputs: a slice of catalog recipes and a pantry
//! snapshot. The only shared resource is the random source used by the
//! random selection policy, and it is always injected by the caller.
//!
//! ## Pipeline
//!
//! 1. [`diet::classify`] turns the request's diet string into a [`DietLevel`]
//! 2. [`scoring::score_recipes`] drops non-compliant recipes, computes
//!    [`readiness::recipe_readiness`] and keeps scores above the threshold
//! 3. [`selection::select`] picks one name according to the [`SelectionPolicy`]
//!
//! [`recommender::recommend_recipe`] runs the whole pipeline.
//!
//! [`DietLevel`]: chef_core::models::DietLevel
//! [`SelectionPolicy`]: selection::SelectionPolicy

/// Diet string classification
pub mod diet;
/// Per-ingredient and per-recipe readiness
pub mod readiness;
/// End-to-end recommendation entry points
pub mod recommender;
/// Diet filtering and threshold scoring
pub mod scoring;
/// Selection policies over scored recipes
pub mod selection;

pub use diet::classify;
pub use readiness::{ingredient_breakdown, ingredient_readiness, recipe_readiness, IngredientReadiness};
pub use recommender::{recommend_recipe, Recommendation, RecommendationRequest, Recommender};
pub use scoring::{score_recipes, ScoredRecipes, ScoringOptions};
pub use selection::{select, SelectionPolicy};
