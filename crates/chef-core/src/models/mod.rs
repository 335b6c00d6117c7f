// ABOUTME: Core data models for recipes, diet levels and pantry snapshots
// ABOUTME: Re-exports Recipe, IngredientRequirement, DietLevel, PantryItem and PantrySnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! # Data Models
//!
//! - `Recipe`: a catalog entry with diet tags and ordered ingredient requirements
//! - `IngredientRequirement`: ingredient name and the amount a recipe needs
//! - `DietLevel`: closed set of diets ordered by restrictiveness
//! - `PantryItem` / `PantrySnapshot`: stored pantry records and the
//!   request-scoped name to quantity view built from them
//!
//! Recipes and snapshots are read-only once built; every type here is
//! `Send + Sync` so a loaded catalog can be shared across threads.

mod diet;
mod pantry;
mod recipe;

pub use diet::DietLevel;
pub use pantry::{PantryItem, PantrySnapshot};
pub use recipe::{IngredientRequirement, Recipe};
