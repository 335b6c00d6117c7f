// ABOUTME: Main library entry point for the Pantry Chef recipe recommender
// ABOUTME: Wires configuration, logging, catalog and pantry gateways to the recommendation core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Pantry Chef
//!
//! Recommends a recipe from a catalog given what is in the pantry and a
//! dietary restriction.
//!
//! ## Architecture
//!
//! - **`chef_core`**: recipe and pantry models, errors, constants
//! - **`chef_intelligence`**: readiness scoring, diet filtering and selection
//! - **Catalog**: recipes loaded from a directory of JSON files
//! - **Pantry**: item quantities read through the [`pantry::PantrySource`] trait
//! - **Services**: [`services::RecommendationService`] ties them together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_chef::config::ChefConfig;
//! use pantry_chef::services::RecommendationService;
//! use chef_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ChefConfig::from_env()?;
//!     let service = RecommendationService::from_config(&config)?;
//!
//!     let mut rng = rand::thread_rng();
//!     if let Some(found) = service.recommend("vegan", "optimal", &mut rng)? {
//!         println!("{} ({:.2})", found.recipe.name, found.readiness);
//!     }
//!     Ok(())
//! }
//! ```

/// Recipe catalog loaded from JSON files
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Pantry inventory gateway
pub mod pantry;

/// Recommendation services
pub mod services;

pub use catalog::Catalog;
pub use pantry::{JsonFilePantry, PantrySource, StaticPantry};
pub use services::RecommendationService;
