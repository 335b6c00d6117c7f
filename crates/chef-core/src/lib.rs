// ABOUTME: Core types and constants for the Pantry Chef recommendation platform
// ABOUTME: Foundation crate with error handling, recipe and pantry models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Chef Core
//!
//! Foundation crate providing shared types and constants for Pantry Chef.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified `AppError`/`ErrorCode` plus the recommendation error taxonomy
//! - **constants**: Thresholds, usage modes, environment variable names, defaults
//! - **models**: `Recipe`, `IngredientRequirement`, `DietLevel`, `PantrySnapshot`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (recipes, diets, pantry snapshots)
pub mod models;
