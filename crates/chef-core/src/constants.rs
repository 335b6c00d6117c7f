// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Readiness thresholds, usage modes, messages, defaults and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Constants grouped by domain rather than kept in a single flat list.

/// Readiness scoring constants
pub mod readiness {
    /// Recipes must score strictly above this to be recommended
    pub const DEFAULT_MIN_READINESS: f64 = 0.1;
    /// Upper bound of any readiness value
    pub const MAX_READINESS: f64 = 1.0;
    /// Readiness assigned when an ingredient requires a zero amount
    pub const ZERO_REQUIREMENT_READINESS: f64 = 0.0;
}

/// Pantry usage modes accepted at the request boundary
pub mod usage_modes {
    /// Usage mode that selects the best policy; every other value means random
    pub const OPTIMAL: &str = "optimal";
}

/// Diet tags as they appear in catalog files
pub mod diet_tags {
    /// No dietary restriction
    pub const NORMAL: &str = "normal";
    /// No meat or fish
    pub const VEGETARIAN: &str = "vegetarian";
    /// No animal products
    pub const VEGAN: &str = "vegan";
}

/// User-facing messages
pub mod messages {
    /// Reported when no recipe complies with the request
    pub const NO_RECIPE_FOUND: &str = "No recipe found for this configuration";
}

/// Service identification
pub mod service_names {
    /// Service name used in structured logs
    pub const PANTRY_CHEF: &str = "pantry-chef";
}

/// Default values for file-backed gateways
pub mod defaults {
    /// Directory holding one JSON file per recipe
    pub const DEFAULT_CATALOG_DIR: &str = "./data/recipes";
    /// JSON file holding the pantry item list
    pub const DEFAULT_PANTRY_FILE: &str = "./data/pantry.json";
    /// File extension of catalog recipe files
    pub const RECIPE_FILE_EXTENSION: &str = "json";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Recipe catalog directory
    pub const CATALOG_DIR: &str = "CHEF_CATALOG_DIR";
    /// Pantry JSON file
    pub const PANTRY_FILE: &str = "CHEF_PANTRY_FILE";
    /// Minimum readiness threshold
    pub const MIN_READINESS: &str = "CHEF_MIN_READINESS";
    /// Minimum pantry item quantity (items at or below are ignored)
    pub const MIN_PANTRY_QUANTITY: &str = "CHEF_MIN_PANTRY_QUANTITY";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "CHEF_ENVIRONMENT";
}
