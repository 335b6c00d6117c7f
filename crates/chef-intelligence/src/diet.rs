// ABOUTME: Classifies free-form diet strings into the closed DietLevel set
// ABOUTME: Total function: unrecognized input falls back to the least restrictive diet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use chef_core::constants::diet_tags;
use chef_core::models::DietLevel;

/// Parse a requested diet.
///
/// Case-insensitive exact match on `"vegetarian"` and `"vegan"`; every
/// other input, including the empty string and typos, is `Normal`. Input is
/// not trimmed.
#[must_use]
pub fn classify(input: &str) -> DietLevel {
    match input.to_lowercase().as_str() {
        diet_tags::VEGETARIAN => DietLevel::Vegetarian,
        diet_tags::VEGAN => DietLevel::Vegan,
        _ => DietLevel::Normal,
    }
}

/// Same as [`classify`], treating a missing value as `Normal`
#[must_use]
pub fn classify_opt(input: Option<&str>) -> DietLevel {
    input.map_or(DietLevel::Normal, classify)
}
