// ABOUTME: Catalog inspection commands for pantry-chef
// ABOUTME: Lists recipe names and shows single recipes by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::io::Write;

use anyhow::Result;
use pantry_chef::services::RecommendationService;
use serde_json::json;

use super::Outcome;
use crate::helpers::output::print_json;

/// List every recipe name in load order
pub fn list(service: &RecommendationService, out: &mut impl Write) -> Result<Outcome> {
    let names: Vec<&str> = service.catalog().names().collect();
    print_json(out, &names)?;
    Ok(Outcome::Success)
}

/// Show the full record of one recipe
pub fn show(service: &RecommendationService, name: &str, out: &mut impl Write) -> Result<Outcome> {
    let recipe = service.recipe_by_name(name)?;
    print_json(out, &json!({ "recipe": recipe }))?;
    Ok(Outcome::Success)
}
