// ABOUTME: Scores command for pantry-chef
// ABOUTME: Prints readiness of every eligible recipe for a diet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::io::Write;

use anyhow::Result;
use chef_intelligence::classify;
use pantry_chef::services::RecommendationService;
use serde_json::json;

use super::Outcome;
use crate::helpers::output::print_json;

/// Print the readiness report, name-sorted
pub fn run(service: &RecommendationService, diet: &str, out: &mut impl Write) -> Result<Outcome> {
    let entries = service.readiness_report(diet)?;
    print_json(
        out,
        &json!({
            "diet": classify(diet),
            "recipes": entries,
        }),
    )?;
    Ok(Outcome::Success)
}
