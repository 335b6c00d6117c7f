// ABOUTME: Recommend command for pantry-chef
// ABOUTME: Picks one recipe for a diet and usage mode and prints it as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::io::Write;

use anyhow::Result;
use pantry_chef::services::RecommendationService;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tracing::info;

use super::Outcome;
use crate::helpers::output::{print_json, print_not_found};

/// Recommend a recipe; `Outcome::NotFound` when nothing is eligible
pub fn run(
    service: &RecommendationService,
    diet: &str,
    usage_mode: &str,
    seed: Option<u64>,
    explain: bool,
    out: &mut impl Write,
) -> Result<Outcome> {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let Some(recommendation) = service.recommend(diet, usage_mode, &mut *rng)? else {
        print_not_found(out)?;
        return Ok(Outcome::NotFound);
    };

    info!(
        recipe = %recommendation.recipe.name,
        readiness = recommendation.readiness,
        "Recommendation ready"
    );

    if explain {
        print_json(out, &recommendation)?;
    } else {
        print_json(out, &json!({ "recipe": recommendation.recipe }))?;
    }
    Ok(Outcome::Success)
}
