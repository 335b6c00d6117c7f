// ABOUTME: Tests for recipe selection policies and the end-to-end recommender
// ABOUTME: Uses a seeded ChaCha RNG so random-policy behavior is reproducible
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::collections::HashSet;

use chef_core::models::{DietLevel, PantrySnapshot, Recipe};
use chef_intelligence::{
    recommend_recipe, select, RecommendationRequest, Recommender, ScoredRecipes, SelectionPolicy,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const EPSILON: f64 = 1e-9;

fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5eed)
}

fn scored(entries: &[(&str, f64)]) -> ScoredRecipes {
    entries
        .iter()
        .map(|(name, score)| ((*name).to_owned(), *score))
        .collect()
}

// ============================================================================
// Selection Policy Parsing
// ============================================================================

#[test]
fn test_usage_mode_mapping() {
    assert_eq!(SelectionPolicy::from_usage_mode("optimal"), SelectionPolicy::Best);
    assert_eq!(SelectionPolicy::from_usage_mode("random"), SelectionPolicy::Random);
    assert_eq!(SelectionPolicy::from_usage_mode("Optimal"), SelectionPolicy::Random);
    assert_eq!(SelectionPolicy::from_usage_mode(""), SelectionPolicy::Random);
}

// ============================================================================
// Selector
// ============================================================================

#[test]
fn test_best_picks_alphabetically_first_regardless_of_score() {
    let candidates = scored(&[("Chili", 0.2), ("Apple Pie", 0.9)]);
    let mut rng = seeded_rng();

    assert_eq!(
        select(&candidates, SelectionPolicy::Best, &mut rng),
        Some("Apple Pie")
    );

    let candidates = scored(&[("Chili", 0.9), ("Apple Pie", 0.2)]);
    assert_eq!(
        select(&candidates, SelectionPolicy::Best, &mut rng),
        Some("Apple Pie")
    );
}

#[test]
fn test_empty_candidates_yield_none_for_both_policies() {
    let candidates = ScoredRecipes::default();
    let mut rng = seeded_rng();

    assert_eq!(select(&candidates, SelectionPolicy::Best, &mut rng), None);
    assert_eq!(select(&candidates, SelectionPolicy::Random, &mut rng), None);
}

#[test]
fn test_random_stays_within_candidates_and_covers_them() {
    let candidates = scored(&[("Chili", 0.2), ("Apple Pie", 0.9), ("Borscht", 0.5)]);
    let mut rng = seeded_rng();

    let picks: HashSet<&str> = (0..300)
        .map(|_| select(&candidates, SelectionPolicy::Random, &mut rng).unwrap())
        .collect();

    assert_eq!(picks, HashSet::from(["Chili", "Apple Pie", "Borscht"]));
}

#[test]
fn test_random_is_reproducible_with_same_seed() {
    let candidates = scored(&[("a", 0.5), ("b", 0.5), ("c", 0.5), ("d", 0.5)]);
    let mut first = seeded_rng();
    let mut second = seeded_rng();

    for _ in 0..50 {
        assert_eq!(
            select(&candidates, SelectionPolicy::Random, &mut first),
            select(&candidates, SelectionPolicy::Random, &mut second)
        );
    }
}

#[test]
fn test_single_candidate_random_returns_it() {
    let candidates = scored(&[("Only", 0.4)]);
    let mut rng = seeded_rng();
    assert_eq!(
        select(&candidates, SelectionPolicy::Random, &mut rng),
        Some("Only")
    );
}

// ============================================================================
// End-to-end Recommendation
// ============================================================================

fn soup_catalog() -> Vec<Recipe> {
    vec![Recipe::new("Soup")
        .with_diet(DietLevel::Vegan)
        .with_ingredient("carrot", 2.0)
        .with_ingredient("water", 1.0)]
}

#[test]
fn test_soup_recommended_for_optimal_vegan_request() {
    let recipes = soup_catalog();
    let pantry = PantrySnapshot::new()
        .with_item("carrot", 1.0)
        .with_item("water", 5.0);
    let mut rng = seeded_rng();

    let recipe = recommend_recipe(&recipes, &pantry, "vegan", "optimal", &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(recipe.name, "Soup");

    let request = RecommendationRequest::parse("vegan", "optimal");
    let recommendation = Recommender::new(&recipes)
        .recommend(&pantry, &request, &mut rng)
        .unwrap()
        .unwrap();
    assert!((recommendation.readiness - 0.75).abs() < EPSILON);
    assert_eq!(recommendation.candidates, 1);
    assert_eq!(recommendation.policy, SelectionPolicy::Best);
}

#[test]
fn test_unknown_diet_requests_normal_recipes() {
    let recipes = soup_catalog();
    let pantry = PantrySnapshot::new()
        .with_item("carrot", 2.0)
        .with_item("water", 1.0);
    let mut rng = seeded_rng();

    // Soup is tagged vegan only, so a "keto" (normal) request finds nothing
    let result = recommend_recipe(&recipes, &pantry, "keto", "optimal", &mut rng).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_not_found_when_pantry_is_empty() {
    let recipes = soup_catalog();
    let mut rng = seeded_rng();

    for usage_mode in ["optimal", "random"] {
        let result =
            recommend_recipe(&recipes, &PantrySnapshot::new(), "vegan", usage_mode, &mut rng)
                .unwrap();
        assert!(result.is_none());
    }
}

#[test]
fn test_full_recipe_record_is_returned() {
    let recipes = vec![Recipe::new("Porridge")
        .with_diet(DietLevel::Vegetarian)
        .with_ingredient("oats", 1.0)
        .with_detail("instructions", serde_json_value(&["Simmer oats in milk"]))];
    let pantry = PantrySnapshot::new().with_item("oats", 1.0);
    let mut rng = seeded_rng();

    let recipe = recommend_recipe(&recipes, &pantry, "Vegetarian", "random", &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(recipe, &recipes[0]);
    assert!(recipe.details.contains_key("instructions"));
}

#[test]
fn test_custom_threshold_on_request() {
    let recipes = soup_catalog();
    let pantry = PantrySnapshot::new()
        .with_item("carrot", 1.0)
        .with_item("water", 5.0);
    let mut rng = seeded_rng();

    let request = RecommendationRequest::parse("vegan", "optimal").with_min_threshold(0.75);
    let result = Recommender::new(&recipes)
        .recommend(&pantry, &request, &mut rng)
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_shared_name_resolves_to_the_diet_compliant_recipe() {
    let recipes = vec![
        Recipe::new("Curry")
            .with_diet(DietLevel::Vegan)
            .with_ingredient("tofu", 1.0),
        Recipe::new("Curry")
            .with_diet(DietLevel::Normal)
            .with_ingredient("chicken", 1.0),
    ];
    let pantry = PantrySnapshot::new().with_item("tofu", 1.0);
    let mut rng = seeded_rng();

    for usage_mode in ["optimal", "random"] {
        let recipe = recommend_recipe(&recipes, &pantry, "vegan", usage_mode, &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(recipe, &recipes[0]);
        assert!(recipe.complies_with(DietLevel::Vegan));
    }

    let request = RecommendationRequest::parse("vegan", "optimal");
    let recommendation = Recommender::new(&recipes)
        .recommend(&pantry, &request, &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(recommendation.recipe.ingredients[0].name, "tofu");
    assert!((recommendation.readiness - 1.0).abs() < EPSILON);

    let pantry = pantry.with_item("chicken", 1.0);
    let recipe = recommend_recipe(&recipes, &pantry, "normal", "optimal", &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(recipe, &recipes[1]);
}

fn serde_json_value(steps: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        steps
            .iter()
            .map(|step| serde_json::Value::String((*step).to_owned()))
            .collect(),
    )
}
