// ABOUTME: Integration tests for loading the recipe catalog from a directory
// ABOUTME: Covers file ordering, lookups, duplicate names and invalid recipe files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use chef_core::errors::ErrorCode;
use chef_core::models::{DietLevel, Recipe};
use common::{init_test_logging, sample_catalog_dir, soup_json, write_json};
use pantry_chef::Catalog;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Directory Loading
// ============================================================================

#[test]
fn test_load_dir_reads_files_in_name_order() {
    init_test_logging();
    let dir = sample_catalog_dir();

    let catalog = Catalog::load_dir(dir.path()).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.names().collect::<Vec<_>>(),
        vec!["Omelette", "Salad", "Soup"]
    );
}

#[test]
fn test_loaded_recipe_keeps_ingredient_order_and_details() {
    init_test_logging();
    let dir = sample_catalog_dir();
    let catalog = Catalog::load_dir(dir.path()).unwrap();

    let omelette = catalog.get("Omelette").unwrap();
    let names: Vec<&str> = omelette
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect();
    assert_eq!(names, vec!["eggs", "butter", "salt"]);
    assert!(omelette.complies_with(DietLevel::Vegetarian));
    assert_eq!(omelette.details.get("description"), Some(&json!("Quick breakfast")));
}

#[test]
fn test_non_json_files_and_subdirectories_are_ignored() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "soup.json", &soup_json());
    fs::write(dir.path().join("README.md"), "# recipes").unwrap();
    fs::create_dir(dir.path().join("drafts.json")).unwrap();

    let catalog = Catalog::load_dir(dir.path()).unwrap();
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Soup"]);
}

#[test]
fn test_empty_directory_gives_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load_dir(dir.path()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.get("Soup").is_none());
}

#[test]
fn test_missing_directory_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load_dir(dir.path().join("nope")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_duplicate_recipe_names_are_rejected() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "a.json", &soup_json());
    write_json(dir.path(), "b.json", &soup_json());

    let err = Catalog::load_dir(dir.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert!(err.message.contains("Soup"));
}

#[test]
fn test_unknown_diet_tag_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    write_json(
        dir.path(),
        "keto.json",
        &json!({ "name": "Keto Bowl", "diets": ["keto"], "ingredients": { "egg": 1 } }),
    );

    let err = Catalog::load_dir(dir.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.message.contains("keto.json"));
}

#[test]
fn test_negative_required_amount_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    write_json(
        dir.path(),
        "bad.json",
        &json!({ "name": "Bad", "diets": ["normal"], "ingredients": { "flour": -1 } }),
    );

    let err = Catalog::load_dir(dir.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_recipe_without_ingredients_still_loads() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    write_json(
        dir.path(),
        "air.json",
        &json!({ "name": "Air", "diets": ["vegan"], "ingredients": {} }),
    );

    let catalog = Catalog::load_dir(dir.path()).unwrap();
    assert!(!catalog.get("Air").unwrap().has_ingredients());
}

#[test]
fn test_from_recipes_rejects_empty_name() {
    let err = Catalog::from_recipes(vec![Recipe::new("").with_ingredient("x", 1.0)]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}
