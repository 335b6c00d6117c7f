// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup and temporary catalog and pantry fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pantry_chef`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use serde_json::{json, Value};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Write `value` as JSON to `dir/file_name`
pub fn write_json(dir: &Path, file_name: &str, value: &Value) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// The Soup recipe: vegan, 2 carrots and 1 water
pub fn soup_json() -> Value {
    json!({
        "name": "Soup",
        "diets": ["vegan"],
        "ingredients": { "carrot": 2, "water": 1 },
        "instructions": ["Chop the carrots", "Boil in water"]
    })
}

/// Temporary catalog directory holding Soup, Omelette and Salad
pub fn sample_catalog_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "soup.json", &soup_json());
    write_json(
        dir.path(),
        "omelette.json",
        &json!({
            "name": "Omelette",
            "diets": ["normal", "vegetarian"],
            "ingredients": { "eggs": 3, "butter": 1, "salt": 1 },
            "description": "Quick breakfast"
        }),
    );
    write_json(
        dir.path(),
        "salad.json",
        &json!({
            "name": "Salad",
            "diets": ["normal", "vegetarian", "vegan"],
            "ingredients": { "lettuce": 1, "tomato": 2 }
        }),
    );
    dir
}

/// Write a pantry file in `dir` from `(name, quantity)` pairs
pub fn write_pantry(dir: &Path, items: &[(&str, f64)]) -> PathBuf {
    let records: Vec<Value> = items
        .iter()
        .map(|(name, quantity)| json!({ "name": name, "quantity": quantity }))
        .collect();
    write_json(dir, "pantry.json", &Value::Array(records))
}
