// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: Validates defaults, variable parsing, range checks and enum fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use chef_core::constants::{defaults, env_config};
use pantry_chef::config::{ChefConfig, ConfigError, ConfigOverrides, Environment, LogLevel};
use serial_test::serial;

const ALL_VARS: [&str; 5] = [
    env_config::CATALOG_DIR,
    env_config::PANTRY_FILE,
    env_config::MIN_READINESS,
    env_config::MIN_PANTRY_QUANTITY,
    env_config::ENVIRONMENT,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

// ============================================================================
// Enum Parsing
// ============================================================================

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert_eq!(Environment::Testing.to_string(), "testing");
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}

// ============================================================================
// Loading From Environment
// ============================================================================

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = ChefConfig::from_env().unwrap();

    assert_eq!(config, ChefConfig::default());
    assert_eq!(config.catalog.dir, PathBuf::from(defaults::DEFAULT_CATALOG_DIR));
    assert!((config.scoring.min_readiness - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.pantry.minimum_quantity, None);
}

#[test]
#[serial]
fn test_values_read_from_environment() {
    clear_env();
    env::set_var(env_config::CATALOG_DIR, "/srv/recipes");
    env::set_var(env_config::PANTRY_FILE, "/srv/pantry.json");
    env::set_var(env_config::MIN_READINESS, "0.25");
    env::set_var(env_config::MIN_PANTRY_QUANTITY, " 2 ");
    env::set_var(env_config::ENVIRONMENT, "production");

    let config = ChefConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.catalog.dir, PathBuf::from("/srv/recipes"));
    assert_eq!(config.pantry.file, PathBuf::from("/srv/pantry.json"));
    assert!((config.scoring.min_readiness - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.pantry.minimum_quantity, Some(2.0));
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_unparsable_number_is_rejected() {
    clear_env();
    env::set_var(env_config::MIN_READINESS, "a lot");

    let err = ChefConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(
        err,
        ConfigError::Parse {
            key: env_config::MIN_READINESS,
            value: "a lot".to_owned(),
        }
    );
}

#[test]
#[serial]
fn test_out_of_range_threshold_loads_but_fails_validation() {
    clear_env();
    for value in ["1.0", "-0.1", "NaN"] {
        env::set_var(env_config::MIN_READINESS, value);
        let config = ChefConfig::from_env().unwrap();
        assert!(
            matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))),
            "{value}"
        );
    }
    clear_env();
}

// ============================================================================
// Overrides
// ============================================================================

#[test]
#[serial]
fn test_override_replaces_out_of_range_environment_value() {
    clear_env();
    env::set_var(env_config::MIN_READINESS, "5");
    env::set_var(env_config::MIN_PANTRY_QUANTITY, "-2");

    let loaded = ChefConfig::from_env().unwrap();
    clear_env();
    assert!(loaded.validate().is_err());

    let overrides = ConfigOverrides {
        min_readiness: Some(0.3),
        minimum_quantity: Some(0.0),
        ..ConfigOverrides::default()
    };
    let config = loaded.with_overrides(&overrides);

    assert!(config.validate().is_ok());
    assert!((config.scoring.min_readiness - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.pantry.minimum_quantity, Some(0.0));
}

#[test]
fn test_empty_overrides_keep_loaded_values() {
    let mut config = ChefConfig::default();
    config.scoring.min_readiness = 0.4;
    config.pantry.minimum_quantity = Some(1.0);

    let unchanged = config.clone().with_overrides(&ConfigOverrides::default());
    assert_eq!(unchanged, config);

    let moved = config.with_overrides(&ConfigOverrides {
        catalog_dir: Some(PathBuf::from("/tmp/recipes")),
        pantry_file: Some(PathBuf::from("/tmp/pantry.json")),
        ..ConfigOverrides::default()
    });
    assert_eq!(moved.catalog.dir, PathBuf::from("/tmp/recipes"));
    assert_eq!(moved.pantry.file, PathBuf::from("/tmp/pantry.json"));
    assert!((moved.scoring.min_readiness - 0.4).abs() < f64::EPSILON);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_accepts_zero_threshold() {
    let mut config = ChefConfig::default();
    config.scoring.min_readiness = 0.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_negative_minimum_quantity() {
    let mut config = ChefConfig::default();
    config.pantry.minimum_quantity = Some(-1.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}
