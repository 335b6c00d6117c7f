// ABOUTME: Environment-driven configuration for catalog, pantry and scoring
// ABOUTME: Loads CHEF_* variables, applies command-line overrides and validates ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::env;
use std::path::PathBuf;

use chef_core::constants::{defaults, env_config, readiness};
use tracing::debug;

use super::error::ConfigError;
use super::types::Environment;

/// Where recipe files are read from
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Directory holding one JSON file per recipe
    pub dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(defaults::DEFAULT_CATALOG_DIR),
        }
    }
}

/// Where pantry contents are read from and which items count
#[derive(Debug, Clone, PartialEq)]
pub struct PantryConfig {
    /// JSON file holding the item list
    pub file: PathBuf,
    /// Items with quantity at or below this are ignored; `None` keeps all
    pub minimum_quantity: Option<f64>,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(defaults::DEFAULT_PANTRY_FILE),
            minimum_quantity: None,
        }
    }
}

/// Scoring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Recipes must score strictly above this to be recommended
    pub min_readiness: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_readiness: readiness::DEFAULT_MIN_READINESS,
        }
    }
}

/// Values supplied on the command line, each replacing its environment setting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Replaces `catalog.dir`
    pub catalog_dir: Option<PathBuf>,
    /// Replaces `pantry.file`
    pub pantry_file: Option<PathBuf>,
    /// Replaces `scoring.min_readiness`
    pub min_readiness: Option<f64>,
    /// Replaces `pantry.minimum_quantity`
    pub minimum_quantity: Option<f64>,
}

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChefConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Recipe catalog settings
    pub catalog: CatalogConfig,
    /// Pantry settings
    pub pantry: PantryConfig,
    /// Scoring settings
    pub scoring: ScoringConfig,
}

impl ChefConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults. Ranges are not checked here so
    /// that command-line overrides can replace a bad value first; call
    /// [`ChefConfig::validate`] on the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if a numeric variable is not a number
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            environment: Environment::from_env(),
            catalog: CatalogConfig {
                dir: PathBuf::from(env_var_or(
                    env_config::CATALOG_DIR,
                    defaults::DEFAULT_CATALOG_DIR,
                )),
            },
            pantry: PantryConfig {
                file: PathBuf::from(env_var_or(
                    env_config::PANTRY_FILE,
                    defaults::DEFAULT_PANTRY_FILE,
                )),
                minimum_quantity: parse_optional_f64(env_config::MIN_PANTRY_QUANTITY)?,
            },
            scoring: ScoringConfig {
                min_readiness: parse_optional_f64(env_config::MIN_READINESS)?
                    .unwrap_or(readiness::DEFAULT_MIN_READINESS),
            },
        };

        debug!(
            environment = %config.environment,
            catalog_dir = %config.catalog.dir.display(),
            pantry_file = %config.pantry.file.display(),
            min_readiness = config.scoring.min_readiness,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Replace every setting the overrides carry
    #[must_use]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(dir) = &overrides.catalog_dir {
            self.catalog.dir.clone_from(dir);
        }
        if let Some(file) = &overrides.pantry_file {
            self.pantry.file.clone_from(file);
        }
        if let Some(min_readiness) = overrides.min_readiness {
            self.scoring.min_readiness = min_readiness;
        }
        if overrides.minimum_quantity.is_some() {
            self.pantry.minimum_quantity = overrides.minimum_quantity;
        }
        self
    }

    /// Check that numeric settings are within their valid ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the readiness threshold is outside `[0, 1)`
    /// or the pantry minimum is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_readiness = self.scoring.min_readiness;
        if !min_readiness.is_finite() || !(0.0..readiness::MAX_READINESS).contains(&min_readiness)
        {
            return Err(ConfigError::ValueOutOfRange(
                "min_readiness must be in [0.0, 1.0)",
            ));
        }

        if let Some(minimum) = self.pantry.minimum_quantity {
            if !minimum.is_finite() || minimum < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "minimum_quantity must be a non-negative number",
                ));
            }
        }

        Ok(())
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_optional_f64(key: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::Parse { key, value: raw }),
        Err(_) => Ok(None),
    }
}
