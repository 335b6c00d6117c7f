// ABOUTME: Configuration error types for environment parsing and validation
// ABOUTME: Defines error variants for unparsable values and out-of-range settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use chef_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be parsed
    #[error("Invalid value '{value}' for {key}")]
    Parse {
        /// Environment variable name
        key: &'static str,
        /// Raw value found
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string()).with_source(err)
    }
}
