// ABOUTME: Configuration management module for Pantry Chef settings
// ABOUTME: Environment-only configuration for catalog, pantry and scoring parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors
//! Configuration module for Pantry Chef
//!
//! All settings come from environment variables; there are no configuration
//! files. Command-line flags replace individual values after loading through
//! [`ConfigOverrides`], and [`ChefConfig::validate`] checks the result.

/// Environment-driven configuration
pub mod environment;
/// Configuration error types
pub mod error;
/// Shared configuration enums
pub mod types;

pub use environment::{CatalogConfig, ChefConfig, ConfigOverrides, PantryConfig, ScoringConfig};
pub use error::ConfigError;
pub use types::{Environment, LogLevel};
