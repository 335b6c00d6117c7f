// ABOUTME: Logging configuration and structured logging setup for diagnostics
// ABOUTME: Configures log level, formatter and stderr output so stdout stays machine-readable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Structured logging setup
//!
//! Logs always go to stderr. Command results are printed on stdout as JSON,
//! so the two never interleave.

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use chef_core::constants::service_names;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Environment, LogLevel};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output (default)
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::PANTRY_CHEF.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let format = env::var("LOG_FORMAT").map_or_else(
            |_| {
                if environment.is_production() {
                    LogFormat::Json
                } else {
                    LogFormat::Compact
                }
            },
            |value| LogFormat::from_str_or_default(&value),
        );

        Self {
            level: env::var("LOG_LEVEL")
                .map(|value| LogLevel::from_str_or_default(&value))
                .unwrap_or_default(),
            format,
            include_location: environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::PANTRY_CHEF.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the default level
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// `RUST_LOG` takes precedence over the configured level when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(self.level.to_string()),
            |directive| EnvFilter::new(&directive),
        );

        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Pantry Chef starting up"
        );
    }
}
