// ABOUTME: Log level and deployment environment enums read from the process environment
// ABOUTME: Both parse leniently, falling back to a default instead of failing startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::env;
use std::fmt::{self, Display, Formatter};

use chef_core::constants::env_config;

/// Verbosity of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Failures only
    Error,
    /// Adds skipped recipes and other recoverable problems
    Warn,
    /// Recommendation outcomes
    #[default]
    Info,
    /// Per-recipe scoring decisions
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Case-insensitive parse; anything unrecognised is `Info`
    #[must_use]
    pub fn from_str_or_default(raw: &str) -> Self {
        [Self::Error, Self::Warn, Self::Debug, Self::Trace]
            .into_iter()
            .find(|level| raw.eq_ignore_ascii_case(level.as_str()))
            .unwrap_or_default()
    }

    /// Level for a count of `-v` flags: none keeps `Info`, one is `Debug`
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Info,
            1 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Directive understood by `EnvFilter`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the binary is running; production switches logs to JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local runs (default)
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Test harness
    Testing,
}

impl Environment {
    /// Accepts the full names plus `prod` and `test`; anything else is `Development`
    #[must_use]
    pub fn from_str_or_default(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Read `CHEF_ENVIRONMENT`, defaulting when it is unset
    #[must_use]
    pub fn from_env() -> Self {
        env::var(env_config::ENVIRONMENT)
            .map(|raw| Self::from_str_or_default(&raw))
            .unwrap_or_default()
    }

    /// Whether logs should be machine-readable
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Lowercase name as written in `CHEF_ENVIRONMENT`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
