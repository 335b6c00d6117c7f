// ABOUTME: Unified error handling with standard error codes for Pantry Chef
// ABOUTME: Defines ErrorCode, AppError, AppResult and re-exports the recommendation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! # Unified Error Handling System
//!
//! `AppError` is the error type of the gateway and service layers (catalog
//! loading, pantry retrieval, configuration). The recommendation core has its
//! own narrow taxonomy, [`RecommendationError`], which converts into `AppError`.

mod recommendation;

pub use recommendation::RecommendationError;

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Data could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// Resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Resource identifier collides with an existing one
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Filesystem or storage failure
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Stable numeric code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Unified error type for the application
#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Malformed data
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Resource lookup failed
    #[must_use]
    pub fn not_found(resource: impl Display) -> Self {
        Self::new(ErrorCode::ResourceNotFound, format!("{resource} not found"))
    }

    /// Duplicate identifier
    #[must_use]
    pub fn already_exists(resource: impl Display) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{resource} already exists"),
        )
    }

    /// Filesystem failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Unexpected internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<RecommendationError> for AppError {
    fn from(err: RecommendationError) -> Self {
        let code = match &err {
            RecommendationError::MalformedRecipe { .. } => ErrorCode::InvalidFormat,
            RecommendationError::InvalidQuantity { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {err}")).with_source(err)
    }
}

/// Result alias used across the gateway and service layers
pub type AppResult<T> = Result<T, AppError>;
