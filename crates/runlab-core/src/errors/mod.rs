// ABOUTME: Unified error handling for the Runlab engine, configuration and CLI
// ABOUTME: Defines ErrorCode, AppError and re-exports validation and config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The pure engine has exactly one failure mode, [`ValidationError`], raised by
//! the pipeline before any computation happens. Configuration loading reports
//! [`ConfigError`]. Everything that talks to the outside world (CLI argument
//! parsing, batch files, serialization) uses [`AppError`], which both of the
//! former convert into.

/// Configuration error types
pub mod config;
/// Engine input validation errors
pub mod validation;

pub use config::ConfigError;
pub use validation::{ValidationError, ValidationField};

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be parsed or is outside accepted values
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A field required by the pipeline was not provided
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Configuration (6000-6999)
    /// Configuration values failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// JSON encoding or decoding failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
    /// Reading or writing a file failed
    #[serde(rename = "IO_ERROR")]
    IoError = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::MissingRequiredField => "Missing required field",
            Self::ConfigInvalid => "Invalid configuration",
            Self::InternalError => "Internal error",
            Self::SerializationError => "Serialization error",
            Self::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Application error carrying a code, a message and an optional source
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

/// Result alias used by the CLI and configuration-facing code
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying error
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// File read/write failure
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::new(ErrorCode::MissingRequiredField, error.message.clone()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("JSON processing failed: {error}"),
        )
        .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts_to_missing_field() {
        let error: AppError = ValidationError::missing_gender().into();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.message, "Select a gender.");
        assert!(error.source.is_some());
    }

    #[test]
    fn test_config_error_converts_to_config_invalid() {
        let error: AppError = ConfigError::InvalidRange("zone constants must be ordered").into();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("zone constants must be ordered"));
    }

    #[test]
    fn test_display_includes_code_description() {
        let error = AppError::invalid_input("bad time '1:xx'");
        assert_eq!(error.to_string(), "Invalid input: bad time '1:xx'");
    }

    #[test]
    fn test_error_code_serializes_screaming_case() {
        let json = serde_json::to_string(&ErrorCode::ConfigInvalid).unwrap();
        assert_eq!(json, "\"CONFIG_INVALID\"");
    }
}
