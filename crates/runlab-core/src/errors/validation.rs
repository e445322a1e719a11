// ABOUTME: Validation error raised by the training pipeline before computation
// ABOUTME: Names the first missing field (distance, time or gender) with a user message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Input field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationField {
    /// Race distance was not selected
    Distance,
    /// Finish time was zero or not a positive number
    Time,
    /// Gender was not selected
    Gender,
}

impl ValidationField {
    /// Wire name of the field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
            Self::Gender => "gender",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single failure mode of the training pipeline
///
/// Only the first failing field is ever reported; the presentation layer
/// shows `message` and withholds results until it is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Field that failed
    pub field: ValidationField,
    /// Message suitable for showing to the athlete
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for a field
    #[must_use]
    pub fn new(field: ValidationField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// No race distance selected
    #[must_use]
    pub fn missing_distance() -> Self {
        Self::new(ValidationField::Distance, "Select a race distance.")
    }

    /// Finish time is zero
    #[must_use]
    pub fn missing_time() -> Self {
        Self::new(ValidationField::Time, "Enter a finish time.")
    }

    /// Finish time is negative or not a finite number
    #[must_use]
    pub fn invalid_time(time_seconds: f64) -> Self {
        Self::new(
            ValidationField::Time,
            format!("Finish time must be a positive number of seconds, got {time_seconds}."),
        )
    }

    /// No gender selected
    #[must_use]
    pub fn missing_gender() -> Self {
        Self::new(ValidationField::Gender, "Select a gender.")
    }
}
