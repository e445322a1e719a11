// ABOUTME: Engine configuration bundling pace zone calibration and display factors
// ABOUTME: Loads defaults, applies RUNLAB_ZONE_* overrides, validates and caches globally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration
//!
//! Zone constants can be overridden through the environment with the
//! `RUNLAB_ZONE_` prefix. Display factors keep their defaults when loaded from
//! the environment; a programmatic config may set them, and
//! [`EngineConfig::pipeline`] applies both parts.

use runlab_core::errors::ConfigError;
use runlab_intelligence::{PaceZoneConfig, TrainingPipeline};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::warn;

pub use runlab_intelligence::DisplayConfig;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pace zone calibration
    pub pace_zones: PaceZoneConfig,
    /// Display factors
    pub display: DisplayConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting zone constants fail validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self {
            pace_zones: PaceZoneConfig::from_env(),
            display: DisplayConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if zone constants are unordered or any factor is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pace_zones.validate()?;
        self.display.validate()
    }

    /// Pipeline over this configuration's calibration and display factors
    #[must_use]
    pub const fn pipeline(&self) -> TrainingPipeline {
        TrainingPipeline::with_config(self.pace_zones).with_display(self.display)
    }
}
