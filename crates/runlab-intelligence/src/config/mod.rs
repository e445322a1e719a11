// ABOUTME: Pace zone calibration and display factor configuration with environment overrides
// ABOUTME: Loads zone constants from RUNLAB_ZONE_* variables and validates their ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::vdot_calibration::MAX_VDOT;
use crate::physiological_constants::{display, pace_zones};
use runlab_core::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Pace zone calibration constants
///
/// `pace = round((vdot_scale / vdot) * constant * pace_factor)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceZoneConfig {
    /// Numerator converting VDOT into a base pace scale
    pub vdot_scale: f64,
    /// Fastest easy pace constant
    pub easy_fast: f64,
    /// Slowest easy pace constant
    pub easy_slow: f64,
    /// Marathon pace constant
    pub marathon: f64,
    /// Threshold pace constant
    pub threshold: f64,
    /// Interval pace constant
    pub interval: f64,
    /// Repetition pace constant
    pub repetition: f64,
}

impl Default for PaceZoneConfig {
    fn default() -> Self {
        Self {
            vdot_scale: pace_zones::VDOT_SCALE,
            easy_fast: pace_zones::EASY_FAST,
            easy_slow: pace_zones::EASY_SLOW,
            marathon: pace_zones::MARATHON,
            threshold: pace_zones::THRESHOLD,
            interval: pace_zones::INTERVAL,
            repetition: pace_zones::REPETITION,
        }
    }
}

impl PaceZoneConfig {
    /// Load zone constants from environment, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            vdot_scale: pace_zones::VDOT_SCALE,
            easy_fast: env_f64("RUNLAB_ZONE_EASY_FAST", pace_zones::EASY_FAST),
            easy_slow: env_f64("RUNLAB_ZONE_EASY_SLOW", pace_zones::EASY_SLOW),
            marathon: env_f64("RUNLAB_ZONE_MARATHON", pace_zones::MARATHON),
            threshold: env_f64("RUNLAB_ZONE_THRESHOLD", pace_zones::THRESHOLD),
            interval: env_f64("RUNLAB_ZONE_INTERVAL", pace_zones::INTERVAL),
            repetition: env_f64("RUNLAB_ZONE_REPETITION", pace_zones::REPETITION),
        }
    }

    /// Validate constants
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a constant that is not finite
    /// or lies outside `(0, MAX_CONSTANT]`, and `ConfigError::InvalidRange` when
    /// the zones are not strictly ordered
    /// `repetition < interval < threshold < marathon < easy_fast < easy_slow`
    /// or two neighbours are so close that rounding could merge them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.vdot_scale,
            self.repetition,
            self.interval,
            self.threshold,
            self.marathon,
            self.easy_fast,
            self.easy_slow,
        ];
        let in_range = |value: &f64| {
            value.is_finite() && *value > 0.0 && *value <= pace_zones::MAX_CONSTANT
        };
        if !values.iter().all(in_range) {
            return Err(ConfigError::ValueOutOfRange(
                "pace zone constants must lie in (0, 1000]",
            ));
        }

        let ordered = values[1..].windows(2).all(|pair| pair[0] < pair[1]);
        if !ordered {
            return Err(ConfigError::InvalidRange(
                "pace zone constants must satisfy \
                 repetition < interval < threshold < marathon < easy_fast < easy_slow",
            ));
        }

        // Fastest base pace times the lowest pace factor must keep every
        // neighbouring pair more than one second apart before rounding.
        let narrowest_gap = values[1..]
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold(f64::INFINITY, f64::min);
        let smallest_step =
            self.vdot_scale / MAX_VDOT * pace_zones::MIN_PACE_FACTOR * narrowest_gap;
        if smallest_step <= 1.0 {
            return Err(ConfigError::InvalidRange(
                "pace zone constants are too close to stay distinct after rounding",
            ));
        }

        Ok(())
    }
}

/// Display-only factors
///
/// They shape the fitness summary and never reach pace computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Multiplier on VDOT for female athletes when classifying level
    pub female_display_factor: f64,
    /// Multiplier from display VDOT to estimated `VO2max`
    pub vo2max_factor: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            female_display_factor: display::FEMALE_VDOT_FACTOR,
            vo2max_factor: display::VO2MAX_FACTOR,
        }
    }
}

impl DisplayConfig {
    /// Validate factors
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if either factor is not a positive number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [self.female_display_factor, self.vo2max_factor];
        if factors.iter().any(|factor| !factor.is_finite() || *factor <= 0.0) {
            return Err(ConfigError::ValueOutOfRange("display factors must be positive"));
        }
        Ok(())
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default, "Unparsable configuration value, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ZONE_KEYS: [&str; 6] = [
        "RUNLAB_ZONE_EASY_FAST",
        "RUNLAB_ZONE_EASY_SLOW",
        "RUNLAB_ZONE_MARATHON",
        "RUNLAB_ZONE_THRESHOLD",
        "RUNLAB_ZONE_INTERVAL",
        "RUNLAB_ZONE_REPETITION",
    ];

    fn clear_zone_env() {
        for key in ZONE_KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PaceZoneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_constants_rejected() {
        let config = PaceZoneConfig {
            threshold: 170.0,
            ..PaceZoneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_non_positive_constant_rejected() {
        let config = PaceZoneConfig {
            repetition: 0.0,
            ..PaceZoneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_oversized_constant_rejected() {
        let config = PaceZoneConfig {
            easy_slow: 1e12,
            ..PaceZoneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_neighbours_too_close_rejected() {
        // 180 / 85 * 0.5 * 0.5 is about 0.53 seconds between threshold and marathon
        let crowded = PaceZoneConfig {
            threshold: 164.5,
            ..PaceZoneConfig::default()
        };
        assert!(matches!(
            crowded.validate(),
            Err(ConfigError::InvalidRange(_))
        ));

        let spaced = PaceZoneConfig {
            threshold: 164.0,
            ..PaceZoneConfig::default()
        };
        assert!(spaced.validate().is_ok());
    }

    #[test]
    fn test_display_factors_must_be_positive() {
        assert!(DisplayConfig::default().validate().is_ok());
        let display = DisplayConfig {
            vo2max_factor: f64::NAN,
            ..DisplayConfig::default()
        };
        assert!(matches!(
            display.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_zone_env();
        env::set_var("RUNLAB_ZONE_THRESHOLD", "150");
        let config = PaceZoneConfig::from_env();
        clear_zone_env();

        assert!((config.threshold - 150.0).abs() < f64::EPSILON);
        assert!((config.marathon - pace_zones::MARATHON).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_on_garbage() {
        clear_zone_env();
        env::set_var("RUNLAB_ZONE_INTERVAL", "fast");
        let config = PaceZoneConfig::from_env();
        clear_zone_env();

        assert_eq!(config, PaceZoneConfig::default());
    }
}
