// ABOUTME: Training pace zone generation from raw VDOT and the adjustment pace factor
// ABOUTME: Produces easy range, marathon, threshold, interval and repetition paces in s/km
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PaceZoneConfig;
use crate::physiological_constants::pace_zones::{MAX_PACE_FACTOR, MIN_PACE_FACTOR};
use crate::physiological_constants::vdot_calibration::{MAX_VDOT, MIN_VDOT};
use num_traits::ToPrimitive;
use runlab_core::models::TrainingPaces;
use tracing::{debug, warn};

/// Pace zone generator over a calibration configuration
///
/// Each zone is `round((vdot_scale / vdot) * constant * pace_factor)` seconds
/// per kilometer, evaluated in that order.
///
/// The VDOT is held to the calibrated range `[MIN_VDOT, MAX_VDOT]` and the
/// pace factor to `[MIN_PACE_FACTOR, MAX_PACE_FACTOR]`, the same way the
/// estimator clamps race times outside its tables. Inside those bounds a
/// validated configuration keeps neighbouring zones more than one second apart
/// before rounding, so every result is strictly ordered and fits in `u32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaceZoneCalculator {
    config: PaceZoneConfig,
}

impl PaceZoneCalculator {
    /// Create a calculator over a validated configuration
    #[must_use]
    pub const fn new(config: PaceZoneConfig) -> Self {
        Self { config }
    }

    /// Calibration in use
    #[must_use]
    pub const fn config(&self) -> &PaceZoneConfig {
        &self.config
    }

    /// Compute all zones for a raw VDOT and a pace factor
    ///
    /// `vdot` must be the unadjusted estimate; the female display factor never
    /// reaches this function. Out-of-range inputs are clamped with a warning,
    /// NaN falls back to the lower bound.
    #[must_use]
    pub fn compute(&self, vdot: f64, pace_factor: f64) -> TrainingPaces {
        let vdot = clamp_input("vdot", vdot, MIN_VDOT, MAX_VDOT);
        let pace_factor = clamp_input(
            "pace_factor",
            pace_factor,
            MIN_PACE_FACTOR,
            MAX_PACE_FACTOR,
        );

        let base = self.config.vdot_scale / vdot;
        let zone = |constant: f64| {
            (base * constant * pace_factor)
                .round()
                .to_u32()
                .unwrap_or(u32::MAX)
        };

        let paces = TrainingPaces {
            easy_min: zone(self.config.easy_slow),
            easy_max: zone(self.config.easy_fast),
            marathon: zone(self.config.marathon),
            threshold: zone(self.config.threshold),
            interval: zone(self.config.interval),
            repetition: zone(self.config.repetition),
        };
        debug!(vdot, pace_factor, ?paces, "Pace zones computed");
        paces
    }
}

fn clamp_input(name: &'static str, value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        warn!(input = name, min, "Input is not a number, using lower bound");
        return min;
    }
    if !(min..=max).contains(&value) {
        let clamped = value.clamp(min, max);
        warn!(input = name, value, clamped, "Input outside calibrated range, clamping");
        return clamped;
    }
    value
}

/// Compute training paces with the default calibration
#[must_use]
pub fn compute_paces(vdot: f64, pace_factor: f64) -> TrainingPaces {
    PaceZoneCalculator::default().compute(vdot, pace_factor)
}
