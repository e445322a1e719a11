// ABOUTME: Core pace-engine algorithms: VDOT estimation, adjustments, pace zones, fitness summary
// ABOUTME: Each algorithm is a pure function over validated input with no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Profile and condition adjustment rules
pub mod adjustments;

/// Display-side fitness summary (level and `VO2max`)
pub mod fitness_level;

/// Training pace zone generation
pub mod pace_zones;

/// Table-driven VDOT estimation
pub mod vdot;

pub use adjustments::{
    compute_adjustments, compute_adjustments_with, AdjustmentRule, RulePredicate, ADJUSTMENT_RULES,
};
pub use fitness_level::{classify_level, summarize, summarize_with};
pub use pace_zones::{compute_paces, PaceZoneCalculator};
pub use vdot::{estimate_vdot, CalibrationPosition, VdotEstimate, VdotEstimator};

use runlab_core::constants::precision::ONE_DECIMAL_SCALE;

/// Round to one decimal place, half away from zero
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * ONE_DECIMAL_SCALE).round() / ONE_DECIMAL_SCALE
}
