// ABOUTME: VDOT estimation by interpolating a race result between calibration anchors
// ABOUTME: Brackets the finish time in the per-distance table and clamps outside [30, 85]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::round_to_tenth;
use crate::physiological_constants::vdot_calibration::{anchors, Anchor, MIN_VDOT};
use runlab_core::errors::ValidationError;
use runlab_core::models::RaceDistance;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Where a finish time fell relative to the calibration anchors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CalibrationPosition {
    /// Bracketed by two adjacent anchors
    Interpolated {
        /// VDOT of the slower anchor
        lower_vdot: f64,
        /// VDOT of the faster anchor
        upper_vdot: f64,
    },
    /// Slower than the lowest anchor; clamped to the minimum VDOT
    BelowRange,
    /// Faster than the highest anchor; clamped to the maximum VDOT
    AboveRange,
}

/// A VDOT estimate together with how it was obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VdotEstimate {
    /// Estimated VDOT rounded to one decimal
    pub vdot: f64,
    /// Position of the finish time in the calibration table
    pub position: CalibrationPosition,
}

/// Table-driven VDOT estimator
///
/// Anchors are `(VDOT, time)` pairs with ascending VDOT and descending time.
/// A finish time between two adjacent anchors is placed by linear
/// interpolation; times outside the table clamp to the nearest end (30 or 85)
/// rather than extrapolating.
///
/// # Example
///
/// ```rust
/// use runlab_core::models::RaceDistance;
/// use runlab_intelligence::algorithms::VdotEstimator;
///
/// // 5K in 28:20 sits between the VDOT 45 (30:45) and VDOT 50 (27:38) anchors
/// let vdot = VdotEstimator::estimate(RaceDistance::M5000, 1_700.0).unwrap();
/// assert!((vdot - 48.9).abs() < 1e-9);
/// ```
pub struct VdotEstimator;

impl VdotEstimator {
    /// Estimate VDOT for a race result
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` with field `time` if `time_seconds` is not a
    /// positive finite number.
    pub fn estimate(distance: RaceDistance, time_seconds: f64) -> Result<f64, ValidationError> {
        Self::estimate_detailed(distance, time_seconds).map(|estimate| estimate.vdot)
    }

    /// Estimate VDOT and report where the time fell in the table
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` with field `time` if `time_seconds` is not a
    /// positive finite number.
    pub fn estimate_detailed(
        distance: RaceDistance,
        time_seconds: f64,
    ) -> Result<VdotEstimate, ValidationError> {
        if !time_seconds.is_finite() || time_seconds <= 0.0 {
            return Err(ValidationError::invalid_time(time_seconds));
        }
        Ok(Self::locate(distance, time_seconds))
    }

    /// Place an already validated finish time in the calibration table
    ///
    /// Performs no input checks. A time that cannot be ordered against the
    /// anchors degrades to the minimum VDOT with a warning.
    #[must_use]
    pub fn locate(distance: RaceDistance, time_seconds: f64) -> VdotEstimate {
        let estimate = Self::interpolate(anchors(distance), time_seconds).unwrap_or_else(|| {
            warn!(
                distance = %distance,
                time_seconds,
                "Finish time not comparable, using minimum VDOT"
            );
            VdotEstimate {
                vdot: MIN_VDOT,
                position: CalibrationPosition::BelowRange,
            }
        });

        match estimate.position {
            CalibrationPosition::Interpolated { .. } => {
                debug!(distance = %distance, time_seconds, vdot = estimate.vdot, "VDOT estimated");
            }
            CalibrationPosition::BelowRange | CalibrationPosition::AboveRange => {
                warn!(
                    distance = %distance,
                    time_seconds,
                    vdot = estimate.vdot,
                    position = ?estimate.position,
                    "Finish time outside calibrated range, VDOT clamped"
                );
            }
        }

        estimate
    }

    /// Interpolate VDOT from an anchor table
    ///
    /// Returns `None` for a table with fewer than two anchors or a time that
    /// cannot be ordered (NaN). Callers are expected to pass a validated,
    /// positive time.
    #[must_use]
    pub fn interpolate(anchors: &[Anchor], time_seconds: f64) -> Option<VdotEstimate> {
        let (slowest, fastest) = (anchors.first()?, anchors.last()?);

        if time_seconds > slowest.time_seconds {
            return Some(VdotEstimate {
                vdot: round_to_tenth(slowest.vdot),
                position: CalibrationPosition::BelowRange,
            });
        }
        if time_seconds < fastest.time_seconds {
            return Some(VdotEstimate {
                vdot: round_to_tenth(fastest.vdot),
                position: CalibrationPosition::AboveRange,
            });
        }

        anchors.windows(2).find_map(|pair| match pair {
            [lower, upper]
                if lower.time_seconds >= time_seconds && time_seconds >= upper.time_seconds =>
            {
                Some(VdotEstimate {
                    vdot: round_to_tenth(Self::interpolate_pair(*lower, *upper, time_seconds)),
                    position: CalibrationPosition::Interpolated {
                        lower_vdot: lower.vdot,
                        upper_vdot: upper.vdot,
                    },
                })
            }
            _ => None,
        })
    }

    /// Linear interpolation between a slower and a faster anchor
    fn interpolate_pair(lower: Anchor, upper: Anchor, time_seconds: f64) -> f64 {
        let span = lower.time_seconds - upper.time_seconds;
        if span <= 0.0 {
            return lower.vdot;
        }
        let ratio = (lower.time_seconds - time_seconds) / span;
        (upper.vdot - lower.vdot).mul_add(ratio, lower.vdot)
    }
}

/// Estimate VDOT for a race result using the built-in calibration table
///
/// # Errors
///
/// Returns `ValidationError` if `time_seconds` is not a positive finite number.
pub fn estimate_vdot(distance: RaceDistance, time_seconds: f64) -> Result<f64, ValidationError> {
    VdotEstimator::estimate(distance, time_seconds)
}
