// ABOUTME: Adjustment factors, training pace zones and pace formatting
// ABOUTME: AdjustmentFactors, TrainingPaces (seconds per km), PaceZone metadata, format_pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::SECONDS_PER_MINUTE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplicative training adjustments derived from profile and conditions
///
/// Every component starts at 1.0 and is only ever multiplied by positive
/// factors, so all three stay strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentFactors {
    /// Pace multiplier (greater than 1.0 means slower paces)
    pub pace: f64,
    /// Training volume multiplier
    pub volume: f64,
    /// Training intensity multiplier
    pub intensity: f64,
}

impl AdjustmentFactors {
    /// Neutral factors
    pub const IDENTITY: Self = Self {
        pace: 1.0,
        volume: 1.0,
        intensity: 1.0,
    };

    /// Multiply each component by the matching component of `other`
    #[must_use]
    pub fn scaled_by(self, other: Self) -> Self {
        Self {
            pace: self.pace * other.pace,
            volume: self.volume * other.volume,
            intensity: self.intensity * other.intensity,
        }
    }
}

impl Default for AdjustmentFactors {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Named training-intensity bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceZone {
    /// Easy running
    Easy,
    /// Marathon pace
    Marathon,
    /// Lactate threshold
    Threshold,
    /// `VO2max` intervals
    Interval,
    /// Speed repetitions
    Repetition,
}

impl PaceZone {
    /// Zones from slowest to fastest
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];

    /// Short zone name with its letter code
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy (E)",
            Self::Marathon => "Marathon (M)",
            Self::Threshold => "Threshold (T)",
            Self::Interval => "Interval (I)",
            Self::Repetition => "Repetition (R)",
        }
    }

    /// What the zone trains
    #[must_use]
    pub const fn purpose(self) -> &'static str {
        match self {
            Self::Easy => "Recovery / aerobic base",
            Self::Marathon => "Marathon pace",
            Self::Threshold => "Lactate threshold",
            Self::Interval => "VO2max development",
            Self::Repetition => "Speed / form",
        }
    }

    /// Effort guidance for the zone
    #[must_use]
    pub const fn effort(self) -> &'static str {
        match self {
            Self::Easy => "65-79% of max heart rate, conversational",
            Self::Marathon => "80-85% of max heart rate, sustainable",
            Self::Threshold => "85-88% of max heart rate, 20-60 minutes sustainable",
            Self::Interval => "95-100% of max heart rate, 3-8 minute repeats",
            Self::Repetition => "95%+ of max speed, full recovery",
        }
    }
}

impl fmt::Display for PaceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target paces in seconds per kilometer
///
/// `easy_min` is the slowest easy pace (numerically largest) and `easy_max`
/// the fastest easy pace, following the zone's range rather than numeric
/// order. Ordering: `repetition < interval < threshold < marathon < easy_max < easy_min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingPaces {
    /// Slowest easy pace
    pub easy_min: u32,
    /// Fastest easy pace
    pub easy_max: u32,
    /// Marathon pace
    pub marathon: u32,
    /// Threshold pace
    pub threshold: u32,
    /// Interval pace
    pub interval: u32,
    /// Repetition pace
    pub repetition: u32,
}

impl TrainingPaces {
    /// Easy range as `fast-slow`, e.g. `5:09/km-5:44/km`
    #[must_use]
    pub fn easy_range_text(&self) -> String {
        format!("{}-{}", format_pace(self.easy_max), format_pace(self.easy_min))
    }

    /// Display text for one zone; the easy zone renders as a range
    #[must_use]
    pub fn zone_pace_text(&self, zone: PaceZone) -> String {
        match zone {
            PaceZone::Easy => self.easy_range_text(),
            PaceZone::Marathon => format_pace(self.marathon),
            PaceZone::Threshold => format_pace(self.threshold),
            PaceZone::Interval => format_pace(self.interval),
            PaceZone::Repetition => format_pace(self.repetition),
        }
    }

    /// All zones with their display text, slowest first
    #[must_use]
    pub fn zones(&self) -> Vec<(PaceZone, String)> {
        PaceZone::ALL
            .into_iter()
            .map(|zone| (zone, self.zone_pace_text(zone)))
            .collect()
    }

    /// Whether the zones satisfy the strict ordering invariant
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.repetition < self.interval
            && self.interval < self.threshold
            && self.threshold < self.marathon
            && self.marathon < self.easy_max
            && self.easy_max < self.easy_min
    }
}

/// Format seconds per kilometer as `M:SS/km`
#[must_use]
pub fn format_pace(seconds_per_km: u32) -> String {
    let minutes = seconds_per_km / SECONDS_PER_MINUTE;
    let seconds = seconds_per_km % SECONDS_PER_MINUTE;
    format!("{minutes}:{seconds:02}/km")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_paces() -> TrainingPaces {
        TrainingPaces {
            easy_min: 344,
            easy_max: 309,
            marathon: 291,
            threshold: 274,
            interval: 247,
            repetition: 221,
        }
    }

    #[test]
    fn test_format_pace_pads_seconds() {
        assert_eq!(format_pace(309), "5:09/km");
        assert_eq!(format_pace(240), "4:00/km");
        assert_eq!(format_pace(59), "0:59/km");
    }

    #[test]
    fn test_easy_range_puts_fast_bound_first() {
        assert_eq!(sample_paces().easy_range_text(), "5:09/km-5:44/km");
    }

    #[test]
    fn test_zones_listed_slowest_first() {
        let zones = sample_paces().zones();
        assert_eq!(zones.len(), 5);
        assert_eq!(zones[0].0, PaceZone::Easy);
        assert_eq!(zones[4], (PaceZone::Repetition, "3:41/km".to_owned()));
    }

    #[test]
    fn test_ordering_check() {
        assert!(sample_paces().is_ordered());
        let swapped = TrainingPaces {
            easy_min: 300,
            ..sample_paces()
        };
        assert!(!swapped.is_ordered());
    }

    #[test]
    fn test_factor_scaling() {
        let scaled = AdjustmentFactors::IDENTITY.scaled_by(AdjustmentFactors {
            pace: 1.05,
            volume: 0.5,
            intensity: 1.0,
        });
        assert!((scaled.pace - 1.05).abs() < 1e-12);
        assert!((scaled.volume - 0.5).abs() < 1e-12);
        assert!((scaled.intensity - 1.0).abs() < 1e-12);
    }
}
