// ABOUTME: Calibration data and physiological constants for the pace engine
// ABOUTME: VDOT anchor tables per distance, zone constants, display factors and level thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on Jack Daniels' running formula
//!
//! References:
//! - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.

/// VDOT calibration anchors
///
/// For every calibrated distance, twelve `(VDOT, finish time)` pairs sorted
/// by ascending VDOT (and therefore strictly descending time).
pub mod vdot_calibration {
    use runlab_core::models::RaceDistance;

    /// A reference point of the calibration table
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Anchor {
        /// VDOT value of the anchor
        pub vdot: f64,
        /// Expected finish time in seconds at that VDOT
        pub time_seconds: f64,
    }

    const fn anchor(vdot: f64, time_seconds: f64) -> Anchor {
        Anchor { vdot, time_seconds }
    }

    /// Lowest calibrated VDOT
    pub const MIN_VDOT: f64 = 30.0;

    /// Highest calibrated VDOT
    pub const MAX_VDOT: f64 = 85.0;

    /// 800 m anchors
    pub const M800: [Anchor; 12] = [
        anchor(30.0, 316.0),
        anchor(35.0, 279.0),
        anchor(40.0, 249.0),
        anchor(45.0, 224.0),
        anchor(50.0, 203.0),
        anchor(55.0, 185.0),
        anchor(60.0, 169.0),
        anchor(65.0, 155.0),
        anchor(70.0, 143.0),
        anchor(75.0, 132.0),
        anchor(80.0, 122.0),
        anchor(85.0, 113.0),
    ];

    /// 1500 m anchors
    pub const M1500: [Anchor; 12] = [
        anchor(30.0, 681.0),
        anchor(35.0, 598.0),
        anchor(40.0, 532.0),
        anchor(45.0, 477.0),
        anchor(50.0, 431.0),
        anchor(55.0, 392.0),
        anchor(60.0, 357.0),
        anchor(65.0, 327.0),
        anchor(70.0, 301.0),
        anchor(75.0, 277.0),
        anchor(80.0, 256.0),
        anchor(85.0, 237.0),
    ];

    /// 3000 m anchors
    pub const M3000: [Anchor; 12] = [
        anchor(30.0, 1_520.0),
        anchor(35.0, 1_330.0),
        anchor(40.0, 1_178.0),
        anchor(45.0, 1_053.0),
        anchor(50.0, 948.0),
        anchor(55.0, 859.0),
        anchor(60.0, 781.0),
        anchor(65.0, 713.0),
        anchor(70.0, 654.0),
        anchor(75.0, 601.0),
        anchor(80.0, 554.0),
        anchor(85.0, 512.0),
    ];

    /// 5000 m anchors
    pub const M5000: [Anchor; 12] = [
        anchor(30.0, 2_680.0),
        anchor(35.0, 2_340.0),
        anchor(40.0, 2_070.0),
        anchor(45.0, 1_845.0),
        anchor(50.0, 1_658.0),
        anchor(55.0, 1_500.0),
        anchor(60.0, 1_362.0),
        anchor(65.0, 1_242.0),
        anchor(70.0, 1_137.0),
        anchor(75.0, 1_044.0),
        anchor(80.0, 961.0),
        anchor(85.0, 888.0),
    ];

    /// 10000 m anchors
    pub const M10000: [Anchor; 12] = [
        anchor(30.0, 5_560.0),
        anchor(35.0, 4_860.0),
        anchor(40.0, 4_290.0),
        anchor(45.0, 3_825.0),
        anchor(50.0, 3_435.0),
        anchor(55.0, 3_105.0),
        anchor(60.0, 2_820.0),
        anchor(65.0, 2_565.0),
        anchor(70.0, 2_346.0),
        anchor(75.0, 2_154.0),
        anchor(80.0, 1_983.0),
        anchor(85.0, 1_830.0),
    ];

    /// Half marathon anchors
    pub const HALF_MARATHON: [Anchor; 12] = [
        anchor(30.0, 12_240.0),
        anchor(35.0, 10_680.0),
        anchor(40.0, 9_420.0),
        anchor(45.0, 8_400.0),
        anchor(50.0, 7_530.0),
        anchor(55.0, 6_810.0),
        anchor(60.0, 6_180.0),
        anchor(65.0, 5_625.0),
        anchor(70.0, 5_145.0),
        anchor(75.0, 4_725.0),
        anchor(80.0, 4_350.0),
        anchor(85.0, 4_020.0),
    ];

    /// Marathon anchors
    pub const MARATHON: [Anchor; 12] = [
        anchor(30.0, 25_380.0),
        anchor(35.0, 22_140.0),
        anchor(40.0, 19_500.0),
        anchor(45.0, 17_400.0),
        anchor(50.0, 15_600.0),
        anchor(55.0, 14_100.0),
        anchor(60.0, 12_780.0),
        anchor(65.0, 11_625.0),
        anchor(70.0, 10_620.0),
        anchor(75.0, 9_750.0),
        anchor(80.0, 8_970.0),
        anchor(85.0, 8_280.0),
    ];

    /// Anchors for a calibrated distance
    #[must_use]
    pub const fn anchors(distance: RaceDistance) -> &'static [Anchor; 12] {
        match distance {
            RaceDistance::M800 => &M800,
            RaceDistance::M1500 => &M1500,
            RaceDistance::M3000 => &M3000,
            RaceDistance::M5000 => &M5000,
            RaceDistance::M10000 => &M10000,
            RaceDistance::HalfMarathon => &HALF_MARATHON,
            RaceDistance::Marathon => &MARATHON,
        }
    }
}

/// Pace zone calibration
///
/// `pace = round((VDOT_SCALE / vdot) * zone_constant * pace_factor)` seconds per km.
pub mod pace_zones {
    /// Numerator converting VDOT into a base pace scale
    pub const VDOT_SCALE: f64 = 180.0;
    /// Fastest easy pace constant
    pub const EASY_FAST: f64 = 175.0;
    /// Slowest easy pace constant
    pub const EASY_SLOW: f64 = 195.0;
    /// Marathon pace constant
    pub const MARATHON: f64 = 165.0;
    /// Threshold pace constant
    pub const THRESHOLD: f64 = 155.0;
    /// Interval pace constant
    pub const INTERVAL: f64 = 140.0;
    /// Repetition pace constant
    pub const REPETITION: f64 = 125.0;
    /// Smallest pace factor the generator honors; lower factors are raised to it
    pub const MIN_PACE_FACTOR: f64 = 0.5;
    /// Largest pace factor the generator honors; higher factors are lowered to it
    pub const MAX_PACE_FACTOR: f64 = 2.0;
    /// Upper bound for the scale and every zone constant
    pub const MAX_CONSTANT: f64 = 1_000.0;
}

/// Display-only adjustments
///
/// These never feed pace computation.
pub mod display {
    /// Multiplier applied to VDOT for female athletes when classifying level
    pub const FEMALE_VDOT_FACTOR: f64 = 0.88;
    /// Multiplier converting display VDOT into an estimated `VO2max`
    pub const VO2MAX_FACTOR: f64 = 1.05;
}

/// Performance level thresholds on the display VDOT
pub mod performance_levels {
    /// Elite threshold
    pub const ELITE: f64 = 75.0;
    /// Sub-elite threshold
    pub const SUB_ELITE: f64 = 65.0;
    /// Advanced threshold
    pub const ADVANCED: f64 = 55.0;
    /// Intermediate threshold
    pub const INTERMEDIATE: f64 = 45.0;
    /// Beginner threshold
    pub const BEGINNER: f64 = 35.0;
}

/// Plan transformation constants
pub mod periodization {
    /// Duration scale applied to every number in a taper week
    pub const TAPER_DURATION_SCALE: f64 = 0.6;
}
