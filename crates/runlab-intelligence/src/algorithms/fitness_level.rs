// ABOUTME: Display-only fitness summary derived from the raw VDOT estimate
// ABOUTME: Applies the female display factor, classifies performance level and estimates VO2max
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::round_to_tenth;
use crate::config::DisplayConfig;
use crate::physiological_constants::performance_levels;
use runlab_core::models::{FitnessSummary, Gender, PerformanceLevel};

const FEMALE_ADJUSTMENT_NOTE: &str = "Female adjustment applied";

/// Classify a display VDOT on the fixed threshold ladder
#[must_use]
pub fn classify_level(display_vdot: f64) -> PerformanceLevel {
    if display_vdot >= performance_levels::ELITE {
        PerformanceLevel::Elite
    } else if display_vdot >= performance_levels::SUB_ELITE {
        PerformanceLevel::SubElite
    } else if display_vdot >= performance_levels::ADVANCED {
        PerformanceLevel::Advanced
    } else if display_vdot >= performance_levels::INTERMEDIATE {
        PerformanceLevel::Intermediate
    } else if display_vdot >= performance_levels::BEGINNER {
        PerformanceLevel::Beginner
    } else {
        PerformanceLevel::Novice
    }
}

/// Build the display summary for a raw VDOT with the default factors
///
/// The female factor here only changes what is shown. Paces are always
/// computed from the raw `vdot`, which is carried through unchanged.
#[must_use]
pub fn summarize(vdot: f64, gender: Gender) -> FitnessSummary {
    summarize_with(vdot, gender, &DisplayConfig::default())
}

/// Build the display summary with explicit display factors
#[must_use]
pub fn summarize_with(vdot: f64, gender: Gender, factors: &DisplayConfig) -> FitnessSummary {
    let (display_vdot, adjustment_note) = match gender {
        Gender::Female => (
            vdot * factors.female_display_factor,
            Some(FEMALE_ADJUSTMENT_NOTE.to_owned()),
        ),
        Gender::Male => (vdot, None),
    };

    FitnessSummary {
        vdot,
        display_vdot: round_to_tenth(display_vdot),
        performance_level: classify_level(display_vdot),
        vo2max: round_to_tenth(display_vdot * factors.vo2max_factor),
        adjustment_note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ladder_boundaries() {
        assert_eq!(classify_level(75.0), PerformanceLevel::Elite);
        assert_eq!(classify_level(74.9), PerformanceLevel::SubElite);
        assert_eq!(classify_level(65.0), PerformanceLevel::SubElite);
        assert_eq!(classify_level(55.0), PerformanceLevel::Advanced);
        assert_eq!(classify_level(45.0), PerformanceLevel::Intermediate);
        assert_eq!(classify_level(35.0), PerformanceLevel::Beginner);
        assert_eq!(classify_level(34.9), PerformanceLevel::Novice);
    }

    #[test]
    fn test_male_summary_keeps_vdot() {
        let summary = summarize(48.9, Gender::Male);
        assert!((summary.display_vdot - 48.9).abs() < 1e-9);
        assert_eq!(summary.performance_level, PerformanceLevel::Intermediate);
        assert!((summary.vo2max - 51.3).abs() < 1e-9);
        assert!(summary.adjustment_note.is_none());
    }

    #[test]
    fn test_female_summary_is_display_only() {
        let summary = summarize(52.0, Gender::Female);
        // 52 * 0.88 = 45.76
        assert!((summary.vdot - 52.0).abs() < f64::EPSILON);
        assert!((summary.display_vdot - 45.8).abs() < 1e-9);
        assert_eq!(summary.performance_level, PerformanceLevel::Intermediate);
        // 45.76 * 1.05 = 48.048
        assert!((summary.vo2max - 48.0).abs() < 1e-9);
        assert_eq!(
            summary.adjustment_note.as_deref(),
            Some("Female adjustment applied")
        );
    }

    #[test]
    fn test_custom_factors_change_display() {
        let factors = DisplayConfig {
            female_display_factor: 0.9,
            vo2max_factor: 1.0,
        };
        let summary = summarize_with(50.0, Gender::Female, &factors);
        assert!((summary.display_vdot - 45.0).abs() < 1e-9);
        assert!((summary.vo2max - 45.0).abs() < 1e-9);
        assert_eq!(summary.performance_level, PerformanceLevel::Intermediate);

        let male = summarize_with(50.0, Gender::Male, &factors);
        assert!((male.display_vdot - 50.0).abs() < 1e-9);
        assert!((male.vo2max - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_level_uses_unrounded_display_value() {
        // 51.1 * 0.88 = 44.968, rounds to 45.0 for display but stays a beginner
        let summary = summarize(51.1, Gender::Female);
        assert!((summary.display_vdot - 45.0).abs() < 1e-9);
        assert_eq!(summary.performance_level, PerformanceLevel::Beginner);
    }
}
