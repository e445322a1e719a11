// ABOUTME: Property-based tests for engine invariants using proptest
// ABOUTME: Monotone VDOT, ordered zones, rule-order independence and complete plan structure
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use proptest::prelude::*;
use proptest::sample::select;
use runlab::algorithms::{
    compute_adjustments, compute_adjustments_with, compute_paces, estimate_vdot, ADJUSTMENT_RULES,
};
use runlab::models::{
    AgeGroup, AthleteProfile, Conditions, Experience, Gender, PerformanceSample, RaceDistance,
    RecommendationKind, TrainingFrequency, TrainingPhase, WeeklyVolume, Weekday,
};
use runlab::run_pipeline;

fn profile_strategy() -> impl Strategy<Value = AthleteProfile> {
    (
        select(Gender::ALL.to_vec()),
        select(AgeGroup::ALL.to_vec()),
        select(Experience::ALL.to_vec()),
        select(WeeklyVolume::ALL.to_vec()),
        select(TrainingFrequency::ALL.to_vec()),
        select(TrainingPhase::ALL.to_vec()),
    )
        .prop_map(
            |(gender, age_group, experience, weekly_volume, frequency, training_phase)| {
                AthleteProfile {
                    gender: Some(gender),
                    age_group,
                    experience,
                    weekly_volume,
                    frequency,
                    training_phase,
                }
            },
        )
}

fn conditions_strategy() -> impl Strategy<Value = Conditions> {
    any::<[bool; 6]>().prop_map(|flags| Conditions {
        injury_recovery: flags[0],
        high_fatigue: flags[1],
        altitude: flags[2],
        hot_weather: flags[3],
        weight_loss: flags[4],
        morning_only: flags[5],
    })
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
}

proptest! {
    #[test]
    fn vdot_never_increases_with_slower_time(
        distance in select(RaceDistance::ALL.to_vec()),
        faster in 60.0_f64..20_000.0,
        extra in 0.0_f64..5_000.0,
    ) {
        let fast_vdot = estimate_vdot(distance, faster).unwrap();
        let slow_vdot = estimate_vdot(distance, faster + extra).unwrap();
        prop_assert!(fast_vdot >= slow_vdot);
        prop_assert!((30.0..=85.0).contains(&fast_vdot));
    }

    #[test]
    fn zones_stay_ordered(
        vdot in 30.0_f64..=85.0,
        profile in profile_strategy(),
        conditions in conditions_strategy(),
    ) {
        let factors = compute_adjustments(&profile, &conditions);
        prop_assert!(factors.pace > 0.0);
        prop_assert!(factors.volume > 0.0);
        prop_assert!(factors.intensity > 0.0);
        prop_assert!(compute_paces(vdot, factors.pace).is_ordered());
    }

    #[test]
    fn zones_stay_ordered_for_any_positive_input(
        vdot in 1e-9_f64..1e9,
        pace_factor in 1e-9_f64..1e9,
    ) {
        let paces = compute_paces(vdot, pace_factor);
        prop_assert!(paces.is_ordered(), "vdot {} factor {}: {:?}", vdot, pace_factor, paces);
        prop_assert!(paces.easy_min < u32::MAX);
    }

    #[test]
    fn rule_order_does_not_matter(
        rules in Just(ADJUSTMENT_RULES.to_vec()).prop_shuffle(),
        profile in profile_strategy(),
        conditions in conditions_strategy(),
    ) {
        let reference = compute_adjustments(&profile, &conditions);
        let shuffled = compute_adjustments_with(&rules, &profile, &conditions);
        prop_assert!(relative_eq(reference.pace, shuffled.pace));
        prop_assert!(relative_eq(reference.volume, shuffled.volume));
        prop_assert!(relative_eq(reference.intensity, shuffled.intensity));
    }

    #[test]
    fn valid_input_yields_complete_result(
        distance in select(RaceDistance::ALL.to_vec()),
        time in 60.0_f64..20_000.0,
        profile in profile_strategy(),
        conditions in conditions_strategy(),
    ) {
        let sample = PerformanceSample::new(distance, time);
        let result = run_pipeline(&sample, &profile, &conditions).unwrap();

        let days: Vec<Weekday> = result.weekly_plan.iter().map(|day| day.day).collect();
        prop_assert_eq!(days, Weekday::ALL.to_vec());
        prop_assert_eq!(result.mesocycle.len(), 4);
        prop_assert_eq!(result.workouts.len(), 4);
        prop_assert_eq!(
            result.recommendations.last().map(|block| block.kind),
            Some(RecommendationKind::Nutrition)
        );
        prop_assert_eq!(
            result
                .recommendations
                .iter()
                .filter(|block| block.kind == RecommendationKind::Nutrition)
                .count(),
            1
        );
        prop_assert!(result.paces.is_ordered());
    }
}
