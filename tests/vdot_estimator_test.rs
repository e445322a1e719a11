// ABOUTME: Integration tests for the table-driven VDOT estimator
// ABOUTME: Covers interpolation, exact anchors, clamping and time validation across distances
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::assert_close;
use runlab::algorithms::{estimate_vdot, CalibrationPosition, VdotEstimator};
use runlab::errors::ValidationField;
use runlab::models::RaceDistance;
use runlab_intelligence::physiological_constants::vdot_calibration::{anchors, MAX_VDOT, MIN_VDOT};

#[test]
fn test_five_k_worked_example() {
    common::init_test_logging();
    // 45 + 5 * 145 / 187 = 48.877...
    assert_close(estimate_vdot(RaceDistance::M5000, 1_700.0).unwrap(), 48.9);
}

#[test]
fn test_fast_five_k_brackets_between_65_and_70() {
    // 1200 s lies between the VDOT 65 (1242 s) and VDOT 70 (1137 s) anchors
    let estimate = VdotEstimator::estimate_detailed(RaceDistance::M5000, 1_200.0).unwrap();
    assert_close(estimate.vdot, 67.0);
    assert_eq!(
        estimate.position,
        CalibrationPosition::Interpolated {
            lower_vdot: 65.0,
            upper_vdot: 70.0
        }
    );
}

#[test]
fn test_every_anchor_maps_to_its_own_vdot() {
    for distance in RaceDistance::ALL {
        for anchor in anchors(distance) {
            let vdot = estimate_vdot(distance, anchor.time_seconds).unwrap();
            assert_close(vdot, anchor.vdot);
        }
    }
}

#[test]
fn test_results_stay_within_calibrated_range() {
    for distance in RaceDistance::ALL {
        let table = anchors(distance);
        let slowest = table[0].time_seconds;
        let fastest = table[table.len() - 1].time_seconds;

        let slow = VdotEstimator::estimate_detailed(distance, slowest * 2.0).unwrap();
        assert_close(slow.vdot, MIN_VDOT);
        assert_eq!(slow.position, CalibrationPosition::BelowRange);

        let fast = VdotEstimator::estimate_detailed(distance, fastest / 2.0).unwrap();
        assert_close(fast.vdot, MAX_VDOT);
        assert_eq!(fast.position, CalibrationPosition::AboveRange);
    }
}

#[test]
fn test_marathon_midpoint() {
    let table = anchors(RaceDistance::Marathon);
    let midpoint = (table[4].time_seconds + table[5].time_seconds) / 2.0;
    let vdot = estimate_vdot(RaceDistance::Marathon, midpoint).unwrap();
    assert_close(vdot, (table[4].vdot + table[5].vdot) / 2.0);
}

#[test]
fn test_rejects_non_positive_and_non_finite_times() {
    for time in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let error = estimate_vdot(RaceDistance::M1500, time).unwrap_err();
        assert_eq!(error.field, ValidationField::Time);
    }
}
