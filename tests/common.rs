// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and standard athlete fixtures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `runlab`

use runlab::models::{
    AgeGroup, AthleteProfile, Conditions, Experience, Gender, PerformanceSample, RaceDistance,
    TrainingFrequency, TrainingPhase,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile with only gender set
pub fn profile_with_gender(gender: Gender) -> AthleteProfile {
    AthleteProfile {
        gender: Some(gender),
        ..AthleteProfile::default()
    }
}

/// Female masters-50 beginner in taper, the reference adjustment case
pub fn masters_taper_profile() -> AthleteProfile {
    AthleteProfile {
        gender: Some(Gender::Female),
        age_group: AgeGroup::Master50,
        experience: Experience::Beginner,
        frequency: TrainingFrequency::FiveToSix,
        training_phase: TrainingPhase::Taper,
        ..AthleteProfile::default()
    }
}

/// Only hot weather active
pub fn hot_weather() -> Conditions {
    Conditions {
        hot_weather: true,
        ..Conditions::default()
    }
}

/// 5K in 28:20
pub fn five_k_sample() -> PerformanceSample {
    PerformanceSample::new(RaceDistance::M5000, 1_700.0)
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
