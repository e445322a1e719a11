// ABOUTME: End-to-end tests for the validating training pipeline and the batch runner
// ABOUTME: Validation order, determinism, raw-VDOT paces, display summary and batch ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{assert_close, five_k_sample, hot_weather, masters_taper_profile, profile_with_gender};
use runlab::algorithms::compute_paces;
use runlab::errors::{AppError, ErrorCode, ValidationField};
use runlab::models::{
    AthleteProfile, Conditions, Gender, PerformanceLevel, PerformanceSample, RaceDistance,
    TimeInput,
};
use runlab::{run_batch, run_pipeline, PipelineRequest, TrainingPipeline};

#[test]
fn test_validation_reports_distance_first() {
    common::init_test_logging();
    let sample = PerformanceSample::from_time_input(None, TimeInput::default());
    let error = run_pipeline(&sample, &AthleteProfile::default(), &Conditions::default())
        .unwrap_err();
    assert_eq!(error.field, ValidationField::Distance);
    assert_eq!(error.message, "Select a race distance.");
}

#[test]
fn test_validation_reports_time_before_gender() {
    let sample = PerformanceSample::new(RaceDistance::M10000, 0.0);
    let error = run_pipeline(&sample, &AthleteProfile::default(), &Conditions::default())
        .unwrap_err();
    assert_eq!(error.field, ValidationField::Time);
    assert_eq!(error.message, "Enter a finish time.");

    let negative = PerformanceSample::new(RaceDistance::M10000, -5.0);
    let error = run_pipeline(&negative, &AthleteProfile::default(), &Conditions::default())
        .unwrap_err();
    assert_eq!(error.field, ValidationField::Time);
}

#[test]
fn test_validation_reports_gender_last() {
    let error = run_pipeline(&five_k_sample(), &AthleteProfile::default(), &Conditions::default())
        .unwrap_err();
    assert_eq!(error.field, ValidationField::Gender);

    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::MissingRequiredField);
    assert_eq!(app_error.message, "Select a gender.");
}

#[test]
fn test_time_input_feeds_pipeline() {
    let time: TimeInput = "28:20".parse().unwrap();
    let sample = PerformanceSample::from_time_input(Some(RaceDistance::M5000), time);
    let result = run_pipeline(
        &sample,
        &profile_with_gender(Gender::Male),
        &Conditions::default(),
    )
    .unwrap();
    assert_close(result.summary.vdot, 48.9);
    assert_eq!(result.summary.performance_level, PerformanceLevel::Intermediate);
    assert_eq!(result.summary.adjustment_note, None);
}

#[test]
fn test_female_summary_uses_display_vdot() {
    let result = run_pipeline(
        &five_k_sample(),
        &profile_with_gender(Gender::Female),
        &Conditions::default(),
    )
    .unwrap();
    assert_close(result.summary.vdot, 48.9);
    assert_eq!(result.summary.performance_level, PerformanceLevel::Beginner);
    assert_eq!(
        result.summary.adjustment_note.as_deref(),
        Some("Female adjustment applied")
    );
}

#[test]
fn test_paces_use_raw_vdot_and_pace_factor() {
    let result = run_pipeline(&five_k_sample(), &masters_taper_profile(), &hot_weather()).unwrap();
    assert_eq!(result.paces, compute_paces(48.9, result.adjustments.pace));
    assert_close(result.adjustments.volume, 0.315);
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = run_pipeline(&five_k_sample(), &masters_taper_profile(), &hot_weather()).unwrap();
    let second = run_pipeline(&five_k_sample(), &masters_taper_profile(), &hot_weather()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_batch_keeps_input_order() {
    let requests: Vec<PipelineRequest> = serde_json::from_str(
        r#"[
            {"sample": {"distance": "5000", "time_seconds": 1700.0}, "profile": {"gender": "male"}},
            {"sample": {"distance": "42195", "time_seconds": 0.0}, "profile": {"gender": "female"}},
            {"sample": {"distance": "10000", "time_seconds": 2400.0}}
        ]"#,
    )
    .unwrap();
    let pipeline = TrainingPipeline::new();
    let results = run_batch(&pipeline, &requests);

    assert_eq!(results.len(), 3);
    assert_close(results[0].as_ref().unwrap().summary.vdot, 48.9);
    assert_eq!(results[1].as_ref().unwrap_err().field, ValidationField::Time);
    assert_eq!(results[2].as_ref().unwrap_err().field, ValidationField::Gender);

    for (request, result) in requests.iter().zip(&results) {
        assert_eq!(&request.run(&pipeline), result);
    }
}

#[test]
fn test_batch_accepts_numeric_distances() {
    let requests: Vec<PipelineRequest> = serde_json::from_str(
        r#"[
            {"sample": {"distance": 5000, "time_seconds": 1700.0}, "profile": {"gender": "male"}},
            {"sample": {"distance": 21097.5, "time_seconds": 5400.0}, "profile": {"gender": "male"}}
        ]"#,
    )
    .unwrap();
    assert_eq!(requests[0].sample.distance, Some(RaceDistance::M5000));
    assert_eq!(requests[1].sample.distance, Some(RaceDistance::HalfMarathon));

    let results = run_batch(&TrainingPipeline::new(), &requests);
    assert_close(results[0].as_ref().unwrap().summary.vdot, 48.9);
    assert!(results[1].is_ok());
}

#[test]
fn test_batch_rejects_uncalibrated_numeric_distance() {
    let parsed = serde_json::from_str::<Vec<PipelineRequest>>(
        r#"[{"sample": {"distance": 400, "time_seconds": 60.0}}]"#,
    );
    let error = parsed.unwrap_err();
    assert!(error.to_string().contains("No calibration data for 400 meters"));
}
