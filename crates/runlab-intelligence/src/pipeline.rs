// ABOUTME: Single-shot training pipeline validating input and composing all engine components
// ABOUTME: Validation order is distance, time, gender; only the first failure is reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::{compute_adjustments, summarize_with, PaceZoneCalculator, VdotEstimator};
use crate::config::{DisplayConfig, PaceZoneConfig};
use crate::physiological_constants::display;
use crate::recommendation_engine::generate_recommendations;
use crate::training_plan::{generate_mesocycle, generate_weekly_plan, generate_workouts};
use runlab_core::errors::ValidationError;
use runlab_core::models::{
    AdjustmentFactors, AthleteProfile, Conditions, FitnessSummary, Gender, Mesocycle,
    PerformanceSample, RaceDistance, RecommendationBlock, TrainingPaces, WeeklyPlan, WorkoutSet,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the engine derives from one performance sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullResult {
    /// Display summary (VDOT, level, `VO2max`)
    pub summary: FitnessSummary,
    /// Combined adjustment factors
    pub adjustments: AdjustmentFactors,
    /// Pace zones from the raw VDOT and the pace factor
    pub paces: TrainingPaces,
    /// Seven-day micro-cycle
    pub weekly_plan: WeeklyPlan,
    /// Four-week meso-cycle
    pub mesocycle: Mesocycle,
    /// Key workouts
    pub workouts: WorkoutSet,
    /// Recommendation blocks, nutrition last
    pub recommendations: Vec<RecommendationBlock>,
}

/// Stateless orchestrator over a zone calibration and display factors
///
/// Cheap to copy and safe to share across threads; `run` never mutates it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingPipeline {
    paces: PaceZoneCalculator,
    display: DisplayConfig,
}

impl TrainingPipeline {
    /// Pipeline with the default calibration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with an explicit, already validated calibration
    #[must_use]
    pub const fn with_config(config: PaceZoneConfig) -> Self {
        Self {
            paces: PaceZoneCalculator::new(config),
            display: DisplayConfig {
                female_display_factor: display::FEMALE_VDOT_FACTOR,
                vo2max_factor: display::VO2MAX_FACTOR,
            },
        }
    }

    /// Replace the display factors with an already validated set
    #[must_use]
    pub const fn with_display(self, display: DisplayConfig) -> Self {
        Self {
            paces: self.paces,
            display,
        }
    }

    /// Calibration in use
    #[must_use]
    pub const fn config(&self) -> &PaceZoneConfig {
        self.paces.config()
    }

    /// Display factors in use
    #[must_use]
    pub const fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Validate input and compute the full result
    ///
    /// # Errors
    ///
    /// Returns the first failing `ValidationError`, checked in the order
    /// distance, time, gender.
    pub fn run(
        &self,
        sample: &PerformanceSample,
        profile: &AthleteProfile,
        conditions: &Conditions,
    ) -> Result<FullResult, ValidationError> {
        let (distance, gender) = validate(sample, profile)?;

        let adjustments = compute_adjustments(profile, conditions);
        debug!(?adjustments, "Adjustments computed");

        // Input is validated above; the estimator's own checks are not repeated
        let vdot = VdotEstimator::locate(distance, sample.time_seconds).vdot;
        let summary = summarize_with(vdot, gender, &self.display);
        let paces = self.paces.compute(vdot, adjustments.pace);

        Ok(FullResult {
            summary,
            adjustments,
            weekly_plan: generate_weekly_plan(profile.frequency, profile.training_phase),
            mesocycle: generate_mesocycle(profile.training_phase),
            workouts: generate_workouts(profile.experience, &paces),
            recommendations: generate_recommendations(profile, conditions),
            paces,
        })
    }
}

fn validate(
    sample: &PerformanceSample,
    profile: &AthleteProfile,
) -> Result<(RaceDistance, Gender), ValidationError> {
    let distance = sample.distance.ok_or_else(ValidationError::missing_distance)?;

    if sample.time_seconds == 0.0 {
        return Err(ValidationError::missing_time());
    }
    if !sample.time_seconds.is_finite() || sample.time_seconds < 0.0 {
        return Err(ValidationError::invalid_time(sample.time_seconds));
    }

    let gender = profile.gender.ok_or_else(ValidationError::missing_gender)?;
    Ok((distance, gender))
}

/// Run the pipeline with the default calibration
///
/// # Errors
///
/// Returns the first failing `ValidationError` (distance, then time, then gender).
pub fn run_pipeline(
    sample: &PerformanceSample,
    profile: &AthleteProfile,
    conditions: &Conditions,
) -> Result<FullResult, ValidationError> {
    TrainingPipeline::new().run(sample, profile, conditions)
}
