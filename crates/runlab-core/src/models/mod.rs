// ABOUTME: Core data models for the Runlab training engine
// ABOUTME: Re-exports sample, athlete, pace, plan and fitness summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every model here is plain data: created from user input or produced by the
//! engine, never mutated after being handed to the next stage.

mod athlete;
mod fitness;
mod performance;
mod plan;
mod training;

pub use athlete::{
    AgeGroup, AthleteProfile, Conditions, Experience, Gender, TrainingCondition,
    TrainingFrequency, TrainingPhase, WeeklyVolume,
};
pub use fitness::{FitnessSummary, PerformanceLevel};
pub use performance::{PerformanceSample, RaceDistance, TimeInput};
pub use plan::{
    DayPlan, IntensityClass, Mesocycle, RecommendationBlock, RecommendationKind, WeekPlan,
    WeeklyPlan, Weekday, WorkoutArchetype, WorkoutSet, WorkoutTemplate,
};
pub use training::{format_pace, AdjustmentFactors, PaceZone, TrainingPaces};
