// ABOUTME: Main library entry point for the Runlab training prescription engine
// ABOUTME: Wires configuration, logging and output formatting around the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlab
//!
//! Converts a single race result into a VDOT fitness index, individualized
//! training paces and a full training prescription: weekly micro-cycle,
//! four-week meso-cycle, key workouts and contextual recommendations.
//!
//! The computation lives in [`runlab_intelligence`]; this crate adds the
//! outer surface used by the `runlab-cli` binary.
//!
//! ## Example
//!
//! ```rust
//! use runlab::models::{AthleteProfile, Conditions, Gender, PerformanceSample, RaceDistance};
//! use runlab::run_pipeline;
//!
//! let profile = AthleteProfile {
//!     gender: Some(Gender::Male),
//!     ..AthleteProfile::default()
//! };
//! let sample = PerformanceSample::new(RaceDistance::M5000, 1_200.0);
//! let result = run_pipeline(&sample, &profile, &Conditions::default())?;
//! assert_eq!(result.weekly_plan.len(), 7);
//! # Ok::<(), runlab::errors::ValidationError>(())
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// JSON and text rendering of results
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Catalog of selectable inputs
pub mod options;

pub use runlab_core::{constants, errors, models};
pub use runlab_intelligence::{
    algorithms, batch, physiological_constants, pipeline, run_batch, run_pipeline, FullResult,
    PipelineRequest, TrainingPipeline,
};
