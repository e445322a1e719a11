// ABOUTME: Training pace engine: VDOT estimation, adjustments, pace zones and plan generation
// ABOUTME: Pure, synchronous computation over runlab-core models with a rayon batch runner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlab Intelligence
//!
//! The four engine components, composed by [`pipeline::TrainingPipeline`]:
//!
//! 1. **VDOT estimator**: race result to fitness index ([`algorithms::vdot`])
//! 2. **Adjustment calculator**: profile and conditions to pace, volume and
//!    intensity factors ([`algorithms::adjustments`])
//! 3. **Pace zone generator**: raw VDOT and pace factor to five zones
//!    ([`algorithms::pace_zones`])
//! 4. **Plan generator**: weekly micro-cycle, meso-cycle, workouts and
//!    recommendations ([`training_plan`], [`recommendation_engine`])
//!
//! Every function is deterministic and free of shared state, so calls can run
//! concurrently without coordination.

/// Core algorithms
pub mod algorithms;

/// Parallel batch evaluation
pub mod batch;

/// Zone calibration and display configuration
pub mod config;

/// Calibration tables and physiological constants
pub mod physiological_constants;

/// Validating orchestrator
pub mod pipeline;

/// Contextual recommendation blocks
pub mod recommendation_engine;

/// Weekly, meso-cycle and workout generators
pub mod training_plan;

pub use algorithms::{compute_adjustments, compute_paces, estimate_vdot, summarize};
pub use batch::{run_batch, PipelineRequest};
pub use config::{DisplayConfig, PaceZoneConfig};
pub use pipeline::{run_pipeline, FullResult, TrainingPipeline};
pub use recommendation_engine::generate_recommendations;
pub use training_plan::{generate_mesocycle, generate_weekly_plan, generate_workouts};
