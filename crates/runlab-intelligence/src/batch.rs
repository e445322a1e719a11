// ABOUTME: Parallel batch evaluation of independent pipeline requests using rayon
// ABOUTME: Preserves input order; each result equals a sequential run of the same request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::pipeline::{FullResult, TrainingPipeline};
use rayon::prelude::*;
use runlab_core::errors::ValidationError;
use runlab_core::models::{AthleteProfile, Conditions, PerformanceSample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One pipeline invocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineRequest {
    /// Race performance
    pub sample: PerformanceSample,
    /// Athlete profile
    #[serde(default)]
    pub profile: AthleteProfile,
    /// Active conditions
    #[serde(default)]
    pub conditions: Conditions,
}

impl PipelineRequest {
    /// Evaluate the request on a pipeline
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` of the request.
    pub fn run(&self, pipeline: &TrainingPipeline) -> Result<FullResult, ValidationError> {
        pipeline.run(&self.sample, &self.profile, &self.conditions)
    }
}

/// Evaluate many requests in parallel, results in input order
#[must_use]
pub fn run_batch(
    pipeline: &TrainingPipeline,
    requests: &[PipelineRequest],
) -> Vec<Result<FullResult, ValidationError>> {
    debug!(requests = requests.len(), "Running pipeline batch");
    requests
        .par_iter()
        .map(|request| request.run(pipeline))
        .collect()
}
