// ABOUTME: Batch command for runlab-cli
// ABOUTME: Reads a JSON array of requests, evaluates them in parallel, prints per-request outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlab::config::EngineConfig;
use runlab::errors::{AppError, AppResult};
use runlab::formatters::{BatchReport, OutputFormat};
use runlab::logging::RunLogger;
use runlab::{run_batch, PipelineRequest};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::helpers::display::print_report;

type Result<T> = AppResult<T>;

/// Run every request in `input` and print the report
///
/// Individual validation failures are part of the report, not an error.
pub fn run(input: &Path, format: OutputFormat, config: &EngineConfig) -> Result<()> {
    let requests = load_requests(input)?;
    info!("Running {} requests from {}", requests.len(), input.display());

    let started = Instant::now();
    let report = BatchReport::from_results(run_batch(&config.pipeline(), &requests));
    let failed = report.failed();
    RunLogger::log_batch(report.0.len(), failed, started.elapsed().as_micros());

    if failed > 0 {
        warn!("{failed} of {} requests failed validation", report.0.len());
    }

    print_report(&report, format)
}

fn load_requests(input: &Path) -> Result<Vec<PipelineRequest>> {
    let contents = fs::read_to_string(input).map_err(|e| {
        AppError::io(format!("Failed to read {}: {e}", input.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&contents)?)
}
