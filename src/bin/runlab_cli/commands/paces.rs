// ABOUTME: Pace table command for runlab-cli
// ABOUTME: Computes the zone table for a given VDOT and pace factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlab::algorithms::PaceZoneCalculator;
use runlab::config::EngineConfig;
use runlab::errors::{AppError, AppResult};
use runlab::formatters::OutputFormat;
use runlab::physiological_constants::pace_zones::{MAX_PACE_FACTOR, MIN_PACE_FACTOR};
use runlab::physiological_constants::vdot_calibration::{MAX_VDOT, MIN_VDOT};
use tracing::info;

use crate::helpers::display::print_report;

type Result<T> = AppResult<T>;

/// Print the pace zone table
pub fn run(vdot: f64, pace_factor: f64, format: OutputFormat, config: &EngineConfig) -> Result<()> {
    if !(MIN_VDOT..=MAX_VDOT).contains(&vdot) {
        return Err(AppError::invalid_input(format!(
            "VDOT must be between {MIN_VDOT} and {MAX_VDOT}, got {vdot}"
        )));
    }
    if !(MIN_PACE_FACTOR..=MAX_PACE_FACTOR).contains(&pace_factor) {
        return Err(AppError::invalid_input(format!(
            "Pace factor must be between {MIN_PACE_FACTOR} and {MAX_PACE_FACTOR}, got {pace_factor}"
        )));
    }

    info!(vdot, pace_factor, "Computing pace table");
    let paces = PaceZoneCalculator::new(config.pace_zones).compute(vdot, pace_factor);
    print_report(&paces, format)
}
