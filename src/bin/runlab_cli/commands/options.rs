// ABOUTME: Options command for runlab-cli
// ABOUTME: Prints every accepted input value and the calibration in effect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlab::config::EngineConfig;
use runlab::errors::AppResult;
use runlab::formatters::OutputFormat;
use runlab::options::OptionsCatalog;

use crate::helpers::display::print_report;

/// List the option catalog
pub fn run(format: OutputFormat, config: &EngineConfig) -> AppResult<()> {
    print_report(&OptionsCatalog::new(*config), format)
}
