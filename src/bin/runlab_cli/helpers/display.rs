// ABOUTME: Output helpers for runlab-cli
// ABOUTME: Renders a report in the chosen format and prints it to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlab::errors::AppResult;
use runlab::formatters::{format_output, OutputFormat, TextReport};
use serde::Serialize;

/// Print a report to stdout
pub fn print_report<T: Serialize + TextReport>(data: &T, format: OutputFormat) -> AppResult<()> {
    let rendered = format_output(data, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
