// ABOUTME: Runlab CLI - compute VDOT, training paces and a training plan from a race result
// ABOUTME: Subcommands for single calculations, pace tables, JSON batches and option listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full prescription from a 5K in 20:00
//! runlab-cli calculate --distance 5000 --time 20:00 --gender male
//!
//! # Masters athlete in build phase, at altitude, as JSON
//! runlab-cli calculate --distance 10000 --time 45:30 --gender female \
//!     --age-group master40 --phase build --altitude --format json
//!
//! # Pace table for a known VDOT
//! runlab-cli paces --vdot 50
//!
//! # Many requests at once
//! runlab-cli batch --input requests.json
//!
//! # Every accepted option value
//! runlab-cli options
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use runlab::config::EngineConfig;
use runlab::errors::AppResult;
use runlab::formatters::OutputFormat;
use runlab::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "runlab-cli",
    about = "Runlab training prescription CLI",
    long_about = "Estimate VDOT from a race result and derive training paces, a weekly plan, a meso-cycle, key workouts and recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline for one race result
    Calculate(commands::calculate::CalculateArgs),

    /// Print the pace zone table for a VDOT
    Paces {
        /// VDOT fitness index
        #[arg(long)]
        vdot: f64,

        /// Combined pace factor (1.0 = no adjustment)
        #[arg(long, default_value_t = 1.0)]
        pace_factor: f64,

        /// Output format (text, json)
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run a JSON array of requests in parallel
    Batch {
        /// Path to a JSON file holding an array of requests
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output format (text, json)
        #[arg(long, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// List distances, profile options, conditions and calibration
    Options {
        /// Output format (text, json)
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e}");
    }

    info!("Runlab CLI");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.message);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    let config = EngineConfig::global();

    match command {
        Command::Calculate(args) => commands::calculate::run(&args, config),
        Command::Paces {
            vdot,
            pace_factor,
            format,
        } => commands::paces::run(vdot, pace_factor, format, config),
        Command::Batch { input, format } => commands::batch::run(&input, format, config),
        Command::Options { format } => commands::options::run(format, config),
    }
}
