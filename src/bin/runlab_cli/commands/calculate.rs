// ABOUTME: Single calculation command for runlab-cli
// ABOUTME: Builds sample, profile and conditions from flags and runs the pipeline once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use runlab::config::EngineConfig;
use runlab::errors::AppResult;
use runlab::formatters::OutputFormat;
use runlab::logging::RunLogger;
use runlab::models::{
    AgeGroup, AthleteProfile, Conditions, Experience, Gender, PerformanceSample, RaceDistance,
    TimeInput, TrainingFrequency, TrainingPhase, WeeklyVolume,
};
use std::time::Instant;
use tracing::debug;

use crate::helpers::display::print_report;

type Result<T> = AppResult<T>;

/// Flags for `calculate`
///
/// Distance, time and gender stay optional here so the pipeline reports
/// the first missing one.
#[derive(Args)]
pub struct CalculateArgs {
    /// Race distance in meters (800, 1500, 3000, 5000, 10000, 21097.5, 42195)
    #[arg(long)]
    distance: Option<RaceDistance>,

    /// Finish time as h:mm:ss, mm:ss or seconds
    #[arg(long)]
    time: Option<TimeInput>,

    /// Gender (male, female)
    #[arg(long)]
    gender: Option<Gender>,

    /// Age group (junior, senior, master40, master50, master60)
    #[arg(long, default_value_t = AgeGroup::default())]
    age_group: AgeGroup,

    /// Experience (beginner, intermediate, advanced, elite)
    #[arg(long, default_value_t = Experience::default())]
    experience: Experience,

    /// Weekly volume (low, moderate, high, very-high)
    #[arg(long, default_value_t = WeeklyVolume::default())]
    weekly_volume: WeeklyVolume,

    /// Sessions per week (3-4, 5-6, 7, double)
    #[arg(long, default_value_t = TrainingFrequency::default())]
    frequency: TrainingFrequency,

    /// Training phase (base, build, peak, taper, recovery)
    #[arg(long, default_value_t = TrainingPhase::default())]
    phase: TrainingPhase,

    /// Returning from injury
    #[arg(long)]
    injury_recovery: bool,

    /// Carrying high fatigue
    #[arg(long)]
    high_fatigue: bool,

    /// Training at altitude
    #[arg(long)]
    altitude: bool,

    /// Training in hot weather
    #[arg(long)]
    hot_weather: bool,

    /// Weight loss goal
    #[arg(long)]
    weight_loss: bool,

    /// Morning sessions only
    #[arg(long)]
    morning_only: bool,

    /// Output format (text, json)
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl CalculateArgs {
    fn sample(&self) -> PerformanceSample {
        PerformanceSample::from_time_input(self.distance, self.time.unwrap_or_default())
    }

    fn profile(&self) -> AthleteProfile {
        AthleteProfile {
            gender: self.gender,
            age_group: self.age_group,
            experience: self.experience,
            weekly_volume: self.weekly_volume,
            frequency: self.frequency,
            training_phase: self.phase,
        }
    }

    const fn conditions(&self) -> Conditions {
        Conditions {
            injury_recovery: self.injury_recovery,
            high_fatigue: self.high_fatigue,
            altitude: self.altitude,
            hot_weather: self.hot_weather,
            weight_loss: self.weight_loss,
            morning_only: self.morning_only,
        }
    }
}

/// Run the pipeline for one race result and print the prescription
pub fn run(args: &CalculateArgs, config: &EngineConfig) -> Result<()> {
    let sample = args.sample();
    debug!(?sample, "Calculating prescription");

    let started = Instant::now();
    let result = config
        .pipeline()
        .run(&sample, &args.profile(), &args.conditions())?;

    RunLogger::log_calculation(
        sample.distance.map_or("unknown", RaceDistance::as_str),
        result.summary.vdot,
        started.elapsed().as_micros(),
    );

    print_report(&result, args.format)
}
