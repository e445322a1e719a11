// ABOUTME: Output format abstraction for rendering engine results as JSON or plain text
// ABOUTME: JSON via serde for machines, a line-oriented text report for terminals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output formatting
//!
//! Every printable value implements [`TextReport`] and `Serialize`;
//! [`format_output`] picks the renderer.

use runlab_core::errors::{AppError, ValidationError};
use runlab_core::models::{
    format_pace, AdjustmentFactors, DayPlan, FitnessSummary, RecommendationBlock, TrainingPaces,
    WeekPlan, WorkoutTemplate,
};
use runlab_intelligence::FullResult;
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// Human-readable text report
    Text,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format: '{other}'. Valid options: json, text"
            ))),
        }
    }
}

/// Plain-text rendering of a value
pub trait TextReport {
    /// Render as a multi-line report
    fn render_text(&self) -> String;
}

/// Render `data` in the requested format
///
/// # Errors
///
/// Returns `AppError` with `SerializationError` if JSON serialization fails
pub fn format_output<T: Serialize + TextReport>(
    data: &T,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(data.render_text()),
    }
}

/// Outcome of one batch request, keyed by its position in the input
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// Zero-based index in the input file
    pub index: usize,
    /// Result or validation failure
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

/// Result or validation failure of a batch request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    /// Computation succeeded
    Result(Box<FullResult>),
    /// First validation failure
    Error(ValidationError),
}

/// Batch results in input order
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct BatchReport(pub Vec<BatchEntry>);

impl BatchReport {
    /// Pair results with their input positions
    #[must_use]
    pub fn from_results(results: Vec<Result<FullResult, ValidationError>>) -> Self {
        Self(
            results
                .into_iter()
                .enumerate()
                .map(|(index, result)| BatchEntry {
                    index,
                    outcome: match result {
                        Ok(full) => BatchOutcome::Result(Box::new(full)),
                        Err(error) => BatchOutcome::Error(error),
                    },
                })
                .collect(),
        )
    }

    /// Number of failed requests
    #[must_use]
    pub fn failed(&self) -> usize {
        self.0
            .iter()
            .filter(|entry| matches!(entry.outcome, BatchOutcome::Error(_)))
            .count()
    }
}

fn write_summary(output: &mut String, summary: &FitnessSummary) {
    let _ = writeln!(output, "Fitness");
    let _ = writeln!(output, "  VDOT: {:.1}", summary.vdot);
    let _ = writeln!(
        output,
        "  Level: {} (display VDOT {:.1})",
        summary.performance_level, summary.display_vdot
    );
    let _ = writeln!(output, "  Estimated VO2max: {:.1} ml/kg/min", summary.vo2max);
    if let Some(note) = &summary.adjustment_note {
        let _ = writeln!(output, "  Note: {note}");
    }
}

fn write_adjustments(output: &mut String, factors: &AdjustmentFactors) {
    let _ = writeln!(output, "Adjustments");
    let _ = writeln!(
        output,
        "  pace x{:.3}  volume x{:.3}  intensity x{:.3}",
        factors.pace, factors.volume, factors.intensity
    );
}

fn write_paces(output: &mut String, paces: &TrainingPaces) {
    let _ = writeln!(output, "Pace zones");
    for (zone, pace) in paces.zones() {
        let _ = writeln!(output, "  {:<16} {:<18} {}", zone.name(), pace, zone.purpose());
    }
}

fn one_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" / ")
}

fn write_week(output: &mut String, days: &[DayPlan]) {
    let _ = writeln!(output, "Weekly plan");
    for day in days {
        let _ = writeln!(
            output,
            "  {}  {:<24} {:<7} {:<22} {}",
            day.day,
            one_line(&day.workout_type),
            day.intensity.as_str(),
            one_line(&day.duration),
            day.description
        );
    }
}

fn write_mesocycle(output: &mut String, weeks: &[WeekPlan]) {
    let _ = writeln!(output, "Meso-cycle");
    for week in weeks {
        let _ = writeln!(
            output,
            "  {}  {} ({}): {}",
            week.week_label, week.focus, week.volume_label, week.key_workout
        );
    }
}

fn write_workouts(output: &mut String, workouts: &[WorkoutTemplate]) {
    let _ = writeln!(output, "Key workouts");
    for workout in workouts {
        let _ = writeln!(output, "  {} @ {}", workout.title, workout.pace);
        let _ = writeln!(output, "    Warm-up:   {}", workout.warmup);
        let _ = writeln!(output, "    Main:      {}", workout.main);
        let _ = writeln!(output, "    Cool-down: {}", workout.cooldown);
        let _ = writeln!(output, "    Tips:      {}", workout.tips);
    }
}

fn write_recommendations(output: &mut String, blocks: &[RecommendationBlock]) {
    let _ = writeln!(output, "Recommendations");
    for block in blocks {
        let _ = writeln!(output, "  {}", block.title);
        for item in &block.items {
            let _ = writeln!(output, "    - {item}");
        }
    }
}

impl TextReport for FullResult {
    fn render_text(&self) -> String {
        let mut output = String::new();
        write_summary(&mut output, &self.summary);
        output.push('\n');
        write_adjustments(&mut output, &self.adjustments);
        output.push('\n');
        write_paces(&mut output, &self.paces);
        output.push('\n');
        write_week(&mut output, &self.weekly_plan);
        output.push('\n');
        write_mesocycle(&mut output, &self.mesocycle);
        output.push('\n');
        write_workouts(&mut output, &self.workouts);
        output.push('\n');
        write_recommendations(&mut output, &self.recommendations);
        output
    }
}

impl TextReport for TrainingPaces {
    fn render_text(&self) -> String {
        let mut output = String::new();
        write_paces(&mut output, self);
        for (label, seconds) in [
            ("easy (slow)", self.easy_min),
            ("easy (fast)", self.easy_max),
            ("marathon", self.marathon),
            ("threshold", self.threshold),
            ("interval", self.interval),
            ("repetition", self.repetition),
        ] {
            let _ = writeln!(output, "  {label:<12} {seconds:>5} s/km  {}", format_pace(seconds));
        }
        output
    }
}

impl TextReport for BatchReport {
    fn render_text(&self) -> String {
        let mut output = String::new();
        for entry in &self.0 {
            match &entry.outcome {
                BatchOutcome::Result(result) => {
                    let _ = writeln!(
                        output,
                        "#{} VDOT {:.1} ({}), threshold {}",
                        entry.index,
                        result.summary.vdot,
                        result.summary.performance_level,
                        format_pace(result.paces.threshold)
                    );
                }
                BatchOutcome::Error(error) => {
                    let _ = writeln!(
                        output,
                        "#{} error ({}): {}",
                        entry.index, error.field, error.message
                    );
                }
            }
        }
        let _ = writeln!(output, "{} requests, {} failed", self.0.len(), self.failed());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runlab_core::models::{AthleteProfile, Conditions, Gender, PerformanceSample, RaceDistance};
    use runlab_intelligence::run_pipeline;

    fn sample_result() -> FullResult {
        let profile = AthleteProfile {
            gender: Some(Gender::Female),
            ..AthleteProfile::default()
        };
        run_pipeline(
            &PerformanceSample::new(RaceDistance::M5000, 1_700.0),
            &profile,
            &Conditions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("toon".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_report_sections() {
        let text = format_output(&sample_result(), OutputFormat::Text).unwrap();
        for heading in [
            "Fitness",
            "Adjustments",
            "Pace zones",
            "Weekly plan",
            "Meso-cycle",
            "Key workouts",
            "Recommendations",
        ] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Note: Female adjustment applied"));
        assert!(text.trim_end().ends_with("- Electrolytes: 300-700 mg sodium per hour"));
    }

    #[test]
    fn test_json_output_structure() {
        let json = format_output(&sample_result(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["weekly_plan"].as_array().map(Vec::len), Some(7));
        assert_eq!(value["mesocycle"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["summary"]["performance_level"], "beginner");
        assert_eq!(value["recommendations"][1]["kind"], "nutrition");
    }

    #[test]
    fn test_batch_report_counts_failures() {
        let error = ValidationError::missing_gender();
        let report = BatchReport::from_results(vec![Ok(sample_result()), Err(error)]);
        assert_eq!(report.failed(), 1);
        let text = report.render_text();
        assert!(text.contains("#1 error (gender): Select a gender."));
        assert!(text.contains("2 requests, 1 failed"));
    }
}
