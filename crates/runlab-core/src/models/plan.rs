// ABOUTME: Training plan models: daily prescriptions, four-week blocks, workouts, recommendations
// ABOUTME: Fixed-size aliases encode the seven-day week and four-week meso-cycle structurally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the training week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
    /// Sunday
    Sun,
}

impl Weekday {
    /// Week in plan order
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Short label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse intensity of a training day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityClass {
    /// Easy aerobic running
    Low,
    /// Tempo or steady work
    Medium,
    /// Intervals or speed
    High,
    /// No running
    Rest,
}

impl IntensityClass {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Rest => "rest",
        }
    }
}

impl fmt::Display for IntensityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the weekly micro-cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day of the week
    pub day: Weekday,
    /// Workout type; double days carry one line per session (`AM: ...\nPM: ...`)
    pub workout_type: String,
    /// Intensity class
    pub intensity: IntensityClass,
    /// Duration text, one line per session on double days
    pub duration: String,
    /// What to do
    pub description: String,
}

/// Seven daily prescriptions, Monday first
pub type WeeklyPlan = [DayPlan; 7];

/// One week of the four-week meso-cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Week label, e.g. `Week 1`
    pub week_label: String,
    /// Training focus of the week
    pub focus: String,
    /// Volume relative to a full week, e.g. `85%`
    pub volume_label: String,
    /// Key workouts of the week
    pub key_workout: String,
}

/// Four progressively structured weeks
pub type Mesocycle = [WeekPlan; 4];

/// Canonical key-session archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutArchetype {
    /// `VO2max` intervals at I pace
    Interval,
    /// Threshold running at T pace
    Threshold,
    /// Long run in the easy range
    LongRun,
    /// Speed repetitions at R pace
    Repetition,
}

impl WorkoutArchetype {
    /// Archetypes in the order workouts are presented
    pub const ALL: [Self; 4] = [
        Self::Interval,
        Self::Threshold,
        Self::LongRun,
        Self::Repetition,
    ];
}

/// A fully specified key session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Which archetype this is
    pub archetype: WorkoutArchetype,
    /// Session title
    pub title: String,
    /// Warm-up
    pub warmup: String,
    /// Main set for the athlete's experience tier
    pub main: String,
    /// Cool-down
    pub cooldown: String,
    /// Execution tips
    pub tips: String,
    /// Target pace text (`M:SS/km`, or a range for the long run)
    pub pace: String,
}

/// The four key sessions in presentation order
pub type WorkoutSet = [WorkoutTemplate; 4];

/// Topic of a recommendation block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Advice for female runners
    Female,
    /// Advice for masters runners
    Masters,
    /// Base-phase advice
    BasePhase,
    /// Peak and taper advice
    RacePreparation,
    /// Return-from-injury protocol
    InjuryRecovery,
    /// Baseline nutrition, always last
    Nutrition,
}

/// A titled list of recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBlock {
    /// Topic
    pub kind: RecommendationKind,
    /// Block title
    pub title: String,
    /// Items in presentation order
    pub items: Vec<String>,
}
