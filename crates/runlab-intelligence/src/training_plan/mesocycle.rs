// ABOUTME: Four-week meso-cycle outlines keyed by training phase
// ABOUTME: Base, build and peak have dedicated outlines; taper and recovery share a default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlab_core::models::{Mesocycle, TrainingPhase, WeekPlan};

/// `(focus, volume, key workout)` for one week
type WeekOutline = (&'static str, &'static str, &'static str);

const BASE: [WeekOutline; 4] = [
    (
        "Adaptation",
        "70%",
        "Mostly easy runs, fartlek 3-4 times a week",
    ),
    ("Volume increase", "85%", "Long run +10%, introduce tempo"),
    (
        "Intensity introduction",
        "100%",
        "Threshold 20 min x 2, hold long run",
    ),
    ("Recovery", "60%", "Mostly easy runs, time-trial test"),
];

const BUILD: [WeekOutline; 4] = [
    ("VO2max", "80%", "1000m x 5 @ I pace, tempo 25 min"),
    (
        "Lactate threshold",
        "90%",
        "Threshold 30 min continuous, 800m x 6",
    ),
    (
        "Integration",
        "100%",
        "1600m x 4 @ I pace, long run with M pace",
    ),
    ("Recovery / test", "70%", "3-5 km test, easy runs"),
];

const PEAK: [WeekOutline; 4] = [
    ("Race simulation", "90%", "80% of goal distance @ goal pace"),
    ("Speed", "80%", "400m x 10 @ R pace, short tempo"),
    (
        "Race preparation",
        "70%",
        "Confirm goal pace, review strategy",
    ),
    ("Race", "50%", "Taper from 3 days before the race"),
];

const DEFAULT: [WeekOutline; 4] = [
    ("Foundation", "70%", "Mostly easy runs"),
    ("Development", "85%", "Experience a range of paces"),
    ("Challenge", "100%", "Focus on key sessions"),
    ("Recovery", "60%", "Prepare for the next cycle"),
];

/// Generate the four-week block for a phase
#[must_use]
pub fn generate_mesocycle(phase: TrainingPhase) -> Mesocycle {
    let outline = match phase {
        TrainingPhase::Base => BASE,
        TrainingPhase::Build => BUILD,
        TrainingPhase::Peak => PEAK,
        TrainingPhase::Taper | TrainingPhase::Recovery => DEFAULT,
    };

    let mut week_number = 0_u8;
    outline.map(|(focus, volume, key_workout)| {
        week_number += 1;
        WeekPlan {
            week_label: format!("Week {week_number}"),
            focus: focus.to_owned(),
            volume_label: volume.to_owned(),
            key_workout: key_workout.to_owned(),
        }
    })
}
