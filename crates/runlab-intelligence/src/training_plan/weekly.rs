// ABOUTME: Weekly micro-cycle generation from fixed per-frequency templates
// ABOUTME: Base phase turns interval/repetition days into fartlek; taper scales durations by 0.6
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::periodization::TAPER_DURATION_SCALE;
use regex::{Captures, Regex};
use runlab_core::models::{
    DayPlan, IntensityClass, TrainingFrequency, TrainingPhase, WeeklyPlan, Weekday,
};
use std::sync::LazyLock;
use IntensityClass::{High, Low, Medium, Rest};
use Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};

static STRUCTURED_SPEED_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Interval|Repetition").ok());

static NUMBER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

const FARTLEK: &str = "Fartlek";
const FARTLEK_DESCRIPTION: &str = "Unstructured fartlek (varied-pace running)";

#[derive(Debug, Clone, Copy)]
struct DayTemplate {
    day: Weekday,
    workout_type: &'static str,
    intensity: IntensityClass,
    duration: &'static str,
    description: &'static str,
}

impl DayTemplate {
    fn to_plan(self) -> DayPlan {
        DayPlan {
            day: self.day,
            workout_type: self.workout_type.to_owned(),
            intensity: self.intensity,
            duration: self.duration.to_owned(),
            description: self.description.to_owned(),
        }
    }
}

const fn day(
    day: Weekday,
    workout_type: &'static str,
    intensity: IntensityClass,
    duration: &'static str,
    description: &'static str,
) -> DayTemplate {
    DayTemplate {
        day,
        workout_type,
        intensity,
        duration,
        description,
    }
}

const THREE_TO_FOUR_DAYS: [DayTemplate; 7] = [
    day(Mon, "Easy", Low, "40-50 min", "Recovery run at E pace"),
    day(Tue, "Rest", Rest, "Rest", "Full rest or cross-training"),
    day(Wed, "Interval", High, "45 min", "400m x 8 @ I pace"),
    day(Thu, "Rest", Rest, "Rest", "Full rest"),
    day(Fri, "Tempo", Medium, "35 min", "20 min at T pace"),
    day(Sat, "Rest", Rest, "Rest", "Full rest"),
    day(Sun, "Long", Low, "60-90 min", "Long run at E pace"),
];

const FIVE_TO_SIX_DAYS: [DayTemplate; 7] = [
    day(Mon, "Easy", Low, "50-60 min", "Recovery run at E pace"),
    day(Tue, "Interval", High, "50 min", "1000m x 5 @ I pace"),
    day(Wed, "Easy", Low, "40 min", "E pace + strides"),
    day(Thu, "Tempo", Medium, "45 min", "2 x 15 min at T pace"),
    day(Fri, "Easy", Low, "30 min", "Recovery jog"),
    day(Sat, "Race Pace", Medium, "40 min", "Goal race pace"),
    day(Sun, "Long", Low, "90-120 min", "Long run at E/M pace"),
];

const DAILY: [DayTemplate; 7] = [
    day(Mon, "Easy+", Low, "60 min", "E pace + hills"),
    day(Tue, "Interval", High, "60 min", "1200m x 5 @ I pace"),
    day(Wed, "Recovery", Low, "40 min", "Recovery jog"),
    day(Thu, "Threshold", Medium, "50 min", "30 min at T pace"),
    day(Fri, "Easy", Low, "45 min", "E pace"),
    day(Sat, "Repetition", High, "45 min", "200m x 10 @ R pace"),
    day(Sun, "Long", Low, "120-150 min", "Progressive long run"),
];

const DOUBLE: [DayTemplate; 7] = [
    day(Mon, "AM: Easy\nPM: Recovery", Low, "AM: 50 min\nPM: 30 min", "Double recovery"),
    day(Tue, "AM: Interval\nPM: Easy", High, "AM: 60 min\nPM: 30 min", "Key session + recovery"),
    day(Wed, "AM: Easy", Low, "AM: 60 min", "Single session"),
    day(Thu, "AM: Threshold\nPM: Easy", Medium, "AM: 50 min\nPM: 30 min", "T pace + recovery"),
    day(Fri, "AM: Recovery", Low, "AM: 40 min", "Recovery jog"),
    day(Sat, "AM: Repetition", High, "AM: 50 min", "Speed session"),
    day(Sun, "AM: Long\nPM: Recovery", Low, "AM: 120 min\nPM: 20 min", "Long run + cool-down"),
];

const fn template(frequency: TrainingFrequency) -> [DayTemplate; 7] {
    match frequency {
        TrainingFrequency::ThreeToFour => THREE_TO_FOUR_DAYS,
        TrainingFrequency::FiveToSix => FIVE_TO_SIX_DAYS,
        TrainingFrequency::Daily => DAILY,
        TrainingFrequency::Double => DOUBLE,
    }
}

/// Generate the seven-day micro-cycle for a frequency and phase
///
/// Day order always runs Monday to Sunday. Base and taper phases rewrite the
/// template; every other phase returns it unchanged.
#[must_use]
pub fn generate_weekly_plan(frequency: TrainingFrequency, phase: TrainingPhase) -> WeeklyPlan {
    let plan = template(frequency).map(DayTemplate::to_plan);
    match phase {
        TrainingPhase::Base => plan.map(to_fartlek),
        TrainingPhase::Taper => plan.map(taper_durations),
        TrainingPhase::Build | TrainingPhase::Peak | TrainingPhase::Recovery => plan,
    }
}

/// Replace structured speed work with unstructured fartlek
fn to_fartlek(day: DayPlan) -> DayPlan {
    let Some(pattern) = STRUCTURED_SPEED_PATTERN.as_ref() else {
        return day;
    };
    if !pattern.is_match(&day.workout_type) {
        return day;
    }
    DayPlan {
        workout_type: pattern.replace(&day.workout_type, FARTLEK).into_owned(),
        intensity: IntensityClass::Medium,
        description: FARTLEK_DESCRIPTION.to_owned(),
        ..day
    }
}

/// Scale every number in the duration text
fn taper_durations(day: DayPlan) -> DayPlan {
    let Some(pattern) = NUMBER_PATTERN.as_ref() else {
        return day;
    };
    let duration = pattern
        .replace_all(&day.duration, |caps: &Captures<'_>| {
            let matched = &caps[0];
            matched.parse::<u32>().map_or_else(
                |_| matched.to_owned(),
                |minutes| {
                    let scaled = (f64::from(minutes) * TAPER_DURATION_SCALE).round() as u32;
                    scaled.to_string()
                },
            )
        })
        .into_owned();
    DayPlan { duration, ..day }
}
