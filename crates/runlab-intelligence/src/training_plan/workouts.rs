// ABOUTME: Key-session workout templates with experience-tiered main sets
// ABOUTME: Target paces are taken from the computed zone table so workouts match the zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlab_core::models::{
    format_pace, Experience, TrainingPaces, WorkoutArchetype, WorkoutSet, WorkoutTemplate,
};

struct ArchetypeTemplate {
    title: &'static str,
    warmup: &'static str,
    /// Main sets for beginner, intermediate, advanced and elite
    main_by_tier: [&'static str; 4],
    cooldown: &'static str,
    tips: &'static str,
}

const INTERVAL: ArchetypeTemplate = ArchetypeTemplate {
    title: "VO2max Intervals",
    warmup: "20 min easy + 4 x 100m strides",
    main_by_tier: [
        "800m x 4 @ I pace (2-3 min recovery)",
        "1000m x 5 @ I pace (2-3 min recovery)",
        "1200m x 5 @ I pace (2 min recovery)",
        "1600m x 5 @ I pace (90 s recovery)",
    ],
    cooldown: "15 min easy + stretching",
    tips: "Hold an even pace; finish the last rep with something left",
};

const THRESHOLD: ArchetypeTemplate = ArchetypeTemplate {
    title: "Lactate Threshold",
    warmup: "15 min easy + dynamic stretching",
    main_by_tier: [
        "20 min continuous @ T pace",
        "2 x 15 min @ T pace (1 min rest)",
        "30 min continuous @ T pace",
        "2 x 20 min @ T pace (1 min rest)",
    ],
    cooldown: "10 min easy",
    tips: "Comfortably hard; conversation is difficult",
};

const LONG_RUN: ArchetypeTemplate = ArchetypeTemplate {
    title: "Long Run",
    warmup: "Start slowly",
    main_by_tier: [
        "60-75 min @ E pace",
        "90-105 min @ E/M pace",
        "105-120 min, last 30 min at M pace",
        "120-150 min progressive (E→M→T)",
    ],
    cooldown: "5-10 min very easy",
    tips: "Take on fluids and fuel; keep the pace steady",
};

const REPETITION: ArchetypeTemplate = ArchetypeTemplate {
    title: "Speed / Form",
    warmup: "20 min easy + drills",
    main_by_tier: [
        "200m x 6 @ R pace (full recovery)",
        "400m x 6 @ R pace (full recovery)",
        "400m x 4 + 200m x 4 @ R pace",
        "600m x 6 @ R pace (full recovery)",
    ],
    cooldown: "15 min easy",
    tips: "Focus on form; recover fully between reps",
};

const fn template(archetype: WorkoutArchetype) -> &'static ArchetypeTemplate {
    match archetype {
        WorkoutArchetype::Interval => &INTERVAL,
        WorkoutArchetype::Threshold => &THRESHOLD,
        WorkoutArchetype::LongRun => &LONG_RUN,
        WorkoutArchetype::Repetition => &REPETITION,
    }
}

fn pace_text(archetype: WorkoutArchetype, paces: &TrainingPaces) -> String {
    match archetype {
        WorkoutArchetype::Interval => format_pace(paces.interval),
        WorkoutArchetype::Threshold => format_pace(paces.threshold),
        WorkoutArchetype::LongRun => paces.easy_range_text(),
        WorkoutArchetype::Repetition => format_pace(paces.repetition),
    }
}

/// Build the four key sessions for an experience level
///
/// Always returns interval, threshold, long run and repetition in that order.
#[must_use]
pub fn generate_workouts(experience: Experience, paces: &TrainingPaces) -> WorkoutSet {
    WorkoutArchetype::ALL.map(|archetype| {
        let template = template(archetype);
        let main = template
            .main_by_tier
            .get(experience.tier())
            .copied()
            .unwrap_or_default();
        WorkoutTemplate {
            archetype,
            title: template.title.to_owned(),
            warmup: template.warmup.to_owned(),
            main: main.to_owned(),
            cooldown: template.cooldown.to_owned(),
            tips: template.tips.to_owned(),
            pace: pace_text(archetype, paces),
        }
    })
}
