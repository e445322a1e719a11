// ABOUTME: Contextual recommendation blocks for the athlete profile and conditions
// ABOUTME: Female, masters, phase and injury blocks in fixed precedence, nutrition always last
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Recommendation generation
//!
//! Blocks are appended in a fixed order and never reordered or deduplicated:
//! female, masters, one phase block (base, or race preparation for peak and
//! taper), injury recovery, then the baseline nutrition guide.

use runlab_core::models::{
    AthleteProfile, Conditions, Gender, RecommendationBlock, RecommendationKind, TrainingPhase,
};

const FEMALE_ITEMS: [&str; 4] = [
    "Check iron levels regularly (keep ferritin above 50 ng/ml)",
    "Adjust training intensity around the menstrual cycle",
    "Get enough calcium and vitamin D",
    "Bone density scan once a year",
];

const MASTERS_ITEMS: [&str; 5] = [
    "Allow 1.5-2x the usual recovery time",
    "Strength training at least twice a week",
    "Thorough warm-up (20+ min) before hard sessions",
    "15 minutes of flexibility work daily",
    "Regular health check-ups (including cardiovascular)",
];

const BASE_PHASE_ITEMS: [&str; 4] = [
    "Increase weekly mileage by no more than 10%",
    "Focus on time and distance over speed",
    "Cross-train 1-2 times a week",
    "Core strength work 3 times a week",
];

const RACE_PREPARATION_ITEMS: [&str; 5] = [
    "No new gear or food",
    "Get enough sleep (8+ hours)",
    "Raise carbohydrate share to 60-70%",
    "Limit caffeine from 3 days before the race",
    "Simulate race pace",
];

const INJURY_RECOVERY_ITEMS: [&str; 5] = [
    "Train only at pain 3/10 or below",
    "Ice and compress daily",
    "Eat anti-inflammatory foods (omega-3, turmeric)",
    "Maintain aerobic fitness with cross-training (swimming, cycling)",
    "Consult a physiotherapist",
];

const NUTRITION_ITEMS: [&str; 5] = [
    "Before training: 30-50 g carbohydrate (1-2 hours before)",
    "During training: 30-60 g carbohydrate per hour for sessions over 60 minutes",
    "Within 30 minutes after: carbohydrate to protein at 3:1",
    "Daily fluids: body weight (kg) x 35 ml + training losses",
    "Electrolytes: 300-700 mg sodium per hour",
];

fn block(kind: RecommendationKind, title: &str, items: &[&str]) -> RecommendationBlock {
    RecommendationBlock {
        kind,
        title: title.to_owned(),
        items: items.iter().map(|item| (*item).to_owned()).collect(),
    }
}

fn phase_block(phase: TrainingPhase) -> Option<RecommendationBlock> {
    match phase {
        TrainingPhase::Base => Some(block(
            RecommendationKind::BasePhase,
            "Base Phase Recommendations",
            &BASE_PHASE_ITEMS,
        )),
        TrainingPhase::Peak | TrainingPhase::Taper => Some(block(
            RecommendationKind::RacePreparation,
            "Race Preparation Recommendations",
            &RACE_PREPARATION_ITEMS,
        )),
        TrainingPhase::Build | TrainingPhase::Recovery => None,
    }
}

/// Generate recommendation blocks for a profile and conditions
///
/// The returned list is never empty; its last block is always the nutrition guide.
#[must_use]
pub fn generate_recommendations(
    profile: &AthleteProfile,
    conditions: &Conditions,
) -> Vec<RecommendationBlock> {
    let mut blocks = Vec::with_capacity(5);

    if profile.gender == Some(Gender::Female) {
        blocks.push(block(
            RecommendationKind::Female,
            "Recommendations for Female Runners",
            &FEMALE_ITEMS,
        ));
    }

    if profile.age_group.is_masters() {
        blocks.push(block(
            RecommendationKind::Masters,
            "Recommendations for Masters Runners",
            &MASTERS_ITEMS,
        ));
    }

    blocks.extend(phase_block(profile.training_phase));

    if conditions.injury_recovery {
        blocks.push(block(
            RecommendationKind::InjuryRecovery,
            "Injury Recovery Protocol",
            &INJURY_RECOVERY_ITEMS,
        ));
    }

    blocks.push(block(
        RecommendationKind::Nutrition,
        "Nutrition Guide",
        &NUTRITION_ITEMS,
    ));

    blocks
}
