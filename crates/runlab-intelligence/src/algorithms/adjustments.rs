// ABOUTME: Data-driven adjustment rules combining profile and conditions into pace/volume/intensity factors
// ABOUTME: Each rule is a predicate plus a multiplicative effect; every matching rule applies once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlab_core::models::{
    AdjustmentFactors, AgeGroup, AthleteProfile, Conditions, Experience, Gender, TrainingCondition,
    TrainingPhase,
};
use serde::Serialize;
use tracing::debug;

/// What a rule matches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "on", content = "value")]
pub enum RulePredicate {
    /// Profile gender equals the value
    Gender(Gender),
    /// Profile age group equals the value
    AgeGroup(AgeGroup),
    /// Profile experience equals the value
    Experience(Experience),
    /// Profile training phase equals the value
    Phase(TrainingPhase),
    /// The condition flag is set
    Condition(TrainingCondition),
}

impl RulePredicate {
    /// Whether the predicate holds for this athlete
    #[must_use]
    pub fn matches(self, profile: &AthleteProfile, conditions: &Conditions) -> bool {
        match self {
            Self::Gender(gender) => profile.gender == Some(gender),
            Self::AgeGroup(group) => profile.age_group == group,
            Self::Experience(experience) => profile.experience == experience,
            Self::Phase(phase) => profile.training_phase == phase,
            Self::Condition(condition) => condition.is_active(conditions),
        }
    }
}

/// A single adjustment rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustmentRule {
    /// Short rule name, used in logs
    pub name: &'static str,
    /// When the rule applies
    pub predicate: RulePredicate,
    /// Multiplicative effect on the factors
    pub effect: AdjustmentFactors,
}

const fn rule(
    name: &'static str,
    predicate: RulePredicate,
    pace: f64,
    volume: f64,
    intensity: f64,
) -> AdjustmentRule {
    AdjustmentRule {
        name,
        predicate,
        effect: AdjustmentFactors {
            pace,
            volume,
            intensity,
        },
    }
}

/// The fixed rule table
///
/// Senior, advanced, build, weight-loss and morning-only have no numeric
/// effect and so have no entry.
pub const ADJUSTMENT_RULES: [AdjustmentRule; 16] = [
    rule("female", RulePredicate::Gender(Gender::Female), 1.05, 1.0, 1.0),
    rule("junior", RulePredicate::AgeGroup(AgeGroup::Junior), 1.0, 0.8, 0.9),
    rule("master40", RulePredicate::AgeGroup(AgeGroup::Master40), 1.02, 0.95, 1.0),
    rule("master50", RulePredicate::AgeGroup(AgeGroup::Master50), 1.05, 0.9, 1.0),
    rule("master60", RulePredicate::AgeGroup(AgeGroup::Master60), 1.08, 0.85, 0.9),
    rule("beginner", RulePredicate::Experience(Experience::Beginner), 1.0, 0.7, 0.8),
    rule("intermediate", RulePredicate::Experience(Experience::Intermediate), 1.0, 0.85, 0.9),
    rule("elite", RulePredicate::Experience(Experience::Elite), 1.0, 1.2, 1.1),
    rule("base", RulePredicate::Phase(TrainingPhase::Base), 1.0, 1.1, 0.8),
    rule("peak", RulePredicate::Phase(TrainingPhase::Peak), 1.0, 0.9, 1.1),
    rule("taper", RulePredicate::Phase(TrainingPhase::Taper), 1.0, 0.5, 1.0),
    rule("recovery", RulePredicate::Phase(TrainingPhase::Recovery), 1.0, 0.6, 0.7),
    rule(
        "injury_recovery",
        RulePredicate::Condition(TrainingCondition::InjuryRecovery),
        1.1,
        0.6,
        0.7,
    ),
    rule("high_fatigue", RulePredicate::Condition(TrainingCondition::HighFatigue), 1.0, 0.8, 0.85),
    rule("altitude", RulePredicate::Condition(TrainingCondition::Altitude), 1.03, 1.0, 0.9),
    rule("hot_weather", RulePredicate::Condition(TrainingCondition::HotWeather), 1.05, 1.0, 1.0),
];

/// Apply every matching rule from `rules` exactly once
#[must_use]
pub fn compute_adjustments_with(
    rules: &[AdjustmentRule],
    profile: &AthleteProfile,
    conditions: &Conditions,
) -> AdjustmentFactors {
    rules
        .iter()
        .filter(|rule| rule.predicate.matches(profile, conditions))
        .fold(AdjustmentFactors::IDENTITY, |factors, rule| {
            debug!(rule = rule.name, "Adjustment rule matched");
            factors.scaled_by(rule.effect)
        })
}

/// Combine profile and conditions into adjustment factors using the fixed rule table
#[must_use]
pub fn compute_adjustments(profile: &AthleteProfile, conditions: &Conditions) -> AdjustmentFactors {
    compute_adjustments_with(&ADJUSTMENT_RULES, profile, conditions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_factors(actual: AdjustmentFactors, pace: f64, volume: f64, intensity: f64) {
        assert!((actual.pace - pace).abs() < 1e-9, "pace {} != {pace}", actual.pace);
        assert!((actual.volume - volume).abs() < 1e-9, "volume {} != {volume}", actual.volume);
        assert!(
            (actual.intensity - intensity).abs() < 1e-9,
            "intensity {} != {intensity}",
            actual.intensity
        );
    }

    fn neutral_profile() -> AthleteProfile {
        AthleteProfile {
            gender: Some(Gender::Male),
            age_group: AgeGroup::Senior,
            experience: Experience::Advanced,
            training_phase: TrainingPhase::Build,
            ..AthleteProfile::default()
        }
    }

    #[test]
    fn test_neutral_profile_is_identity() {
        let factors = compute_adjustments(&neutral_profile(), &Conditions::default());
        assert_eq!(factors, AdjustmentFactors::IDENTITY);
    }

    #[test]
    fn test_each_rule_in_isolation() {
        for rule in ADJUSTMENT_RULES {
            let mut profile = neutral_profile();
            let mut conditions = Conditions::default();
            match rule.predicate {
                RulePredicate::Gender(gender) => profile.gender = Some(gender),
                RulePredicate::AgeGroup(group) => profile.age_group = group,
                RulePredicate::Experience(experience) => profile.experience = experience,
                RulePredicate::Phase(phase) => profile.training_phase = phase,
                RulePredicate::Condition(condition) => {
                    conditions = Conditions::from_flags(&[condition]);
                }
            }
            let factors = compute_adjustments(&profile, &conditions);
            assert_eq!(factors, rule.effect, "rule {}", rule.name);
        }
    }

    #[test]
    fn test_combined_example() {
        let profile = AthleteProfile {
            gender: Some(Gender::Female),
            age_group: AgeGroup::Master50,
            experience: Experience::Beginner,
            training_phase: TrainingPhase::Taper,
            ..AthleteProfile::default()
        };
        let conditions = Conditions::from_flags(&[TrainingCondition::HotWeather]);
        let factors = compute_adjustments(&profile, &conditions);
        assert_factors(factors, 1.05 * 1.05 * 1.05, 0.9 * 0.7 * 0.5, 0.8);
    }

    #[test]
    fn test_all_conditions_combine() {
        let conditions = Conditions::from_flags(&TrainingCondition::ALL);
        let factors = compute_adjustments(&neutral_profile(), &conditions);
        assert_factors(factors, 1.1 * 1.03 * 1.05, 0.6 * 0.8, 0.7 * 0.85 * 0.9);
    }

    #[test]
    fn test_text_only_conditions_have_no_effect() {
        let conditions = Conditions::from_flags(&[
            TrainingCondition::WeightLoss,
            TrainingCondition::MorningOnly,
        ]);
        let factors = compute_adjustments(&neutral_profile(), &conditions);
        assert_eq!(factors, AdjustmentFactors::IDENTITY);
    }

    #[test]
    fn test_rule_order_does_not_matter() {
        let profile = AthleteProfile {
            gender: Some(Gender::Female),
            age_group: AgeGroup::Master60,
            experience: Experience::Elite,
            training_phase: TrainingPhase::Peak,
            ..AthleteProfile::default()
        };
        let conditions = Conditions::from_flags(&TrainingCondition::ALL);
        let forward = compute_adjustments(&profile, &conditions);

        let mut reversed = ADJUSTMENT_RULES;
        reversed.reverse();
        let backward = compute_adjustments_with(&reversed, &profile, &conditions);

        assert_factors(backward, forward.pace, forward.volume, forward.intensity);
    }

    #[test]
    fn test_factors_always_positive() {
        for rule in ADJUSTMENT_RULES {
            assert!(rule.effect.pace > 0.0);
            assert!(rule.effect.volume > 0.0);
            assert!(rule.effect.intensity > 0.0);
        }
    }
}
