// ABOUTME: Athlete profile and situational condition models
// ABOUTME: Gender, age group, experience, volume, frequency, phase enums and condition flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Athlete gender as selected in the profile
///
/// The profile stores `Option<Gender>`; an unset gender blocks computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// All options in form order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Age category of the athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// 18 and under
    Junior,
    /// 19 to 39
    #[default]
    Senior,
    /// 40 to 49
    #[serde(rename = "master40")]
    Master40,
    /// 50 to 59
    #[serde(rename = "master50")]
    Master50,
    /// 60 and over
    #[serde(rename = "master60")]
    Master60,
}

impl AgeGroup {
    /// All options in form order
    pub const ALL: [Self; 5] = [
        Self::Junior,
        Self::Senior,
        Self::Master40,
        Self::Master50,
        Self::Master60,
    ];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Senior => "senior",
            Self::Master40 => "master40",
            Self::Master50 => "master50",
            Self::Master60 => "master60",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior (18 and under)",
            Self::Senior => "Senior (19-39)",
            Self::Master40 => "Masters 40+ (40-49)",
            Self::Master50 => "Masters 50+ (50-59)",
            Self::Master60 => "Masters 60+ (60 and over)",
        }
    }

    /// Whether the group belongs to the masters categories
    #[must_use]
    pub fn is_masters(self) -> bool {
        self.as_str().starts_with("master")
    }
}

impl FromStr for AgeGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown age group: '{normalized}'. Valid options: junior, senior, master40, master50, master60"
                ))
            })
    }
}

/// Running experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    /// Less than a year
    Beginner,
    /// One to three years
    #[default]
    Intermediate,
    /// Three to five years
    Advanced,
    /// More than five years
    Elite,
}

impl Experience {
    /// All options in form order
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Elite,
    ];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner (under 1 year)",
            Self::Intermediate => "Intermediate (1-3 years)",
            Self::Advanced => "Advanced (3-5 years)",
            Self::Elite => "Elite (5+ years)",
        }
    }

    /// Zero-based tier index used by experience-tiered tables
    #[must_use]
    pub const fn tier(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
            Self::Elite => 3,
        }
    }
}

impl FromStr for Experience {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown experience: '{normalized}'. Valid options: beginner, intermediate, advanced, elite"
                ))
            })
    }
}

/// Current weekly running volume (informational)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeeklyVolume {
    /// 30 km or less
    Low,
    /// 30 to 60 km
    #[default]
    Moderate,
    /// 60 to 100 km
    High,
    /// More than 100 km
    VeryHigh,
}

impl WeeklyVolume {
    /// All options in form order
    pub const ALL: [Self; 4] = [Self::Low, Self::Moderate, Self::High, Self::VeryHigh];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "30 km or less",
            Self::Moderate => "30-60 km",
            Self::High => "60-100 km",
            Self::VeryHigh => "100 km or more",
        }
    }
}

impl FromStr for WeeklyVolume {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|volume| volume.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown weekly volume: '{normalized}'. Valid options: low, moderate, high, very-high"
                ))
            })
    }
}

/// Training sessions per week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrainingFrequency {
    /// Three to four days a week
    #[serde(rename = "3-4")]
    ThreeToFour,
    /// Five to six days a week
    #[default]
    #[serde(rename = "5-6")]
    FiveToSix,
    /// Every day
    #[serde(rename = "7")]
    Daily,
    /// Two sessions a day
    #[serde(rename = "double")]
    Double,
}

impl TrainingFrequency {
    /// All options in form order
    pub const ALL: [Self; 4] = [Self::ThreeToFour, Self::FiveToSix, Self::Daily, Self::Double];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreeToFour => "3-4",
            Self::FiveToSix => "5-6",
            Self::Daily => "7",
            Self::Double => "double",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThreeToFour => "3-4 days/week",
            Self::FiveToSix => "5-6 days/week",
            Self::Daily => "7 days/week",
            Self::Double => "Twice daily (elite)",
        }
    }
}

impl FromStr for TrainingFrequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown training frequency: '{normalized}'. Valid options: 3-4, 5-6, 7, double"
                ))
            })
    }
}

/// Periodization phase the athlete is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Aerobic base building
    Base,
    /// Specific preparation
    #[default]
    Build,
    /// Peaking for a race
    Peak,
    /// Pre-race taper
    Taper,
    /// Post-race or post-block recovery
    Recovery,
}

impl TrainingPhase {
    /// All options in form order
    pub const ALL: [Self; 5] = [
        Self::Base,
        Self::Build,
        Self::Peak,
        Self::Taper,
        Self::Recovery,
    ];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
            Self::Recovery => "recovery",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "Base building",
            Self::Build => "Specific build",
            Self::Peak => "Peaking",
            Self::Taper => "Tapering",
            Self::Recovery => "Recovery",
        }
    }
}

impl FromStr for TrainingPhase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown training phase: '{normalized}'. Valid options: base, build, peak, taper, recovery"
                ))
            })
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_via_as_str!(
    Gender,
    AgeGroup,
    Experience,
    WeeklyVolume,
    TrainingFrequency,
    TrainingPhase,
);

/// Athlete profile used by the adjustment calculator and plan generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteProfile {
    /// Gender, required before computation
    pub gender: Option<Gender>,
    /// Age category
    pub age_group: AgeGroup,
    /// Experience level
    pub experience: Experience,
    /// Current weekly volume (not used by any adjustment rule)
    pub weekly_volume: WeeklyVolume,
    /// Sessions per week
    pub frequency: TrainingFrequency,
    /// Current periodization phase
    pub training_phase: TrainingPhase,
}

/// Situational conditions, any subset of which may be active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    /// Returning from injury
    pub injury_recovery: bool,
    /// Accumulated fatigue
    pub high_fatigue: bool,
    /// Training at altitude
    pub altitude: bool,
    /// Hot and humid environment
    pub hot_weather: bool,
    /// Weight-loss goal
    pub weight_loss: bool,
    /// Only morning sessions possible
    pub morning_only: bool,
}

impl Conditions {
    /// Build a condition set from a list of flags
    #[must_use]
    pub fn from_flags(flags: &[TrainingCondition]) -> Self {
        flags.iter().fold(Self::default(), |mut conditions, flag| {
            flag.set(&mut conditions);
            conditions
        })
    }

    /// Active flags in declaration order
    #[must_use]
    pub fn active(&self) -> Vec<TrainingCondition> {
        TrainingCondition::ALL
            .into_iter()
            .filter(|condition| condition.is_active(self))
            .collect()
    }
}

/// Individual condition flag with its display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingCondition {
    /// Returning from injury
    InjuryRecovery,
    /// Accumulated fatigue
    HighFatigue,
    /// Training at altitude
    Altitude,
    /// Hot and humid environment
    HotWeather,
    /// Weight-loss goal
    WeightLoss,
    /// Only morning sessions possible
    MorningOnly,
}

impl TrainingCondition {
    /// All conditions in declaration order
    pub const ALL: [Self; 6] = [
        Self::InjuryRecovery,
        Self::HighFatigue,
        Self::Altitude,
        Self::HotWeather,
        Self::WeightLoss,
        Self::MorningOnly,
    ];

    /// Whether this flag is set in `conditions`
    #[must_use]
    pub const fn is_active(self, conditions: &Conditions) -> bool {
        match self {
            Self::InjuryRecovery => conditions.injury_recovery,
            Self::HighFatigue => conditions.high_fatigue,
            Self::Altitude => conditions.altitude,
            Self::HotWeather => conditions.hot_weather,
            Self::WeightLoss => conditions.weight_loss,
            Self::MorningOnly => conditions.morning_only,
        }
    }

    fn set(self, conditions: &mut Conditions) {
        match self {
            Self::InjuryRecovery => conditions.injury_recovery = true,
            Self::HighFatigue => conditions.high_fatigue = true,
            Self::Altitude => conditions.altitude = true,
            Self::HotWeather => conditions.hot_weather = true,
            Self::WeightLoss => conditions.weight_loss = true,
            Self::MorningOnly => conditions.morning_only = true,
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InjuryRecovery => "injury_recovery",
            Self::HighFatigue => "high_fatigue",
            Self::Altitude => "altitude",
            Self::HotWeather => "hot_weather",
            Self::WeightLoss => "weight_loss",
            Self::MorningOnly => "morning_only",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InjuryRecovery => "Recovering from injury",
            Self::HighFatigue => "Accumulated fatigue",
            Self::Altitude => "Altitude training",
            Self::HotWeather => "Hot and humid weather",
            Self::WeightLoss => "Weight-loss goal",
            Self::MorningOnly => "Morning sessions only",
        }
    }

    /// What the condition means for training
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InjuryRecovery => "Training intensity reduced by 40%",
            Self::HighFatigue => "Recovery-focused programme",
            Self::Altitude => "Intensity needs moderating",
            Self::HotWeather => "Adjust pace by 5-10 s/km",
            Self::WeightLoss => "More aerobic volume",
            Self::MorningOnly => "Longer warm-up",
        }
    }
}

impl_display_via_as_str!(TrainingCondition);
