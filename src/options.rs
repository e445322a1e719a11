// ABOUTME: Catalog of selectable inputs and the active calibration for the options command
// ABOUTME: Lists distances, profile options and conditions with their wire values and labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EngineConfig;
use crate::formatters::TextReport;
use runlab_core::models::{
    AgeGroup, Experience, Gender, PaceZone, RaceDistance, TrainingCondition, TrainingFrequency,
    TrainingPhase, WeeklyVolume,
};
use serde::Serialize;
use std::fmt::Write;

/// One selectable value
#[derive(Debug, Clone, Serialize)]
pub struct OptionEntry {
    /// Value accepted on the command line and in JSON
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
    /// Extra explanation, where one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

const fn entry(value: &'static str, label: &'static str) -> OptionEntry {
    OptionEntry {
        value,
        label,
        description: None,
    }
}

/// Everything a caller can choose, plus the calibration in effect
#[derive(Debug, Clone, Serialize)]
pub struct OptionsCatalog {
    /// Calibrated race distances
    pub distances: Vec<OptionEntry>,
    /// Genders
    pub genders: Vec<OptionEntry>,
    /// Age groups
    pub age_groups: Vec<OptionEntry>,
    /// Experience levels
    pub experience: Vec<OptionEntry>,
    /// Weekly volumes
    pub weekly_volumes: Vec<OptionEntry>,
    /// Training frequencies
    pub frequencies: Vec<OptionEntry>,
    /// Training phases
    pub phases: Vec<OptionEntry>,
    /// Situational conditions
    pub conditions: Vec<OptionEntry>,
    /// Pace zones with purpose and effort guidance
    pub zones: Vec<OptionEntry>,
    /// Active engine configuration
    pub config: EngineConfig,
}

impl OptionsCatalog {
    /// Build the catalog for a configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            distances: RaceDistance::ALL
                .iter()
                .map(|d| entry(d.as_str(), d.label()))
                .collect(),
            genders: Gender::ALL.iter().map(|g| entry(g.as_str(), g.label())).collect(),
            age_groups: AgeGroup::ALL
                .iter()
                .map(|a| entry(a.as_str(), a.label()))
                .collect(),
            experience: Experience::ALL
                .iter()
                .map(|e| entry(e.as_str(), e.label()))
                .collect(),
            weekly_volumes: WeeklyVolume::ALL
                .iter()
                .map(|v| entry(v.as_str(), v.label()))
                .collect(),
            frequencies: TrainingFrequency::ALL
                .iter()
                .map(|f| entry(f.as_str(), f.label()))
                .collect(),
            phases: TrainingPhase::ALL
                .iter()
                .map(|p| entry(p.as_str(), p.label()))
                .collect(),
            conditions: TrainingCondition::ALL
                .iter()
                .map(|c| OptionEntry {
                    description: Some(c.description()),
                    ..entry(c.as_str(), c.label())
                })
                .collect(),
            zones: PaceZone::ALL
                .iter()
                .map(|z| OptionEntry {
                    description: Some(z.effort()),
                    ..entry(z.name(), z.purpose())
                })
                .collect(),
            config,
        }
    }
}

impl TextReport for OptionsCatalog {
    fn render_text(&self) -> String {
        let mut output = String::new();
        let sections = [
            ("Distances", &self.distances),
            ("Genders", &self.genders),
            ("Age groups", &self.age_groups),
            ("Experience", &self.experience),
            ("Weekly volume", &self.weekly_volumes),
            ("Frequency", &self.frequencies),
            ("Phase", &self.phases),
            ("Conditions", &self.conditions),
            ("Pace zones", &self.zones),
        ];
        for (title, entries) in sections {
            let _ = writeln!(output, "{title}");
            for option in entries {
                match option.description {
                    Some(description) => {
                        let _ = writeln!(
                            output,
                            "  {:<16} {} - {description}",
                            option.value, option.label
                        );
                    }
                    None => {
                        let _ = writeln!(output, "  {:<16} {}", option.value, option.label);
                    }
                }
            }
            output.push('\n');
        }

        let zones = &self.config.pace_zones;
        let _ = writeln!(output, "Calibration");
        let _ = writeln!(
            output,
            "  scale {} / easy {}-{} / marathon {} / threshold {} / interval {} / repetition {}",
            zones.vdot_scale,
            zones.easy_fast,
            zones.easy_slow,
            zones.marathon,
            zones.threshold,
            zones.interval,
            zones.repetition
        );
        let _ = writeln!(
            output,
            "  female display factor {} / VO2max factor {}",
            self.config.display.female_display_factor, self.config.display.vo2max_factor
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_option() {
        let catalog = OptionsCatalog::new(EngineConfig::default());
        assert_eq!(catalog.distances.len(), 7);
        assert_eq!(catalog.frequencies[3].value, "double");
        assert_eq!(catalog.conditions.len(), 6);
        assert_eq!(
            catalog.conditions[3].description,
            Some("Adjust pace by 5-10 s/km")
        );
    }

    #[test]
    fn test_text_includes_calibration() {
        let text = OptionsCatalog::new(EngineConfig::default()).render_text();
        assert!(text.contains("21097.5"));
        assert!(text.contains("female display factor 0.88"));
    }
}
