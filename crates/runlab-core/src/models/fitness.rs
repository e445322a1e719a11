// ABOUTME: Display-side fitness summary: adjusted VDOT, performance level and VO2max
// ABOUTME: Values here are for presentation only and never feed pace computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance level ladder on the display-adjusted VDOT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    /// 75 and above
    Elite,
    /// 65 to 75
    SubElite,
    /// 55 to 65
    Advanced,
    /// 45 to 55
    Intermediate,
    /// 35 to 45
    Beginner,
    /// Below 35
    Novice,
}

impl PerformanceLevel {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Elite => "Elite",
            Self::SubElite => "Sub-elite",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline numbers shown alongside the training prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessSummary {
    /// Raw VDOT estimate, the only value used for paces
    pub vdot: f64,
    /// VDOT after the display-only gender adjustment, one decimal
    pub display_vdot: f64,
    /// Level classified from the display VDOT
    pub performance_level: PerformanceLevel,
    /// Estimated `VO2max` in ml/kg/min, one decimal
    pub vo2max: f64,
    /// Note shown when a display adjustment was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_note: Option<String>,
}
