// ABOUTME: Performance sample models: calibrated race distances and finish times
// ABOUTME: RaceDistance, TimeInput parsing (h:mm:ss) and the PerformanceSample input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Race distances with calibration data
///
/// Only these seven distances can be turned into a VDOT estimate; the
/// serialized form is the distance in meters exactly as written in the
/// calibration table (`"21097.5"` for the half marathon). Deserialization
/// also accepts the bare number (`5000`) and any alias `FromStr` knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DistanceInput")]
pub enum RaceDistance {
    /// 800 meters
    #[serde(rename = "800")]
    M800,
    /// 1500 meters
    #[serde(rename = "1500")]
    M1500,
    /// 3000 meters
    #[serde(rename = "3000")]
    M3000,
    /// 5000 meters
    #[serde(rename = "5000")]
    M5000,
    /// 10000 meters
    #[serde(rename = "10000")]
    M10000,
    /// Half marathon, 21097.5 meters
    #[serde(rename = "21097.5")]
    HalfMarathon,
    /// Marathon, 42195 meters
    #[serde(rename = "42195")]
    Marathon,
}

impl RaceDistance {
    /// All calibrated distances, shortest first
    pub const ALL: [Self; 7] = [
        Self::M800,
        Self::M1500,
        Self::M3000,
        Self::M5000,
        Self::M10000,
        Self::HalfMarathon,
        Self::Marathon,
    ];

    /// Distance in meters
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::M800 => 800.0,
            Self::M1500 => 1_500.0,
            Self::M3000 => 3_000.0,
            Self::M5000 => 5_000.0,
            Self::M10000 => 10_000.0,
            Self::HalfMarathon => 21_097.5,
            Self::Marathon => 42_195.0,
        }
    }

    /// Distance key as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M800 => "800",
            Self::M1500 => "1500",
            Self::M3000 => "3000",
            Self::M5000 => "5000",
            Self::M10000 => "10000",
            Self::HalfMarathon => "21097.5",
            Self::Marathon => "42195",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::M800 => "800m",
            Self::M1500 => "1500m (1.5km)",
            Self::M3000 => "3000m (3km)",
            Self::M5000 => "5000m (5km)",
            Self::M10000 => "10000m (10km)",
            Self::HalfMarathon => "Half marathon (21.0975km)",
            Self::Marathon => "Marathon (42.195km)",
        }
    }

    /// Look up a calibrated distance by its length in meters
    #[must_use]
    pub fn from_meters(meters: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|distance| (distance.meters() - meters).abs() < f64::EPSILON)
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "800" | "800m" => Ok(Self::M800),
            "1500" | "1500m" | "1.5k" => Ok(Self::M1500),
            "3000" | "3000m" | "3k" => Ok(Self::M3000),
            "5000" | "5000m" | "5k" => Ok(Self::M5000),
            "10000" | "10000m" | "10k" => Ok(Self::M10000),
            "21097.5" | "half" | "half_marathon" | "half-marathon" => Ok(Self::HalfMarathon),
            "42195" | "marathon" | "full" => Ok(Self::Marathon),
            other => Err(AppError::invalid_input(format!(
                "Unknown race distance: '{other}'. Valid options: 800, 1500, 3000, 5000, 10000, 21097.5, 42195"
            ))),
        }
    }
}

/// Wire form of a distance: meters as a number or a string key
#[derive(Deserialize)]
#[serde(untagged)]
enum DistanceInput {
    Meters(f64),
    Key(String),
}

impl TryFrom<DistanceInput> for RaceDistance {
    type Error = AppError;

    fn try_from(input: DistanceInput) -> Result<Self, Self::Error> {
        match input {
            DistanceInput::Meters(meters) => Self::from_meters(meters).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "No calibration data for {meters} meters. \
                     Valid options: 800, 1500, 3000, 5000, 10000, 21097.5, 42195"
                ))
            }),
            DistanceInput::Key(key) => key.parse(),
        }
    }
}

/// Finish time as entered: hours, minutes and (possibly fractional) seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeInput {
    /// Whole hours
    pub hours: u32,
    /// Whole minutes
    pub minutes: u32,
    /// Seconds, tenths allowed
    pub seconds: f64,
}

impl TimeInput {
    /// Build a time from its components
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Total time in seconds
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        f64::from(self.hours).mul_add(
            f64::from(SECONDS_PER_HOUR),
            f64::from(self.minutes) * f64::from(SECONDS_PER_MINUTE),
        ) + self.seconds
    }
}

impl FromStr for TimeInput {
    type Err = AppError;

    /// Parse `h:mm:ss`, `mm:ss` or a plain number of seconds
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let invalid = || {
            AppError::invalid_input(format!(
                "Invalid time '{s}'. Use h:mm:ss, mm:ss or seconds"
            ))
        };

        let parse_whole = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());
        let parse_seconds = |part: &str| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .ok_or_else(invalid)
        };

        let time = match parts.as_slice() {
            [seconds] => Self::new(0, 0, parse_seconds(seconds)?),
            [minutes, seconds] => Self::new(0, parse_whole(minutes)?, parse_seconds(seconds)?),
            [hours, minutes, seconds] => Self::new(
                parse_whole(hours)?,
                parse_whole(minutes)?,
                parse_seconds(seconds)?,
            ),
            _ => return Err(invalid()),
        };

        // A leading unit makes the following ones sexagesimal
        if parts.len() > 1 && time.seconds >= 60.0 {
            return Err(invalid());
        }
        if parts.len() > 2 && time.minutes >= SECONDS_PER_MINUTE {
            return Err(invalid());
        }

        Ok(time)
    }
}

/// A single race performance handed to the engine
///
/// `distance` is optional so that an unselected distance can reach the
/// pipeline and be reported as a validation error in the documented order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    /// Calibrated race distance, if selected
    pub distance: Option<RaceDistance>,
    /// Finish time in seconds
    pub time_seconds: f64,
}

impl PerformanceSample {
    /// Create a sample for a selected distance
    #[must_use]
    pub const fn new(distance: RaceDistance, time_seconds: f64) -> Self {
        Self {
            distance: Some(distance),
            time_seconds,
        }
    }

    /// Create a sample from a time entered as hours, minutes and seconds
    #[must_use]
    pub fn from_time_input(distance: Option<RaceDistance>, time: TimeInput) -> Self {
        Self {
            distance,
            time_seconds: time.total_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_round_trips_through_wire_name() {
        for distance in RaceDistance::ALL {
            assert_eq!(distance.as_str().parse::<RaceDistance>().unwrap(), distance);
        }
    }

    #[test]
    fn test_distance_short_names() {
        assert_eq!("5k".parse::<RaceDistance>().unwrap(), RaceDistance::M5000);
        assert_eq!("Half".parse::<RaceDistance>().unwrap(), RaceDistance::HalfMarathon);
        assert_eq!("marathon".parse::<RaceDistance>().unwrap(), RaceDistance::Marathon);
        assert!("400".parse::<RaceDistance>().is_err());
    }

    #[test]
    fn test_distance_from_meters() {
        assert_eq!(RaceDistance::from_meters(21_097.5), Some(RaceDistance::HalfMarathon));
        assert_eq!(RaceDistance::from_meters(21_000.0), None);
    }

    #[test]
    fn test_distance_serializes_as_meter_key() {
        let json = serde_json::to_string(&RaceDistance::HalfMarathon).unwrap();
        assert_eq!(json, "\"21097.5\"");
    }

    #[test]
    fn test_distance_deserializes_from_number_or_key() {
        let numeric: RaceDistance = serde_json::from_str("5000").unwrap();
        assert_eq!(numeric, RaceDistance::M5000);
        let half: RaceDistance = serde_json::from_str("21097.5").unwrap();
        assert_eq!(half, RaceDistance::HalfMarathon);
        let keyed: RaceDistance = serde_json::from_str("\"42195\"").unwrap();
        assert_eq!(keyed, RaceDistance::Marathon);
        let alias: RaceDistance = serde_json::from_str("\"10k\"").unwrap();
        assert_eq!(alias, RaceDistance::M10000);

        let error = serde_json::from_str::<RaceDistance>("400").unwrap_err();
        assert!(error.to_string().contains("No calibration data for 400 meters"));
        assert!(serde_json::from_str::<RaceDistance>("true").is_err());
    }

    #[test]
    fn test_time_input_formats() {
        let full: TimeInput = "1:05:30".parse().unwrap();
        assert!((full.total_seconds() - 3_930.0).abs() < f64::EPSILON);

        let short: TimeInput = "28:20".parse().unwrap();
        assert!((short.total_seconds() - 1_700.0).abs() < f64::EPSILON);

        let plain: TimeInput = "1700".parse().unwrap();
        assert!((plain.total_seconds() - 1_700.0).abs() < f64::EPSILON);

        let tenths: TimeInput = "2:03.4".parse().unwrap();
        assert!((tenths.total_seconds() - 123.4).abs() < 1e-9);
    }

    #[test]
    fn test_time_input_rejects_malformed() {
        assert!("".parse::<TimeInput>().is_err());
        assert!("1:2:3:4".parse::<TimeInput>().is_err());
        assert!("28:75".parse::<TimeInput>().is_err());
        assert!("1:75:00".parse::<TimeInput>().is_err());
        assert!("abc".parse::<TimeInput>().is_err());
        assert!("-5".parse::<TimeInput>().is_err());
    }

    #[test]
    fn test_zero_time_parses_so_pipeline_can_report_it() {
        let zero: TimeInput = "0:00".parse().unwrap();
        assert!(zero.total_seconds().abs() < f64::EPSILON);
    }
}
