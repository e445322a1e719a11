// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identifiers and unit conversion values shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Physiological calibration data lives next to the algorithms in
//! `runlab-intelligence`; this module only carries values every crate needs.

/// Service names used in structured logging
pub mod service_names {
    /// Default service name for the engine and CLI
    pub const RUNLAB: &str = "runlab";
}

/// Time unit conversions
pub mod units {
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: u32 = 60;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: u32 = 3_600;
}

/// Rounding helpers shared by display values
pub mod precision {
    /// Scale used for one-decimal rounding of VDOT and `VO2max`
    pub const ONE_DECIMAL_SCALE: f64 = 10.0;
}
