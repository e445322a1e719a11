// ABOUTME: Plan generators: weekly micro-cycle, four-week meso-cycle and key workouts
// ABOUTME: Each generator is independent and returns fixed-size output for every input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Four-week block outlines
pub mod mesocycle;

/// Seven-day templates and phase transforms
pub mod weekly;

/// Key-session templates
pub mod workouts;

pub use mesocycle::generate_mesocycle;
pub use weekly::generate_weekly_plan;
pub use workouts::generate_workouts;
