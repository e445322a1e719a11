// ABOUTME: Core types and constants for the Runlab training engine
// ABOUTME: Foundation crate with error handling, athlete and plan models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlab Core
//!
//! Foundation crate providing shared types and constants for the Runlab
//! training engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `ValidationError` for engine input, `ConfigError` for configuration,
//!   and the outer `AppError` with `ErrorCode`
//! - **models**: Performance samples, athlete profile, conditions, pace zones and plans
//! - **constants**: Service names and unit conversions

/// Unified error handling with validation, configuration and application errors
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (samples, profiles, paces, plans, recommendations)
pub mod models;
