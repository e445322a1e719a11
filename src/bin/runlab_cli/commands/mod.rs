// ABOUTME: Re-exports command modules for runlab-cli
// ABOUTME: Provides the calculate, paces, batch and options commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod batch;
pub mod calculate;
pub mod options;
pub mod paces;
