// ABOUTME: Helper modules for runlab-cli
// ABOUTME: Output printing shared by all commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
