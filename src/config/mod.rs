// ABOUTME: Configuration module for plan shape, cadences, matching, and hydration settings
// ABOUTME: Defaults overridden by NUTRIPLAN_* environment variables and validated on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Configuration for the nutriplan generator
//!
//! - **Planner**: plan length, rotation cycle, regional/non-vegetarian/enrichment
//!   cadences, synonym matching threshold and hydration factors
//! - **Error**: configuration error type convertible into `AppError`

/// Configuration error type
pub mod error;
/// Planner settings with environment overrides
pub mod planner;

pub use error::ConfigError;
pub use planner::{Cadence, HydrationConfig, MatchingConfig, PlannerConfig, ScheduleConfig};
