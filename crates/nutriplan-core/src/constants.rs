// ABOUTME: Plan-shape constants for the nutriplan engine
// ABOUTME: Plan length, base rotation cycle, meals per day, and body-weight bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

/// Number of day-records in a full plan
pub const PLAN_DAYS: u32 = 75;

/// Length of the base catalog rotation cycle in days
pub const CYCLE_DAYS: u32 = 15;

/// Meals produced for every day
pub const MEALS_PER_DAY: usize = 5;

/// Service name used in structured logs
pub const SERVICE_NAME: &str = "nutriplan";

/// Body-weight bounds accepted from the profile collector
pub mod body_weight {
    /// Lightest accepted body weight in kilograms
    pub const MIN_KG: f64 = 25.0;
    /// Heaviest accepted body weight in kilograms
    pub const MAX_KG: f64 = 250.0;
}
