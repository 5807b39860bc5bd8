// ABOUTME: Main library entry point for the nutriplan meal-plan generator
// ABOUTME: Exposes the diet engine, planner configuration, and structured logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! A deterministic generator of 75-day, five-meal Indian nutrition plans.
//! Given a user profile (dietary preference, allergies, region, gender,
//! weight and goals) it produces one record per day with breakfast,
//! mid-morning snack, lunch, evening snack and dinner, each with portions
//! and a short health-benefit annotation.
//!
//! ## Features
//!
//! - **Dietary filtering**: vegetarian, eggetarian, non-vegetarian, vegan and Jain catalogs
//! - **Allergy exclusion**: free-text allergy terms remove matching foods
//! - **Regional cuisine**: periodic North, South, East and West specialties
//! - **Variety**: per-day rotation patterns break the base cycle
//! - **No same-day repeats**: synonym-aware food identity across all five meals
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::diet::DietPlanGenerator;
//! use nutriplan::logging;
//! use nutriplan::models::{DietaryPreference, FitnessGoal, Gender, UserProfile};
//!
//! logging::init_from_env().ok();
//! let profile = UserProfile::new(
//!     DietaryPreference::Vegetarian,
//!     Gender::Female,
//!     62.0,
//!     FitnessGoal::WeightLoss,
//! );
//! let plan = DietPlanGenerator::default().generate(&profile);
//! assert_eq!(plan.len(), 75);
//! ```

/// Planner configuration and environment overrides
pub mod config;

/// Nutrition plan engine
pub mod diet;

/// Logging configuration and structured logging setup
pub mod logging;

pub use nutriplan_core::{constants, errors, models};
