// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and ready-made user profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutriplan`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use nutriplan::diet::dedup::split_annotation;
use nutriplan::models::{
    DayPlan, DietaryPreference, ExerciseFrequency, FitnessGoal, Gender, Region, UserProfile,
    WellnessGoal,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Jain, North Indian, weight loss
pub fn jain_north_weight_loss() -> UserProfile {
    UserProfile::new(
        DietaryPreference::Jain,
        Gender::Female,
        64.0,
        FitnessGoal::WeightLoss,
    )
    .with_region(Region::North)
}

/// Vegan with a dairy allergy, East Indian
pub fn vegan_dairy_allergic() -> UserProfile {
    UserProfile::new(
        DietaryPreference::Vegan,
        Gender::Male,
        72.0,
        FitnessGoal::Maintenance,
    )
    .with_region(Region::East)
    .with_allergies("Dairy")
}

/// Non-vegetarian, South Indian, muscle gain, active
pub fn non_veg_south_muscle_gain() -> UserProfile {
    UserProfile::new(
        DietaryPreference::NonVegetarian,
        Gender::Male,
        78.0,
        FitnessGoal::MuscleGain,
    )
    .with_region(Region::South)
    .with_exercise_frequency(ExerciseFrequency::Active)
}

/// Vegetarian, West Indian, maintenance, with wellness goals
pub fn vegetarian_west() -> UserProfile {
    UserProfile::new(
        DietaryPreference::Vegetarian,
        Gender::Female,
        58.0,
        FitnessGoal::Maintenance,
    )
    .with_region(Region::West)
    .with_wellness_goals(vec![WellnessGoal::BetterSleep, WellnessGoal::GutHealth])
}

/// Eggetarian without a region, endurance
pub fn eggetarian_no_region() -> UserProfile {
    UserProfile::new(
        DietaryPreference::Eggetarian,
        Gender::Female,
        61.0,
        FitnessGoal::Endurance,
    )
    .with_exercise_frequency(ExerciseFrequency::Moderate)
}

/// Every sample profile
pub fn sample_profiles() -> Vec<UserProfile> {
    vec![
        jain_north_weight_loss(),
        vegan_dairy_allergic(),
        non_veg_south_muscle_gain(),
        vegetarian_west(),
        eggetarian_no_region(),
    ]
}

/// Meal bodies of a day, without benefit annotations, lowercased
pub fn meal_bodies(day: &DayPlan) -> Vec<String> {
    day.meals()
        .map(|(_, text)| split_annotation(text).0.to_lowercase())
        .collect()
}
