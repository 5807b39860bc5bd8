// ABOUTME: Data models shared by the plan generator and its consumers
// ABOUTME: Re-exports user profile inputs and day-plan output records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

/// Day-plan output records and meal slots
pub mod plan;
/// User profile inputs consumed by the generator
pub mod profile;

pub use plan::{DayPlan, MealSlot};
pub use profile::{
    parse_allergies, DietaryPreference, ExerciseFrequency, FitnessGoal, Gender, Region,
    UserProfile, WellnessGoal,
};
