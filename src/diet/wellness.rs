// ABOUTME: Auxiliary day-record annotations: calorie estimate, water target, wellness notes
// ABOUTME: Fixed per-kilogram tables with gender floors and rotating notes per wellness goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Wellness Annotations
//!
//! Every day-record carries a calorie estimate, a water target and a few
//! lifestyle notes. The numbers are table lookups, not metabolic formulas:
//! kilocalories per kilogram by fitness goal plus an exercise increment,
//! floored per gender and rounded to the nearest 50.

use crate::config::HydrationConfig;
use nutriplan_core::models::{ExerciseFrequency, FitnessGoal, Gender, UserProfile, WellnessGoal};

/// Lowest daily estimate for women
pub const FEMALE_FLOOR_KCAL: u32 = 1200;
/// Lowest daily estimate for men
pub const MALE_FLOOR_KCAL: u32 = 1500;

/// Water target bounds in litres
const MIN_WATER_LITERS: f64 = 1.5;
const MAX_WATER_LITERS: f64 = 5.0;

const fn kcal_per_kg(goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::WeightLoss => 24.0,
        FitnessGoal::Maintenance => 30.0,
        FitnessGoal::MuscleGain => 33.0,
        FitnessGoal::Endurance => 34.0,
    }
}

const fn exercise_kcal_per_kg(frequency: ExerciseFrequency) -> f64 {
    match frequency {
        ExerciseFrequency::Sedentary => 0.0,
        ExerciseFrequency::Light => 1.0,
        ExerciseFrequency::Moderate => 2.0,
        ExerciseFrequency::Active => 4.0,
    }
}

/// Estimated daily intake in kilocalories
#[must_use]
pub fn daily_calories(profile: &UserProfile) -> u32 {
    let per_kg = kcal_per_kg(profile.fitness_goal) + exercise_kcal_per_kg(profile.exercise_frequency);
    let estimate = (profile.weight_kg * per_kg / 50.0).round() * 50.0;
    let floor = match profile.gender {
        Gender::Female => FEMALE_FLOOR_KCAL,
        Gender::Male => MALE_FLOOR_KCAL,
    };
    (estimate.max(0.0) as u32).max(floor)
}

/// Daily water target in litres, rounded to a quarter litre
#[must_use]
pub fn water_target(profile: &UserProfile, hydration: &HydrationConfig) -> f64 {
    let bonus = match profile.exercise_frequency {
        ExerciseFrequency::Sedentary => 0.0,
        ExerciseFrequency::Light => hydration.light_bonus_liters,
        ExerciseFrequency::Moderate => hydration.moderate_bonus_liters,
        ExerciseFrequency::Active => hydration.active_bonus_liters,
    };
    let liters = profile.weight_kg * hydration.ml_per_kg / 1000.0 + bonus;
    ((liters * 4.0).round() / 4.0).clamp(MIN_WATER_LITERS, MAX_WATER_LITERS)
}

const fn notes_for(goal: WellnessGoal) -> &'static [&'static str] {
    match goal {
        WellnessGoal::BetterSleep => &[
            "Finish dinner at least two hours before bed",
            "Keep screens away for the last half hour of the day",
            "Go to bed and wake up at the same time, weekends included",
            "Skip caffeinated drinks after mid-afternoon",
        ],
        WellnessGoal::StressRelief => &[
            "Take five minutes of slow breathing before lunch",
            "Step outside for a short walk after a long sitting stretch",
            "Write down three things that went well today",
            "Eat meals seated and away from work",
        ],
        WellnessGoal::GutHealth => &[
            "Chew each bite slowly and eat without hurrying",
            "Keep meal times regular across the day",
            "Take a gentle ten-minute walk after dinner",
            "Sip warm water through the morning",
        ],
        WellnessGoal::MoreEnergy => &[
            "Get ten minutes of morning sunlight",
            "Stand up and stretch once every hour",
            "Keep a water bottle within reach all day",
            "Avoid skipping the mid-morning snack",
        ],
        WellnessGoal::HormonalBalance => &[
            "Aim for seven to eight hours of sleep",
            "Include strength work twice this week",
            "Keep sugary drinks and packaged sweets to a minimum",
            "Spend a few quiet minutes unwinding before bed",
        ],
        WellnessGoal::Immunity => &[
            "Wash hands before every meal",
            "Get some daylight and fresh air today",
            "Rest well when you feel run down",
            "Eat a colourful mix of seasonal produce",
        ],
    }
}

/// Notes for a 1-based `day`, one per wellness goal plus a weekly check-in
#[must_use]
pub fn wellness_notes(goals: &[WellnessGoal], day: u32) -> Vec<String> {
    let day_index = day.saturating_sub(1) as usize;
    let mut notes: Vec<String> = Vec::with_capacity(goals.len() + 1);
    for goal in goals {
        let pool = notes_for(*goal);
        let note = pool[day_index % pool.len()].to_owned();
        if !notes.contains(&note) {
            notes.push(note);
        }
    }
    if day % 7 == 0 {
        notes.push("Weekly check-in: note your weight, energy and sleep".to_owned());
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diet::index::FoodIndex;
    use nutriplan_core::models::DietaryPreference;

    fn profile(gender: Gender, weight: f64, goal: FitnessGoal) -> UserProfile {
        UserProfile::new(DietaryPreference::Vegetarian, gender, weight, goal)
    }

    #[test]
    fn test_calories_follow_goal_and_exercise() {
        let base = profile(Gender::Male, 70.0, FitnessGoal::Maintenance);
        assert_eq!(daily_calories(&base), 2100);
        let active = base.clone().with_exercise_frequency(ExerciseFrequency::Active);
        assert_eq!(daily_calories(&active), 2400);
        let cutting = profile(Gender::Male, 70.0, FitnessGoal::WeightLoss);
        assert!(daily_calories(&cutting) < daily_calories(&base));
    }

    #[test]
    fn test_calorie_floor_by_gender() {
        let light = profile(Gender::Female, 40.0, FitnessGoal::WeightLoss);
        assert_eq!(daily_calories(&light), FEMALE_FLOOR_KCAL);
        let light = profile(Gender::Male, 40.0, FitnessGoal::WeightLoss);
        assert_eq!(daily_calories(&light), MALE_FLOOR_KCAL);
    }

    #[test]
    fn test_water_target_rounds_and_clamps() {
        let hydration = HydrationConfig::default();
        let p = profile(Gender::Female, 60.0, FitnessGoal::Maintenance);
        assert!((water_target(&p, &hydration) - 2.0).abs() < f64::EPSILON);
        let p = p.with_exercise_frequency(ExerciseFrequency::Moderate);
        assert!((water_target(&p, &hydration) - 2.5).abs() < f64::EPSILON);
        let heavy = profile(Gender::Male, 200.0, FitnessGoal::Maintenance);
        assert!((water_target(&heavy, &hydration) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_notes_rotate_and_add_weekly_check_in() {
        let goals = [WellnessGoal::BetterSleep];
        assert_ne!(wellness_notes(&goals, 1), wellness_notes(&goals, 2));
        assert_eq!(wellness_notes(&goals, 1), wellness_notes(&goals, 5));
        assert_eq!(wellness_notes(&goals, 7).len(), 2);
        assert!(wellness_notes(&[], 3).is_empty());
    }

    #[test]
    fn test_notes_name_no_food() {
        let index = FoodIndex::global();
        let goals = [
            WellnessGoal::BetterSleep,
            WellnessGoal::StressRelief,
            WellnessGoal::GutHealth,
            WellnessGoal::MoreEnergy,
            WellnessGoal::HormonalBalance,
            WellnessGoal::Immunity,
        ];
        for day in 1..=7 {
            for note in wellness_notes(&goals, day) {
                assert!(index.identities_in(&note).is_empty(), "{note}");
            }
        }
    }
}
