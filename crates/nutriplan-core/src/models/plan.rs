// ABOUTME: Day-plan output model and the fixed meal-slot order
// ABOUTME: DayPlan carries five meal descriptions plus calorie, water, and wellness annotations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal slots in the order they are generated each day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Mid-morning snack
    MidMorningSnack,
    /// Lunch
    Lunch,
    /// Evening snack
    EveningSnack,
    /// Dinner
    Dinner,
}

impl MealSlot {
    /// Generation order within a day
    pub const ORDER: [Self; 5] = [
        Self::Breakfast,
        Self::MidMorningSnack,
        Self::Lunch,
        Self::EveningSnack,
        Self::Dinner,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MidMorningSnack => "Mid-morning snack",
            Self::Lunch => "Lunch",
            Self::EveningSnack => "Evening snack",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day of the generated plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Day number, starting at 1
    pub day: u32,
    /// Calendar date when the profile carries a start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Breakfast description
    pub breakfast: String,
    /// Mid-morning snack description
    pub mid_morning_snack: String,
    /// Lunch description
    pub lunch: String,
    /// Evening snack description
    pub evening_snack: String,
    /// Dinner description
    pub dinner: String,
    /// Estimated daily energy intake (kcal)
    pub calories_kcal: u32,
    /// Daily water target (liters)
    pub water_liters: f64,
    /// Wellness notes for the day
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wellness_notes: Vec<String>,
}

impl DayPlan {
    /// Build a day-record from meal descriptions given in `MealSlot::ORDER`
    #[must_use]
    pub fn new(day: u32, meals: [String; 5]) -> Self {
        let [breakfast, mid_morning_snack, lunch, evening_snack, dinner] = meals;
        Self {
            day,
            date: None,
            breakfast,
            mid_morning_snack,
            lunch,
            evening_snack,
            dinner,
            calories_kcal: 0,
            water_liters: 0.0,
            wellness_notes: Vec::new(),
        }
    }

    /// Description for one meal slot
    #[must_use]
    pub fn meal(&self, slot: MealSlot) -> &str {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::MidMorningSnack => &self.mid_morning_snack,
            MealSlot::Lunch => &self.lunch,
            MealSlot::EveningSnack => &self.evening_snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Mutable description for one meal slot
    pub fn meal_mut(&mut self, slot: MealSlot) -> &mut String {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::MidMorningSnack => &mut self.mid_morning_snack,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::EveningSnack => &mut self.evening_snack,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// All meals paired with their slot, in generation order
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &str)> {
        MealSlot::ORDER.into_iter().map(|slot| (slot, self.meal(slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DayPlan {
        DayPlan::new(
            3,
            [
                "Poha".to_owned(),
                "Apple".to_owned(),
                "Dal".to_owned(),
                "Makhana".to_owned(),
                "Khichdi".to_owned(),
            ],
        )
    }

    #[test]
    fn test_meals_follow_generation_order() {
        let plan = sample();
        let slots: Vec<MealSlot> = plan.meals().map(|(slot, _)| slot).collect();
        assert_eq!(slots, MealSlot::ORDER.to_vec());
        assert_eq!(plan.meal(MealSlot::EveningSnack), "Makhana");
    }

    #[test]
    fn test_meal_mut_edits_in_place() {
        let mut plan = sample();
        plan.meal_mut(MealSlot::Lunch).push_str(" tadka");
        assert_eq!(plan.lunch, "Dal tadka");
    }

    #[test]
    fn test_serialization_omits_absent_date() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("date").is_none());
        assert_eq!(json["mid_morning_snack"], "Apple");
    }
}
