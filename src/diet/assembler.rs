// ABOUTME: Plan assembler driving the day loop across all five meal selectors
// ABOUTME: Resets daily memory, composes meals in order, normalizes output, attaches annotations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Plan Assembler
//!
//! [`DietPlanGenerator::generate`] is a pure transform from a profile to
//! exactly `plan_days` day-records. For each day the daily memory is reset,
//! the five selectors run in slot order (each meal recorded into memory
//! before the next is composed), every finished meal goes through output
//! normalization, and the calorie, water and wellness annotations are
//! attached.

use crate::config::PlannerConfig;
use crate::diet::audit::PlanAudit;
use crate::diet::catalogs::{all_seed_names, FoodCatalogs};
use crate::diet::dedup::DedupEngine;
use crate::diet::index::FoodIndex;
use crate::diet::memory::DailyFoodMemory;
use crate::diet::patterns::PatternOffsets;
use crate::diet::selectors::{selector_for, MealContext, PlanInputs};
use crate::diet::synonyms::{SynonymResolver, DEFAULT_MIN_CONTAINMENT_LEN};
use crate::diet::wellness::{daily_calories, water_target, wellness_notes};
use chrono::Days;
use nutriplan_core::models::{DayPlan, MealSlot, UserProfile};
use tracing::{debug, info, instrument, warn};

/// Deterministic plan generator
#[derive(Debug, Clone)]
pub struct DietPlanGenerator {
    config: PlannerConfig,
    custom_index: Option<FoodIndex>,
}

impl Default for DietPlanGenerator {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl DietPlanGenerator {
    /// Generator for a configuration
    ///
    /// A non-default matching threshold builds a dedicated food index;
    /// otherwise the shared built-in index is used.
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        let min_len = config.matching.min_containment_len;
        let custom_index = (min_len != DEFAULT_MIN_CONTAINMENT_LEN)
            .then(|| FoodIndex::build(all_seed_names(), SynonymResolver::new(min_len)));
        Self {
            config,
            custom_index,
        }
    }

    /// Generator using the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(PlannerConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Food index in use
    #[must_use]
    pub fn index(&self) -> &FoodIndex {
        self.custom_index.as_ref().unwrap_or_else(|| FoodIndex::global())
    }

    /// Generate the full plan for a profile
    #[must_use]
    #[instrument(skip_all, fields(preference = %profile.dietary_preference, plan_days = self.config.plan_days))]
    pub fn generate(&self, profile: &UserProfile) -> Vec<DayPlan> {
        let index = self.index();
        let catalogs = FoodCatalogs::for_profile(profile, index);
        let offsets = PatternOffsets::generate(
            self.config.plan_days as usize,
            self.config.cycle_days as usize,
        );
        let inputs = PlanInputs {
            profile,
            catalogs: &catalogs,
            offsets: &offsets,
            dedup: DedupEngine::new(index, *index.resolver()),
            schedule: &self.config.schedule,
        };
        let calories = daily_calories(profile);
        let water = water_target(profile, &self.config.hydration);
        debug!(calories, water, "Daily targets computed");

        let mut memory = DailyFoodMemory::new(index);
        let plan: Vec<DayPlan> = (1..=self.config.plan_days)
            .map(|day| {
                let mut record = generate_day(&inputs, &mut memory, day);
                record.calories_kcal = calories;
                record.water_liters = water;
                record
            })
            .collect();

        let audit = PlanAudit::run(index, &plan);
        if !audit.is_clean() {
            warn!(
                repeats = audit.same_day_repeats.len(),
                days = ?audit.repeat_days(),
                "Generated plan repeats a food within a day"
            );
        }
        info!(
            days = plan.len(),
            distinct_foods = audit.distinct_identities,
            "Generated nutrition plan"
        );
        plan
    }
}

/// Compose, normalize and annotate one day
fn generate_day(inputs: &PlanInputs<'_>, memory: &mut DailyFoodMemory<'_>, day: u32) -> DayPlan {
    memory.reset(day);
    let meals = MealSlot::ORDER.map(|slot| {
        let text = {
            let mut ctx = MealContext::new(inputs, memory, day);
            selector_for(slot).compose(&mut ctx)
        };
        memory.record(day, &text);
        text
    });
    let meals = meals.map(|meal| inputs.dedup.normalize_output(&meal).into_text());

    let profile = inputs.profile;
    let mut record = DayPlan::new(day, meals);
    record.date = profile
        .start_date
        .and_then(|start| start.checked_add_days(Days::new(u64::from(day - 1))));
    record.wellness_notes = wellness_notes(&profile.wellness_goals, day);
    record
}

/// Generate a plan with the process-wide configuration
#[must_use]
pub fn generate_plan(profile: &UserProfile) -> Vec<DayPlan> {
    DietPlanGenerator::from_global().generate(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nutriplan_core::models::{DietaryPreference, FitnessGoal, Gender, Region};

    fn profile() -> UserProfile {
        UserProfile::new(
            DietaryPreference::Vegetarian,
            Gender::Female,
            58.0,
            FitnessGoal::Maintenance,
        )
        .with_region(Region::West)
    }

    #[test]
    fn test_generates_contiguous_days() {
        let plan = DietPlanGenerator::default().generate(&profile());
        assert_eq!(plan.len(), 75);
        for (i, record) in plan.iter().enumerate() {
            assert_eq!(record.day as usize, i + 1);
            assert!(record.date.is_none());
        }
    }

    #[test]
    fn test_shorter_plan_and_dates() {
        let config = PlannerConfig {
            plan_days: 10,
            cycle_days: 5,
            ..PlannerConfig::default()
        };
        let start = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let plan = DietPlanGenerator::new(config).generate(&profile().with_start_date(start));
        assert_eq!(plan.len(), 10);
        assert_eq!(plan[0].date, Some(start));
        assert_eq!(plan[2].date, NaiveDate::from_ymd_opt(2025, 2, 1));
    }

    #[test]
    fn test_custom_threshold_builds_own_index() {
        let mut config = PlannerConfig::default();
        config.matching.min_containment_len = 5;
        let generator = DietPlanGenerator::new(config);
        assert_eq!(generator.index().resolver().min_containment_len(), 5);
        assert!(DietPlanGenerator::default().custom_index.is_none());
    }

    #[test]
    fn test_annotations_attached() {
        let plan = DietPlanGenerator::default().generate(&profile());
        assert!(plan.iter().all(|day| day.calories_kcal >= 1200));
        assert!(plan.iter().all(|day| day.water_liters >= 1.5));
    }
}
