// ABOUTME: Plan audit reporting same-day food repeats and variety statistics
// ABOUTME: Resolves every meal through the food index, ignoring benefit annotations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::diet::dedup::split_annotation;
use crate::diet::index::{FoodIdentity, FoodIndex};
use nutriplan_core::models::{DayPlan, MealSlot};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Identities reported in the most-frequent list
const TOP_IDENTITIES: usize = 10;

/// One food mentioned more than once on the same day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatFinding {
    /// Day number, 1-based
    pub day: u32,
    /// Repeated identity
    pub identity: FoodIdentity,
    /// Meal of each mention, in meal order
    pub slots: Vec<MealSlot>,
}

/// Variety and repetition summary of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanAudit {
    /// Day-records audited
    pub days: usize,
    /// Same-day repeats, in day order
    pub same_day_repeats: Vec<RepeatFinding>,
    /// Distinct identities across the plan
    pub distinct_identities: usize,
    /// Most frequent identities with their number of mentions
    pub most_frequent: Vec<(FoodIdentity, usize)>,
}

impl PlanAudit {
    /// Audit a generated plan
    #[must_use]
    pub fn run(index: &FoodIndex, plan: &[DayPlan]) -> Self {
        let mut same_day_repeats = Vec::new();
        let mut frequency: BTreeMap<FoodIdentity, usize> = BTreeMap::new();

        for day in plan {
            let mut seen: BTreeMap<FoodIdentity, Vec<MealSlot>> = BTreeMap::new();
            for (slot, text) in day.meals() {
                let (body, _) = split_annotation(text);
                for mention in index.mentions(body) {
                    for identity in mention.identities {
                        seen.entry(identity).or_default().push(slot);
                    }
                }
            }
            for (identity, slots) in seen {
                *frequency.entry(identity.clone()).or_default() += slots.len();
                if slots.len() > 1 {
                    same_day_repeats.push(RepeatFinding {
                        day: day.day,
                        identity,
                        slots,
                    });
                }
            }
        }

        let distinct_identities = frequency.len();
        let mut most_frequent: Vec<(FoodIdentity, usize)> = frequency.into_iter().collect();
        most_frequent.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        most_frequent.truncate(TOP_IDENTITIES);

        Self {
            days: plan.len(),
            same_day_repeats,
            distinct_identities,
            most_frequent,
        }
    }

    /// Whether no day repeats a food
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.same_day_repeats.is_empty()
    }

    /// Days with at least one repeat
    #[must_use]
    pub fn repeat_days(&self) -> BTreeSet<u32> {
        self.same_day_repeats.iter().map(|finding| finding.day).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(number: u32, meals: [&str; 5]) -> DayPlan {
        DayPlan::new(number, meals.map(str::to_owned))
    }

    #[test]
    fn test_detects_repeats_across_spellings() {
        let plan = vec![day(
            1,
            [
                "Idli (2 medium) with sambar (1 katori) | Benefit: light",
                "Apple (1 medium)",
                "Jowar roti (2 medium), dahi (1 katori)",
                "Roasted makhana (1 cup)",
                "Curd rice (1 cup)",
            ],
        )];
        let audit = PlanAudit::run(FoodIndex::global(), &plan);
        assert!(!audit.is_clean());
        let finding = &audit.same_day_repeats[0];
        assert_eq!(finding.day, 1);
        assert_eq!(finding.identity.as_str(), "curd");
        assert_eq!(finding.slots, vec![MealSlot::Lunch, MealSlot::Dinner]);
    }

    #[test]
    fn test_detects_repeats_inside_one_meal() {
        let plan = vec![day(
            2,
            [
                "Apple (1 medium) with apple (1 large)",
                "Roasted makhana (1 cup)",
                "Jowar roti (2 medium), curd (1 katori) with dahi (½ katori)",
                "Guava (1 medium)",
                "Moong dal khichdi (1 bowl)",
            ],
        )];
        let audit = PlanAudit::run(FoodIndex::global(), &plan);
        assert!(!audit.is_clean());
        let repeated: Vec<(&str, &[MealSlot])> = audit
            .same_day_repeats
            .iter()
            .map(|finding| (finding.identity.as_str(), finding.slots.as_slice()))
            .collect();
        assert_eq!(
            repeated,
            vec![
                ("apple", &[MealSlot::Breakfast, MealSlot::Breakfast][..]),
                ("curd", &[MealSlot::Lunch, MealSlot::Lunch][..]),
            ]
        );
    }

    #[test]
    fn test_clean_plan_and_frequency() {
        let plan = vec![
            day(1, ["Apple", "Papaya", "Jowar roti", "Makhana", "Toor dal"]),
            day(2, ["Apple", "Guava", "Bajra roti", "Makhana", "Moong dal"]),
        ];
        let audit = PlanAudit::run(FoodIndex::global(), &plan);
        assert!(audit.is_clean());
        assert_eq!(audit.days, 2);
        assert!(audit.repeat_days().is_empty());
        let top = &audit.most_frequent[0];
        assert_eq!(top.1, 2);
    }

    #[test]
    fn test_annotation_is_ignored() {
        let plan = vec![day(
            3,
            [
                "Apple | Benefit: papaya",
                "Papaya",
                "Jowar roti",
                "Makhana",
                "Toor dal",
            ],
        )];
        assert!(PlanAudit::run(FoodIndex::global(), &plan).is_clean());
    }
}
