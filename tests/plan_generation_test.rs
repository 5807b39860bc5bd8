// ABOUTME: End-to-end tests for full plan generation across dietary profiles
// ABOUTME: Covers determinism, plan shape, Jain and allergy exclusions, and same-day variety
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{
    init_test_logging, jain_north_weight_loss, meal_bodies, non_veg_south_muscle_gain,
    sample_profiles, vegan_dairy_allergic, vegetarian_west,
};
use nutriplan::constants::PLAN_DAYS;
use nutriplan::diet::catalogs::{FoodCatalogs, DAIRY_TERMS, JAIN_EXCLUDED_TERMS};
use nutriplan::diet::dedup::ANNOTATION_SEPARATOR;
use nutriplan::diet::{generate_plan, DietPlanGenerator, FoodIndex, PlanAudit};
use nutriplan::models::{DayPlan, MealSlot};

fn meals_of(day: &DayPlan) -> Vec<String> {
    day.meals().map(|(_, text)| text.to_owned()).collect()
}

#[test]
fn test_generation_is_deterministic() {
    init_test_logging();
    let generator = DietPlanGenerator::default();
    for profile in sample_profiles() {
        assert_eq!(generator.generate(&profile), generator.generate(&profile));
    }
}

#[test]
fn test_plan_has_every_day_and_meal() {
    init_test_logging();
    let plan = DietPlanGenerator::default().generate(&vegetarian_west());
    assert_eq!(plan.len(), PLAN_DAYS as usize);

    for (i, day) in plan.iter().enumerate() {
        assert_eq!(day.day as usize, i + 1);
        let slots: Vec<MealSlot> = day.meals().map(|(slot, _)| slot).collect();
        assert_eq!(slots, MealSlot::ORDER.to_vec());
        for (slot, text) in day.meals() {
            assert!(!text.trim().is_empty(), "day {} {slot} is empty", day.day);
            assert!(
                text.contains(ANNOTATION_SEPARATOR),
                "day {} {slot} lacks a benefit annotation: {text}",
                day.day
            );
        }
    }
}

#[test]
fn test_jain_north_weight_loss_end_to_end() {
    init_test_logging();
    let plan = DietPlanGenerator::default().generate(&jain_north_weight_loss());
    assert_eq!(plan.len(), 75);

    let breakfast = &meal_bodies(&plan[0])[0];
    for term in JAIN_EXCLUDED_TERMS {
        assert!(!breakfast.contains(term), "'{term}' in day 1 breakfast: {breakfast}");
    }

    assert_ne!(meals_of(&plan[0]), meals_of(&plan[15]));
}

#[test]
fn test_jain_plan_never_names_excluded_foods() {
    init_test_logging();
    let plan = DietPlanGenerator::default().generate(&jain_north_weight_loss());
    for day in &plan {
        for body in meal_bodies(day) {
            for term in JAIN_EXCLUDED_TERMS {
                assert!(!body.contains(term), "'{term}' on day {}: {body}", day.day);
            }
        }
    }
}

#[test]
fn test_vegan_dairy_allergy_excludes_dairy_everywhere() {
    init_test_logging();
    let profile = vegan_dairy_allergic();

    let catalogs = FoodCatalogs::for_profile(&profile, FoodIndex::global());
    for name in catalogs.all_names() {
        let lowered = name.to_lowercase();
        for term in DAIRY_TERMS {
            assert!(!lowered.contains(term), "catalog entry '{name}' contains '{term}'");
        }
    }

    let plan = DietPlanGenerator::default().generate(&profile);
    for day in &plan {
        for body in meal_bodies(day) {
            for term in DAIRY_TERMS {
                assert!(!body.contains(term), "'{term}' on day {}: {body}", day.day);
            }
        }
    }
}

#[test]
fn test_allergy_terms_reach_generated_non_veg_dishes() {
    init_test_logging();
    let generator = DietPlanGenerator::default();
    for allergy in ["curry", "stew"] {
        let profile = non_veg_south_muscle_gain().with_allergies(allergy);
        let plan = generator.generate(&profile);
        assert_eq!(plan.len(), PLAN_DAYS as usize);
        for day in &plan {
            for body in meal_bodies(day) {
                assert!(!body.contains(allergy), "'{allergy}' on day {}: {body}", day.day);
            }
        }
    }
}

#[test]
fn test_no_food_repeats_within_a_day() {
    init_test_logging();
    let generator = DietPlanGenerator::default();
    for profile in sample_profiles() {
        let plan = generator.generate(&profile);
        let audit = PlanAudit::run(generator.index(), &plan);
        assert!(
            audit.is_clean(),
            "{} plan repeats foods: {:?}",
            profile.dietary_preference,
            audit.same_day_repeats
        );
        assert!(audit.distinct_identities > 20);
    }
}

#[test]
fn test_consecutive_days_differ() {
    init_test_logging();
    let plan = DietPlanGenerator::default().generate(&vegetarian_west());
    for pair in plan.windows(2) {
        assert_ne!(meals_of(&pair[0]), meals_of(&pair[1]), "day {}", pair[1].day);
    }
}

#[test]
fn test_dates_follow_start_date() {
    init_test_logging();
    let start = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
    let plan = DietPlanGenerator::default().generate(&vegetarian_west().with_start_date(start));
    assert_eq!(plan[0].date, Some(start));
    assert_eq!(plan[12].date, NaiveDate::from_ymd_opt(2026, 1, 1));
    assert_eq!(plan[74].date, NaiveDate::from_ymd_opt(2026, 3, 4));
}

#[test]
fn test_wellness_notes_and_targets() {
    init_test_logging();
    let plan = DietPlanGenerator::default().generate(&vegetarian_west());
    assert!(plan.iter().all(|day| !day.wellness_notes.is_empty()));
    assert!(plan[6].wellness_notes.iter().any(|note| note.starts_with("Weekly check-in")));
    let first = &plan[0];
    assert!(plan
        .iter()
        .all(|day| day.calories_kcal == first.calories_kcal
            && (day.water_liters - first.water_liters).abs() < f64::EPSILON));
}

#[test]
fn test_global_convenience_matches_default_generator() {
    init_test_logging();
    let profile = vegan_dairy_allergic();
    assert_eq!(
        generate_plan(&profile),
        DietPlanGenerator::default().generate(&profile)
    );
}

#[test]
fn test_plan_serializes_to_json() {
    init_test_logging();
    let plan = DietPlanGenerator::default().generate(&jain_north_weight_loss());
    let json = serde_json::to_value(&plan[0]).unwrap();
    assert_eq!(json["day"], 1);
    assert_eq!(json["breakfast"], plan[0].breakfast.as_str());
    assert!(json["dinner"].is_string());
    assert!(json.get("date").is_none());
}
