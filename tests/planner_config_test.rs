// ABOUTME: Integration tests for planner configuration loading from the environment
// ABOUTME: Validates NUTRIPLAN_* overrides, validation failures, and their effect on generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, vegetarian_west};
use nutriplan::config::{Cadence, ConfigError, PlannerConfig};
use nutriplan::diet::DietPlanGenerator;
use nutriplan::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "NUTRIPLAN_PLAN_DAYS",
    "NUTRIPLAN_CYCLE_DAYS",
    "NUTRIPLAN_MIN_CONTAINMENT_LEN",
    "NUTRIPLAN_WATER_ML_PER_KG",
    "NUTRIPLAN_REGIONAL_BREAKFAST",
    "NUTRIPLAN_NON_VEG_LUNCH",
    "NUTRIPLAN_NON_VEG_DINNER",
    "NUTRIPLAN_DINNER_MAIN",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    init_test_logging();
    clear_env();
    let config = PlannerConfig::load().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.plan_days, 75);
    assert_eq!(config.cycle_days, 15);
}

#[test]
#[serial]
fn test_environment_overrides_shape_the_plan() {
    init_test_logging();
    clear_env();
    env::set_var("NUTRIPLAN_PLAN_DAYS", "21");
    env::set_var("NUTRIPLAN_CYCLE_DAYS", "7");
    env::set_var("NUTRIPLAN_REGIONAL_BREAKFAST", "7:3");
    env::set_var("NUTRIPLAN_DINNER_MAIN", "0");

    let config = PlannerConfig::load().unwrap();
    clear_env();

    assert_eq!(config.plan_days, 21);
    assert_eq!(config.cycle_days, 7);
    assert_eq!(config.schedule.regional_breakfast, Cadence::new(7, 3));
    assert_eq!(config.schedule.dinner_main, Cadence::never());

    let plan = DietPlanGenerator::new(config).generate(&vegetarian_west());
    assert_eq!(plan.len(), 21);
}

#[test]
#[serial]
fn test_unparseable_value_is_a_config_error() {
    init_test_logging();
    clear_env();
    env::set_var("NUTRIPLAN_PLAN_DAYS", "seventy-five");
    let err = PlannerConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::Parse(_)));
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ConfigError);
    assert_eq!(app.code.exit_code(), 3);
}

#[test]
#[serial]
fn test_coinciding_non_veg_cadences_are_invalid() {
    init_test_logging();
    clear_env();
    env::set_var("NUTRIPLAN_NON_VEG_LUNCH", "2:0");
    env::set_var("NUTRIPLAN_NON_VEG_DINNER", "4:0");
    let err = PlannerConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::InvalidRange(_)));
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_cycle_longer_than_plan_is_invalid() {
    init_test_logging();
    clear_env();
    env::set_var("NUTRIPLAN_PLAN_DAYS", "10");
    env::set_var("NUTRIPLAN_CYCLE_DAYS", "15");
    let err = PlannerConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::InvalidRange(_)));
}

#[test]
#[serial]
fn test_matching_threshold_override_reaches_the_index() {
    init_test_logging();
    clear_env();
    env::set_var("NUTRIPLAN_MIN_CONTAINMENT_LEN", "6");
    let config = PlannerConfig::load().unwrap();
    clear_env();

    let generator = DietPlanGenerator::new(config);
    assert_eq!(generator.index().resolver().min_containment_len(), 6);
    assert_eq!(generator.generate(&vegetarian_west()).len(), 75);
}
