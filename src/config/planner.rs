// ABOUTME: Planner configuration: plan length, rotation cycle, cadences, matching, hydration
// ABOUTME: Loaded once from defaults plus NUTRIPLAN_* environment overrides and validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::ConfigError;
use nutriplan_core::constants::{CYCLE_DAYS, PLAN_DAYS};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Longest plan accepted
const MAX_PLAN_DAYS: u32 = 366;

static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Recurring day pattern: a 1-based day hits when `day % every == offset % every`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cadence {
    /// Period in days; zero disables the cadence
    pub every: u32,
    /// Phase within the period
    pub offset: u32,
}

impl Cadence {
    /// Cadence with the given period and phase
    #[must_use]
    pub const fn new(every: u32, offset: u32) -> Self {
        Self { every, offset }
    }

    /// Cadence that never fires
    #[must_use]
    pub const fn never() -> Self {
        Self::new(0, 0)
    }

    /// Whether the 1-based `day` falls on this cadence
    #[must_use]
    pub const fn hits(&self, day: u32) -> bool {
        self.every != 0 && day % self.every == self.offset % self.every
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.every, self.offset)
    }
}

impl FromStr for Cadence {
    type Err = ConfigError;

    /// Parses "every:offset" or a bare "every" (offset 0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (every, offset) = s.trim().split_once(':').unwrap_or((s.trim(), "0"));
        let every = every
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid cadence period '{s}'")))?;
        let offset = offset
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid cadence offset '{s}'")))?;
        Ok(Self::new(every, offset))
    }
}

/// When regional, non-vegetarian and enrichment variants replace the defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Regional breakfast days
    pub regional_breakfast: Cadence,
    /// Regional lunch days
    pub regional_lunch: Cadence,
    /// Regional dinner days
    pub regional_dinner: Cadence,
    /// Regional evening snack days
    pub regional_snack: Cadence,
    /// Non-vegetarian lunch days
    pub non_veg_lunch: Cadence,
    /// Non-vegetarian dinner days; must never coincide with lunch days
    pub non_veg_dinner: Cadence,
    /// Days a regional non-vegetarian dish is preferred over a generic one
    pub regional_non_veg: Cadence,
    /// Prebiotic breakfast days
    pub enrich_breakfast: Cadence,
    /// Probiotic lunch days
    pub enrich_lunch: Cadence,
    /// Prebiotic dinner days
    pub enrich_dinner: Cadence,
    /// Lunch days offering rice as an alternative to roti
    pub rice_alternative: Cadence,
    /// Dinner days built around a one-pot main
    pub dinner_main: Cadence,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            regional_breakfast: Cadence::new(4, 0),
            regional_lunch: Cadence::new(5, 3),
            regional_dinner: Cadence::new(6, 5),
            regional_snack: Cadence::new(3, 2),
            non_veg_lunch: Cadence::new(3, 1),
            non_veg_dinner: Cadence::new(3, 2),
            regional_non_veg: Cadence::new(2, 0),
            enrich_breakfast: Cadence::new(3, 0),
            enrich_lunch: Cadence::new(2, 0),
            enrich_dinner: Cadence::new(4, 1),
            rice_alternative: Cadence::new(3, 0),
            dinner_main: Cadence::new(2, 0),
        }
    }
}

/// Synonym matching aggressiveness
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Shortest name that may match by word containment
    pub min_containment_len: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_containment_len: 4,
        }
    }
}

/// Water target factors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HydrationConfig {
    /// Base intake per kilogram of body weight
    pub ml_per_kg: f64,
    /// Extra litres for light exercise
    pub light_bonus_liters: f64,
    /// Extra litres for moderate exercise
    pub moderate_bonus_liters: f64,
    /// Extra litres for active training
    pub active_bonus_liters: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            ml_per_kg: 35.0,
            light_bonus_liters: 0.25,
            moderate_bonus_liters: 0.5,
            active_bonus_liters: 0.75,
        }
    }
}

/// Complete planner configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Number of day-records generated
    pub plan_days: u32,
    /// Base rotation cycle length
    pub cycle_days: u32,
    /// Variant cadences
    pub schedule: ScheduleConfig,
    /// Synonym matching settings
    pub matching: MatchingConfig,
    /// Water target settings
    pub hydration: HydrationConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            plan_days: PLAN_DAYS,
            cycle_days: CYCLE_DAYS,
            schedule: ScheduleConfig::default(),
            matching: MatchingConfig::default(),
            hydration: HydrationConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first setting that is out of bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plan_days == 0 || self.plan_days > MAX_PLAN_DAYS {
            return Err(ConfigError::ValueOutOfRange("plan_days must be within 1..=366"));
        }
        if self.cycle_days == 0 || self.cycle_days > self.plan_days {
            return Err(ConfigError::InvalidRange(
                "cycle_days must be within 1..=plan_days",
            ));
        }

        let lunch = self.schedule.non_veg_lunch;
        let dinner = self.schedule.non_veg_dinner;
        if (1..=self.plan_days).any(|day| lunch.hits(day) && dinner.hits(day)) {
            return Err(ConfigError::InvalidRange(
                "non_veg_lunch and non_veg_dinner must never fall on the same day",
            ));
        }

        if self.matching.min_containment_len < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_containment_len must be at least 2",
            ));
        }

        let hydration = &self.hydration;
        if !(20.0..=60.0).contains(&hydration.ml_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "ml_per_kg must be within 20..=60",
            ));
        }
        let bonuses = [
            hydration.light_bonus_liters,
            hydration.moderate_bonus_liters,
            hydration.active_bonus_liters,
        ];
        if bonuses.iter().any(|bonus| !(0.0..=2.0).contains(bonus)) {
            return Err(ConfigError::ValueOutOfRange(
                "exercise water bonuses must be within 0..=2 litres",
            ));
        }
        if !(bonuses[0] <= bonuses[1] && bonuses[1] <= bonuses[2]) {
            return Err(ConfigError::InvalidRange(
                "exercise water bonuses must not decrease with activity",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        apply_env_var("NUTRIPLAN_PLAN_DAYS", &mut self.plan_days)?;
        apply_env_var("NUTRIPLAN_CYCLE_DAYS", &mut self.cycle_days)?;
        apply_env_var(
            "NUTRIPLAN_MIN_CONTAINMENT_LEN",
            &mut self.matching.min_containment_len,
        )?;
        apply_env_var("NUTRIPLAN_WATER_ML_PER_KG", &mut self.hydration.ml_per_kg)?;

        let schedule = &mut self.schedule;
        apply_env_var("NUTRIPLAN_REGIONAL_BREAKFAST", &mut schedule.regional_breakfast)?;
        apply_env_var("NUTRIPLAN_REGIONAL_LUNCH", &mut schedule.regional_lunch)?;
        apply_env_var("NUTRIPLAN_REGIONAL_DINNER", &mut schedule.regional_dinner)?;
        apply_env_var("NUTRIPLAN_REGIONAL_SNACK", &mut schedule.regional_snack)?;
        apply_env_var("NUTRIPLAN_NON_VEG_LUNCH", &mut schedule.non_veg_lunch)?;
        apply_env_var("NUTRIPLAN_NON_VEG_DINNER", &mut schedule.non_veg_dinner)?;
        apply_env_var("NUTRIPLAN_REGIONAL_NON_VEG", &mut schedule.regional_non_veg)?;
        apply_env_var("NUTRIPLAN_ENRICH_BREAKFAST", &mut schedule.enrich_breakfast)?;
        apply_env_var("NUTRIPLAN_ENRICH_LUNCH", &mut schedule.enrich_lunch)?;
        apply_env_var("NUTRIPLAN_ENRICH_DINNER", &mut schedule.enrich_dinner)?;
        apply_env_var("NUTRIPLAN_RICE_ALTERNATIVE", &mut schedule.rice_alternative)?;
        apply_env_var("NUTRIPLAN_DINNER_MAIN", &mut schedule.dinner_main)?;

        Ok(self)
    }
}

/// Overwrite `target` with the parsed value of `env_var_name`, when set
fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
    }
    Ok(())
}
