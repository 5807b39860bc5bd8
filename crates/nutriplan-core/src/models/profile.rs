// ABOUTME: User profile model supplied by the external profile collector
// ABOUTME: Dietary preference, region, gender, fitness and wellness goals, allergies, exercise frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::constants::body_weight;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dietary preference driving which catalogs are eligible
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    /// Lacto-vegetarian (dairy allowed, no egg or meat)
    Vegetarian,
    /// Vegetarian plus eggs
    Eggetarian,
    /// Meat, fish, and eggs allowed
    NonVegetarian,
    /// No animal products
    Vegan,
    /// Vegetarian without onion, garlic, or root vegetables
    Jain,
}

impl DietaryPreference {
    /// Whether egg dishes may be substituted in
    #[must_use]
    pub const fn allows_egg(&self) -> bool {
        matches!(self, Self::Eggetarian | Self::NonVegetarian)
    }

    /// Whether meat, fish, and seafood dishes may be substituted in
    #[must_use]
    pub const fn allows_meat(&self) -> bool {
        matches!(self, Self::NonVegetarian)
    }

    /// Canonical kebab-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Eggetarian => "eggetarian",
            Self::NonVegetarian => "non-vegetarian",
            Self::Vegan => "vegan",
            Self::Jain => "jain",
        }
    }
}

impl FromStr for DietaryPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "vegetarian" | "veg" => Ok(Self::Vegetarian),
            "eggetarian" | "egg" | "ovo-vegetarian" => Ok(Self::Eggetarian),
            "non-vegetarian" | "non-veg" | "nonveg" | "omnivore" => Ok(Self::NonVegetarian),
            "vegan" | "plant-based" => Ok(Self::Vegan),
            "jain" => Ok(Self::Jain),
            other => Err(AppError::invalid_input(format!(
                "Unknown dietary preference: '{other}'. Valid options: vegetarian, eggetarian, non-vegetarian, vegan, jain"
            ))),
        }
    }
}

/// Regional cuisine family used for specialty overrides
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// North Indian cuisine
    North,
    /// South Indian cuisine
    South,
    /// East Indian cuisine
    East,
    /// West Indian cuisine
    West,
}

impl Region {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "north" | "north-indian" => Ok(Self::North),
            "south" | "south-indian" => Ok(Self::South),
            "east" | "east-indian" => Ok(Self::East),
            "west" | "west-indian" => Ok(Self::West),
            other => Err(AppError::invalid_input(format!(
                "Unknown region: '{other}'. Valid options: north, south, east, west"
            ))),
        }
    }
}

/// Gender used for portion scaling and calorie floors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    /// Male portion tables
    Male,
    /// Female portion tables
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "male" | "m" | "man" => Ok(Self::Male),
            "female" | "f" | "woman" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Fitness goal selected in the profile form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus with high protein
    MuscleGain,
    /// Endurance training support
    Endurance,
    /// Caloric balance
    Maintenance,
}

impl FitnessGoal {
    /// Canonical kebab-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::MuscleGain => "muscle-gain",
            Self::Endurance => "endurance",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "weight-loss" | "lose-weight" | "fat-loss" => Ok(Self::WeightLoss),
            "muscle-gain" | "build-muscle" | "bulk" => Ok(Self::MuscleGain),
            "endurance" => Ok(Self::Endurance),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            other => Err(AppError::invalid_input(format!(
                "Unknown fitness goal: '{other}'. Valid options: weight-loss, muscle-gain, endurance, maintenance"
            ))),
        }
    }
}

/// Wellness goals that add rotating notes to each day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WellnessGoal {
    /// Sleep quality
    BetterSleep,
    /// Stress management
    StressRelief,
    /// Digestive health
    GutHealth,
    /// Daytime energy
    MoreEnergy,
    /// Hormonal balance
    HormonalBalance,
    /// Immune support
    Immunity,
}

impl FromStr for WellnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "better-sleep" | "sleep" => Ok(Self::BetterSleep),
            "stress-relief" | "stress" | "stress-reduction" => Ok(Self::StressRelief),
            "gut-health" | "digestion" | "improved-digestion" => Ok(Self::GutHealth),
            "more-energy" | "energy" => Ok(Self::MoreEnergy),
            "hormonal-balance" | "hormones" => Ok(Self::HormonalBalance),
            "immunity" | "immune-support" => Ok(Self::Immunity),
            other => Err(AppError::invalid_input(format!(
                "Unknown wellness goal: '{other}'"
            ))),
        }
    }
}

/// Weekly exercise frequency reported in the profile form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseFrequency {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// 1-2 sessions per week
    Light,
    /// 3-4 sessions per week
    Moderate,
    /// 5 or more sessions per week
    Active,
}

impl FromStr for ExerciseFrequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "sedentary" | "none" | "0" => Ok(Self::Sedentary),
            "light" | "1-2" => Ok(Self::Light),
            "moderate" | "3-4" => Ok(Self::Moderate),
            "active" | "5+" | "daily" => Ok(Self::Active),
            other => Err(AppError::invalid_input(format!(
                "Unknown exercise frequency: '{other}'. Valid options: sedentary, light, moderate, active"
            ))),
        }
    }
}

/// Profile consumed by the plan generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
    /// Lowercased allergy terms, matched as substrings against food names
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Regional cuisine, absent means no regional overrides
    #[serde(default)]
    pub region: Option<Region>,
    /// Gender
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Fitness goal
    pub fitness_goal: FitnessGoal,
    /// Wellness goals
    #[serde(default)]
    pub wellness_goals: Vec<WellnessGoal>,
    /// Weekly exercise frequency
    #[serde(default)]
    pub exercise_frequency: ExerciseFrequency,
    /// First calendar day of the plan
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl UserProfile {
    /// Create a profile with no allergies, region, or wellness goals
    #[must_use]
    pub fn new(
        dietary_preference: DietaryPreference,
        gender: Gender,
        weight_kg: f64,
        fitness_goal: FitnessGoal,
    ) -> Self {
        Self {
            dietary_preference,
            allergies: Vec::new(),
            region: None,
            gender,
            weight_kg,
            fitness_goal,
            wellness_goals: Vec::new(),
            exercise_frequency: ExerciseFrequency::default(),
            start_date: None,
        }
    }

    /// Set the allergy list from a free-text, comma-separated string
    #[must_use]
    pub fn with_allergies(mut self, allergies: &str) -> Self {
        self.allergies = parse_allergies(allergies);
        self
    }

    /// Set the regional cuisine
    #[must_use]
    pub const fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Set wellness goals
    #[must_use]
    pub fn with_wellness_goals(mut self, goals: Vec<WellnessGoal>) -> Self {
        self.wellness_goals = goals;
        self
    }

    /// Set exercise frequency
    #[must_use]
    pub const fn with_exercise_frequency(mut self, frequency: ExerciseFrequency) -> Self {
        self.exercise_frequency = frequency;
        self
    }

    /// Set the plan start date
    #[must_use]
    pub const fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Validate numeric fields supplied by the profile collector
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the body weight is not finite or lies outside
    /// the accepted bounds
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite()
            || self.weight_kg < body_weight::MIN_KG
            || self.weight_kg > body_weight::MAX_KG
        {
            return Err(AppError::out_of_range(format!(
                "Body weight {} kg must be between {} and {} kg",
                self.weight_kg,
                body_weight::MIN_KG,
                body_weight::MAX_KG
            )));
        }
        Ok(())
    }
}

/// Split a free-text allergy field into lowercased, trimmed, de-duplicated terms
#[must_use]
pub fn parse_allergies(raw: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in raw.split([',', ';']) {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && term != "none" && !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

fn normalize_token(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', ' '], "-")
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
