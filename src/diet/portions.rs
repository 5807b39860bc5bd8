// ABOUTME: Portion sizer mapping food category, fitness goal, and gender to serving text
// ABOUTME: Fixed lookup tables in Indian household measures with a generic fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Portion Sizer
//!
//! Serving sizes come from fixed tables keyed by food category, portion goal
//! and gender. Labels are household measures (katori, cup, glass) and never
//! mention a food, so they cannot create identity collisions downstream.

use crate::diet::catalogs::NonVegType;
use nutriplan_core::models::{FitnessGoal, Gender};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Food category used to look up serving sizes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PortionCategory {
    /// Dal, curries and gravies (katori)
    Curry,
    /// Cooked rice and millet rice (cup)
    Rice,
    /// Rotis, parathas, dosas, idlis (count)
    Bread,
    /// Dry vegetables and salads (katori)
    Vegetable,
    /// Paneer, tofu and other protein dishes (grams)
    Protein,
    /// Whole fruit
    Fruit,
    /// Drinks (glass)
    Beverage,
    /// Dry snacks (cup)
    Snack,
    /// Porridges, upma, khichdi and soups (bowl)
    Porridge,
    /// Chutneys and dips (tablespoon)
    Condiment,
}

impl FromStr for PortionCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curry" | "dal" => Ok(Self::Curry),
            "rice" => Ok(Self::Rice),
            "bread" | "roti" => Ok(Self::Bread),
            "vegetable" | "sabzi" | "salad" => Ok(Self::Vegetable),
            "protein" => Ok(Self::Protein),
            "fruit" => Ok(Self::Fruit),
            "beverage" | "drink" => Ok(Self::Beverage),
            "snack" => Ok(Self::Snack),
            "porridge" | "khichdi" | "soup" => Ok(Self::Porridge),
            "condiment" | "chutney" => Ok(Self::Condiment),
            _ => Err(()),
        }
    }
}

/// Portion table selector derived from the fitness goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PortionGoal {
    /// Smallest servings
    WeightLoss,
    /// Largest servings
    ProteinFocus,
    /// Everything else
    Standard,
}

impl From<FitnessGoal> for PortionGoal {
    fn from(goal: FitnessGoal) -> Self {
        match goal {
            FitnessGoal::WeightLoss => Self::WeightLoss,
            FitnessGoal::MuscleGain => Self::ProteinFocus,
            FitnessGoal::Endurance | FitnessGoal::Maintenance => Self::Standard,
        }
    }
}

/// A serving size: display label plus a comparable quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortionDescriptor {
    /// Household-measure label, e.g. "¾ katori"
    pub label: &'static str,
    /// Quantity in the label's unit
    pub quantity: f64,
}

impl PortionDescriptor {
    const fn of(label: &'static str, quantity: f64) -> Self {
        Self { label, quantity }
    }
}

impl fmt::Display for PortionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Serving used when a category name is not recognized
pub const FALLBACK_PORTION: PortionDescriptor = PortionDescriptor::of("1 standard portion", 1.0);

/// Stateless portion lookup
pub struct PortionSizer;

impl PortionSizer {
    /// Serving size for a category under the given goal and gender
    #[must_use]
    pub const fn size_for(
        category: PortionCategory,
        goal: PortionGoal,
        gender: Gender,
    ) -> PortionDescriptor {
        use Gender::{Female as F, Male as M};
        use PortionDescriptor as P;
        use PortionGoal::{ProteinFocus as Pf, Standard as Std, WeightLoss as Wl};

        match category {
            PortionCategory::Curry => match (goal, gender) {
                (Wl, F) => P::of("½ katori", 0.5),
                (Wl, M) | (Std, F) => P::of("¾ katori", 0.75),
                (Std, M) | (Pf, F) => P::of("1 katori", 1.0),
                (Pf, M) => P::of("1½ katori", 1.5),
            },
            PortionCategory::Rice => match (goal, gender) {
                (Wl, F) => P::of("½ cup", 0.5),
                (Wl, M) | (Std, F) => P::of("¾ cup", 0.75),
                (Std, M) | (Pf, F) => P::of("1 cup", 1.0),
                (Pf, M) => P::of("1¼ cup", 1.25),
            },
            PortionCategory::Bread => match (goal, gender) {
                (Wl, F) => P::of("1 medium", 1.0),
                (Wl, M) | (Std, F) => P::of("2 medium", 2.0),
                (Pf, F) => P::of("2 medium", 2.0),
                (Std | Pf, M) => P::of("3 medium", 3.0),
            },
            PortionCategory::Vegetable => match (goal, gender) {
                (Wl | Std | Pf, F) | (Std, M) => P::of("1 katori", 1.0),
                (Wl | Pf, M) => P::of("1½ katori", 1.5),
            },
            PortionCategory::Protein => match (goal, gender) {
                (Wl, F) => P::of("80 g", 80.0),
                (Wl, M) | (Std, F) => P::of("100 g", 100.0),
                (Std, M) | (Pf, F) => P::of("120 g", 120.0),
                (Pf, M) => P::of("150 g", 150.0),
            },
            PortionCategory::Fruit => match (goal, gender) {
                (Wl, F) => P::of("1 small", 0.75),
                (Wl, M) | (Std | Pf, F) => P::of("1 medium", 1.0),
                (Std | Pf, M) => P::of("1 large", 1.25),
            },
            PortionCategory::Beverage => match (goal, gender) {
                (Wl, _) | (Std, F) => P::of("1 glass", 1.0),
                (Std, M) | (Pf, _) => P::of("1 large glass", 1.5),
            },
            PortionCategory::Snack => match (goal, gender) {
                (Wl, F) => P::of("½ cup", 0.5),
                (Wl, M) | (Std | Pf, F) => P::of("¾ cup", 0.75),
                (Std | Pf, M) => P::of("1 cup", 1.0),
            },
            PortionCategory::Porridge => match (goal, gender) {
                (Wl, F) => P::of("1 small bowl", 0.75),
                (Wl, M) | (Std | Pf, F) => P::of("1 bowl", 1.0),
                (Std | Pf, M) => P::of("1 large bowl", 1.25),
            },
            PortionCategory::Condiment => match goal {
                Wl => P::of("1 tbsp", 1.0),
                Std | Pf => P::of("2 tbsp", 2.0),
            },
        }
    }

    /// Serving size for a category given by name, falling back to a generic serving
    #[must_use]
    pub fn size_for_name(category: &str, goal: PortionGoal, gender: Gender) -> PortionDescriptor {
        category
            .parse::<PortionCategory>()
            .map_or(FALLBACK_PORTION, |category| {
                Self::size_for(category, goal, gender)
            })
    }

    /// Serving size for a non-vegetarian dish
    #[must_use]
    pub const fn non_veg(kind: NonVegType, goal: PortionGoal, gender: Gender) -> PortionDescriptor {
        use Gender::{Female as F, Male as M};
        use PortionDescriptor as P;
        use PortionGoal::{ProteinFocus as Pf, Standard as Std, WeightLoss as Wl};

        match kind {
            NonVegType::Egg => match (goal, gender) {
                (Wl, _) | (Std, F) => P::of("2 whole", 2.0),
                (Std, M) | (Pf, F) => P::of("3 whole", 3.0),
                (Pf, M) => P::of("4 whole", 4.0),
            },
            NonVegType::Mutton => match (goal, gender) {
                (Wl, F) => P::of("75 g", 75.0),
                (Wl, M) | (Std, F) => P::of("100 g", 100.0),
                (Std, M) | (Pf, F) => P::of("120 g", 120.0),
                (Pf, M) => P::of("150 g", 150.0),
            },
            NonVegType::Chicken | NonVegType::Fish | NonVegType::Prawn => match (goal, gender) {
                (Wl, F) => P::of("100 g", 100.0),
                (Wl, M) | (Std, F) => P::of("120 g", 120.0),
                (Std, M) | (Pf, F) => P::of("150 g", 150.0),
                (Pf, M) => P::of("180 g", 180.0),
            },
        }
    }
}
