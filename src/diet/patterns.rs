// ABOUTME: Pattern generator producing per-day rotation offsets for the meal selectors
// ABOUTME: Affine congruences per rotation family so consecutive days do not line up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Pattern Generator
//!
//! Each rotation family draws its offset for day index `i` from
//! `(i * multiplier + increment) mod modulus`. The main meal families cycle on
//! the base rotation length; the legume family cycles over the whole plan so
//! dal choices drift across cycles instead of repeating every fortnight.

use serde::Serialize;

/// Family of selections that share an offset sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationFamily {
    /// Breakfast and mid-morning selections
    Breakfast,
    /// Lunch and evening selections
    Lunch,
    /// Dinner selections
    Dinner,
    /// Lunch legume rotation
    Legume,
}

/// Affine congruence `(i * multiplier + increment) mod modulus`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Congruence {
    /// Day-index multiplier
    pub multiplier: usize,
    /// Constant increment
    pub increment: usize,
    /// Modulus
    pub modulus: usize,
}

impl Congruence {
    /// Offset for a zero-based day index
    #[must_use]
    pub const fn offset(&self, day_index: usize) -> usize {
        if self.modulus == 0 {
            return 0;
        }
        (day_index * self.multiplier + self.increment) % self.modulus
    }
}

/// Offset sequences for every rotation family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternOffsets {
    breakfast: Vec<usize>,
    lunch: Vec<usize>,
    dinner: Vec<usize>,
    legume: Vec<usize>,
}

impl PatternOffsets {
    /// Congruence used by a family for a given plan shape
    #[must_use]
    pub const fn congruence(family: RotationFamily, plan_days: usize, cycle_days: usize) -> Congruence {
        let (multiplier, increment, modulus) = match family {
            RotationFamily::Breakfast => (7, 3, cycle_days),
            RotationFamily::Lunch => (11, 5, cycle_days),
            RotationFamily::Dinner => (13, 8, cycle_days),
            RotationFamily::Legume => (17, 11, plan_days),
        };
        Congruence {
            multiplier,
            increment,
            modulus,
        }
    }

    /// Generate offsets for every day of a plan
    #[must_use]
    pub fn generate(plan_days: usize, cycle_days: usize) -> Self {
        let sequence = |family: RotationFamily| -> Vec<usize> {
            let congruence = Self::congruence(family, plan_days, cycle_days);
            (0..plan_days).map(|i| congruence.offset(i)).collect()
        };
        Self {
            breakfast: sequence(RotationFamily::Breakfast),
            lunch: sequence(RotationFamily::Lunch),
            dinner: sequence(RotationFamily::Dinner),
            legume: sequence(RotationFamily::Legume),
        }
    }

    /// Full offset sequence of one family
    #[must_use]
    pub fn family(&self, family: RotationFamily) -> &[usize] {
        match family {
            RotationFamily::Breakfast => &self.breakfast,
            RotationFamily::Lunch => &self.lunch,
            RotationFamily::Dinner => &self.dinner,
            RotationFamily::Legume => &self.legume,
        }
    }

    /// Offset for one day; days beyond the generated range read as zero
    #[must_use]
    pub fn offset(&self, family: RotationFamily, day_index: usize) -> usize {
        self.family(family).get(day_index).copied().unwrap_or(0)
    }
}
